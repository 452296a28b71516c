use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Biodata {
    Table,
    Id,
    Name,
    Title,
    Bio,
    Email,
    Phone,
    Location,
    ProfileImage,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Level,
    Percentage,
    Icon,
    Category,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Position,
    Company,
    Duration,
    Description,
    StartDate,
    EndDate,
    Image,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Degree,
    Institution,
    Year,
    Description,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Biodata::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Biodata::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Biodata::Name).string().not_null())
                    .col(ColumnDef::new(Biodata::Title).string().not_null())
                    .col(ColumnDef::new(Biodata::Bio).text().not_null())
                    .col(ColumnDef::new(Biodata::Email).string().not_null())
                    .col(ColumnDef::new(Biodata::Phone).string().not_null())
                    .col(ColumnDef::new(Biodata::Location).string().not_null())
                    .col(ColumnDef::new(Biodata::ProfileImage).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::Name).string().not_null())
                    .col(ColumnDef::new(Skills::Level).string().not_null())
                    .col(ColumnDef::new(Skills::Percentage).integer().not_null())
                    .col(ColumnDef::new(Skills::Icon).string().not_null())
                    .col(ColumnDef::new(Skills::Category).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::Position).string().not_null())
                    .col(ColumnDef::new(Experiences::Company).string().not_null())
                    .col(ColumnDef::new(Experiences::Duration).string().not_null())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(ColumnDef::new(Experiences::StartDate).string().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).string())
                    .col(ColumnDef::new(Experiences::Image).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Education::Degree).string().not_null())
                    .col(ColumnDef::new(Education::Institution).string().not_null())
                    .col(ColumnDef::new(Education::Year).string().not_null())
                    .col(ColumnDef::new(Education::Description).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Biodata::Table).to_owned())
            .await
    }
}
