use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `biodata` table. At most one row exists; updates
/// go through the upsert in the storage layer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "biodata")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Full insert shape; `PUT /api/biodata` always sends every field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBiodata {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_image: Option<String>,
}

impl CreateBiodata {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "name", &self.name);
        validation::require(&mut errors, "title", &self.title);
        validation::require(&mut errors, "bio", &self.bio);
        validation::require(&mut errors, "email", &self.email);
        validation::check_email(&mut errors, "email", &self.email);
        validation::require(&mut errors, "phone", &self.phone);
        validation::require(&mut errors, "location", &self.location);
        validation::finish(errors)
    }
}
