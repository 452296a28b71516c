use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `projects` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub year: String,
    pub link: Option<String>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub year: String,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "title", &self.title);
        validation::require(&mut errors, "description", &self.description);
        validation::require(&mut errors, "year", &self.year);
        validation::finish(errors)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl UpdateProject {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            validation::require(&mut errors, "title", title);
        }
        if let Some(description) = &self.description {
            validation::require(&mut errors, "description", description);
        }
        if let Some(year) = &self.year {
            validation::require(&mut errors, "year", year);
        }
        validation::finish(errors)
    }
}
