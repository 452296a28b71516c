use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `activities` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: String,
    pub category: String,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateActivity {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub image: Option<String>,
}

impl CreateActivity {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "title", &self.title);
        validation::require(&mut errors, "description", &self.description);
        validation::require(&mut errors, "icon", &self.icon);
        validation::require(&mut errors, "category", &self.category);
        validation::finish(errors)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateActivity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl UpdateActivity {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            validation::require(&mut errors, "title", title);
        }
        if let Some(description) = &self.description {
            validation::require(&mut errors, "description", description);
        }
        if let Some(icon) = &self.icon {
            validation::require(&mut errors, "icon", icon);
        }
        if let Some(category) = &self.category {
            validation::require(&mut errors, "category", category);
        }
        validation::finish(errors)
    }
}
