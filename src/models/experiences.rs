use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `experiences` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub position: String,
    pub company: String,
    pub duration: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateExperience {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub image: Option<String>,
}

impl CreateExperience {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "position", &self.position);
        validation::require(&mut errors, "company", &self.company);
        validation::require(&mut errors, "duration", &self.duration);
        validation::require(&mut errors, "description", &self.description);
        validation::require(&mut errors, "startDate", &self.start_date);
        validation::finish(errors)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateExperience {
    pub position: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub image: Option<String>,
}

impl UpdateExperience {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(position) = &self.position {
            validation::require(&mut errors, "position", position);
        }
        if let Some(company) = &self.company {
            validation::require(&mut errors, "company", company);
        }
        if let Some(duration) = &self.duration {
            validation::require(&mut errors, "duration", duration);
        }
        if let Some(description) = &self.description {
            validation::require(&mut errors, "description", description);
        }
        if let Some(start_date) = &self.start_date {
            validation::require(&mut errors, "startDate", start_date);
        }
        validation::finish(errors)
    }
}
