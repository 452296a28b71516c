use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `education` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "education")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEducation {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: Option<String>,
}

impl CreateEducation {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "degree", &self.degree);
        validation::require(&mut errors, "institution", &self.institution);
        validation::require(&mut errors, "year", &self.year);
        validation::finish(errors)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEducation {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
}

impl UpdateEducation {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(degree) = &self.degree {
            validation::require(&mut errors, "degree", degree);
        }
        if let Some(institution) = &self.institution {
            validation::require(&mut errors, "institution", institution);
        }
        if let Some(year) = &self.year {
            validation::require(&mut errors, "year", year);
        }
        validation::finish(errors)
    }
}
