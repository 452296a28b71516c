use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `skills` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub level: String,
    pub percentage: i32,
    pub icon: String,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSkill {
    pub name: String,
    pub level: String,
    pub percentage: i32,
    pub icon: String,
    pub category: String,
}

impl CreateSkill {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "name", &self.name);
        validation::require(&mut errors, "level", &self.level);
        validation::check_percentage(&mut errors, "percentage", self.percentage);
        validation::require(&mut errors, "icon", &self.icon);
        validation::require(&mut errors, "category", &self.category);
        validation::finish(errors)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub level: Option<String>,
    pub percentage: Option<i32>,
    pub icon: Option<String>,
    pub category: Option<String>,
}

impl UpdateSkill {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            validation::require(&mut errors, "name", name);
        }
        if let Some(level) = &self.level {
            validation::require(&mut errors, "level", level);
        }
        if let Some(percentage) = self.percentage {
            validation::check_percentage(&mut errors, "percentage", percentage);
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
