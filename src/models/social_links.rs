use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `social_links` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "social_links")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

impl CreateSocialLink {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "platform", &self.platform);
        validation::require(&mut errors, "url", &self.url);
        validation::require(&mut errors, "icon", &self.icon);
        validation::finish(errors)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSocialLink {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

impl UpdateSocialLink {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(platform) = &self.platform {
            validation::require(&mut errors, "platform", platform);
        }
        if let Some(url) = &self.url {
            validation::require(&mut errors, "url", url);
        }
        if let Some(icon) = &self.icon {
            validation::require(&mut errors, "icon", icon);
        }
        validation::finish(errors)
    }
}
