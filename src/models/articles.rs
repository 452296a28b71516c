use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `articles` table. `published` gates visibility on
/// the public list; the admin list returns every row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    pub image: String,
    pub date: String,
    pub published: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateArticle {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image: String,
    pub date: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

impl CreateArticle {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "title", &self.title);
        validation::require(&mut errors, "excerpt", &self.excerpt);
        validation::require(&mut errors, "content", &self.content);
        validation::require(&mut errors, "category", &self.category);
        validation::require(&mut errors, "image", &self.image);
        validation::require(&mut errors, "date", &self.date);
        validation::finish(errors)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub published: Option<bool>,
}

impl UpdateArticle {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            validation::require(&mut errors, "title", title);
        }
        if let Some(excerpt) = &self.excerpt {
            validation::require(&mut errors, "excerpt", excerpt);
        }
        if let Some(content) = &self.content {
            validation::require(&mut errors, "content", content);
        }
        if let Some(category) = &self.category {
            validation::require(&mut errors, "category", category);
        }
        if let Some(image) = &self.image {
            validation::require(&mut errors, "image", image);
        }
        if let Some(date) = &self.date {
            validation::require(&mut errors, "date", date);
        }
        validation::finish(errors)
    }
}
