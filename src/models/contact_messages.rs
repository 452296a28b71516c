use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// SeaORM entity for the `contact_messages` table. `date` and `read` are
/// stamped by the storage layer at creation and never accepted from input.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_messages")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub date: String,
    pub read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Public submission shape. Unknown fields are ignored rather than rejected
/// so a payload carrying `date` or `read` is accepted with those values
/// dropped; the storage layer stamps both.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl CreateContactMessage {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validation::require(&mut errors, "name", &self.name);
        validation::require(&mut errors, "email", &self.email);
        validation::check_email(&mut errors, "email", &self.email);
        validation::require(&mut errors, "message", &self.message);
        validation::finish(errors)
    }
}
