use sea_orm::entity::prelude::*;
use serde::Serialize;

/// SeaORM entity for the `users` table. The stored credential is a bcrypt
/// hash, so the model is never serialized into API responses as-is.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Insert shape used by the idempotent admin seed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}

/// Public identity returned by login and status responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserIdentity {
    pub id: i32,
    pub username: String,
}

impl From<Model> for UserIdentity {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
        }
    }
}
