pub mod memory;
pub mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::activities::{self, CreateActivity, UpdateActivity};
use crate::models::articles::{self, CreateArticle, UpdateArticle};
use crate::models::biodata::{self, CreateBiodata};
use crate::models::contact_messages::{self, CreateContactMessage};
use crate::models::education::{self, CreateEducation, UpdateEducation};
use crate::models::experiences::{self, CreateExperience, UpdateExperience};
use crate::models::projects::{self, CreateProject, UpdateProject};
use crate::models::services::{self, CreateService, UpdateService};
use crate::models::skills::{self, CreateSkill, UpdateSkill};
use crate::models::social_links::{self, CreateSocialLink, UpdateSocialLink};
use crate::models::users::{self, CreateUser};

#[derive(Debug, Error)]
pub enum StorageError {
    /// An update targeted an id with no row behind it. Both adapters return
    /// this uniformly; it is never an unhandled failure.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// The CRUD contract every backend implements. `PgStorage` is the durable
/// production adapter; `MemStorage` is the deterministic in-memory double
/// used by tests and lightweight deployments.
///
/// Shared semantics:
/// - ids are assigned by the backend, monotonically increasing per entity
///   kind, and never reused within a process lifetime;
/// - list order is insertion order;
/// - `update_*` merges only the supplied fields and fails with `NotFound`
///   for a missing id;
/// - `delete_*` is idempotent: `false` for a missing id, never an error.
#[async_trait]
pub trait Storage: Send + Sync {
    // ── users ──
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<users::Model>>;
    async fn create_user(&self, input: CreateUser) -> StorageResult<users::Model>;

    /// Idempotent admin seed: create the row iff the username is absent.
    /// Safe to run on every startup.
    async fn seed_admin(&self, username: &str, password_hash: &str) -> StorageResult<()> {
        if self.get_user_by_username(username).await?.is_none() {
            self.create_user(CreateUser {
                username: username.to_string(),
                password_hash: password_hash.to_string(),
            })
            .await?;
            tracing::info!("admin user '{username}' created");
        }
        Ok(())
    }

    // ── biodata (singleton) ──
    async fn get_biodata(&self) -> StorageResult<Option<biodata::Model>>;
    /// Upsert: create with a fresh id when no row exists, otherwise
    /// overwrite in place preserving the existing id.
    async fn update_biodata(&self, input: CreateBiodata) -> StorageResult<biodata::Model>;

    // ── skills ──
    async fn list_skills(&self) -> StorageResult<Vec<skills::Model>>;
    async fn get_skill(&self, id: i32) -> StorageResult<Option<skills::Model>>;
    async fn create_skill(&self, input: CreateSkill) -> StorageResult<skills::Model>;
    async fn update_skill(&self, id: i32, input: UpdateSkill) -> StorageResult<skills::Model>;
    async fn delete_skill(&self, id: i32) -> StorageResult<bool>;

    // ── experiences ──
    async fn list_experiences(&self) -> StorageResult<Vec<experiences::Model>>;
    async fn get_experience(&self, id: i32) -> StorageResult<Option<experiences::Model>>;
    async fn create_experience(&self, input: CreateExperience)
    -> StorageResult<experiences::Model>;
    async fn update_experience(
        &self,
        id: i32,
        input: UpdateExperience,
    ) -> StorageResult<experiences::Model>;
    async fn delete_experience(&self, id: i32) -> StorageResult<bool>;

    // ── education ──
    async fn list_education(&self) -> StorageResult<Vec<education::Model>>;
    async fn get_education(&self, id: i32) -> StorageResult<Option<education::Model>>;
    async fn create_education(&self, input: CreateEducation) -> StorageResult<education::Model>;
    async fn update_education(
        &self,
        id: i32,
        input: UpdateEducation,
    ) -> StorageResult<education::Model>;
    async fn delete_education(&self, id: i32) -> StorageResult<bool>;

    // ── activities ──
    async fn list_activities(&self) -> StorageResult<Vec<activities::Model>>;
    async fn get_activity(&self, id: i32) -> StorageResult<Option<activities::Model>>;
    async fn create_activity(&self, input: CreateActivity) -> StorageResult<activities::Model>;
    async fn update_activity(
        &self,
        id: i32,
        input: UpdateActivity,
    ) -> StorageResult<activities::Model>;
    async fn delete_activity(&self, id: i32) -> StorageResult<bool>;

    // ── articles ──
    async fn list_articles(&self) -> StorageResult<Vec<articles::Model>>;
    async fn list_published_articles(&self) -> StorageResult<Vec<articles::Model>>;
    async fn get_article(&self, id: i32) -> StorageResult<Option<articles::Model>>;
    async fn create_article(&self, input: CreateArticle) -> StorageResult<articles::Model>;
    async fn update_article(&self, id: i32, input: UpdateArticle)
    -> StorageResult<articles::Model>;
    async fn delete_article(&self, id: i32) -> StorageResult<bool>;

    // ── contact messages ──
    async fn list_contact_messages(&self) -> StorageResult<Vec<contact_messages::Model>>;
    /// Stamps `date` (RFC 3339, now) and `read` (false) server-side.
    async fn create_contact_message(
        &self,
        input: CreateContactMessage,
    ) -> StorageResult<contact_messages::Model>;
    async fn mark_message_read(&self, id: i32) -> StorageResult<bool>;
    async fn delete_contact_message(&self, id: i32) -> StorageResult<bool>;

    // ── social links ──
    async fn list_social_links(&self) -> StorageResult<Vec<social_links::Model>>;
    async fn get_social_link(&self, id: i32) -> StorageResult<Option<social_links::Model>>;
    async fn create_social_link(
        &self,
        input: CreateSocialLink,
    ) -> StorageResult<social_links::Model>;
    async fn update_social_link(
        &self,
        id: i32,
        input: UpdateSocialLink,
    ) -> StorageResult<social_links::Model>;
    async fn delete_social_link(&self, id: i32) -> StorageResult<bool>;

    // ── services ──
    async fn list_services(&self) -> StorageResult<Vec<services::Model>>;
    async fn get_service(&self, id: i32) -> StorageResult<Option<services::Model>>;
    async fn create_service(&self, input: CreateService) -> StorageResult<services::Model>;
    async fn update_service(&self, id: i32, input: UpdateService)
    -> StorageResult<services::Model>;
    async fn delete_service(&self, id: i32) -> StorageResult<bool>;

    // ── projects ──
    async fn list_projects(&self) -> StorageResult<Vec<projects::Model>>;
    async fn get_project(&self, id: i32) -> StorageResult<Option<projects::Model>>;
    async fn create_project(&self, input: CreateProject) -> StorageResult<projects::Model>;
    async fn update_project(&self, id: i32, input: UpdateProject)
    -> StorageResult<projects::Model>;
    async fn delete_project(&self, id: i32) -> StorageResult<bool>;
}
