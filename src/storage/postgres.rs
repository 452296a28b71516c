use async_trait::async_trait;
use sea_orm::*;

use super::{Storage, StorageError, StorageResult};
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

/// Durable adapter over a SeaORM Postgres connection pool. One table per
/// entity kind, auto-increment integer primary keys, no foreign keys.
pub struct PgStorage {
    db: DatabaseConnection,
}

impl PgStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Storage for PgStorage {
    // ── users ──

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<users::Model>> {
        Ok(users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    async fn create_user(&self, input: CreateUser) -> StorageResult<users::Model> {
        let new_user = users::ActiveModel {
            username: Set(input.username),
            password_hash: Set(input.password_hash),
            ..Default::default()
        };
        Ok(new_user.insert(&self.db).await?)
    }

    // ── biodata ──

    async fn get_biodata(&self) -> StorageResult<Option<biodata::Model>> {
        Ok(biodata::Entity::find().one(&self.db).await?)
    }

    async fn update_biodata(&self, input: CreateBiodata) -> StorageResult<biodata::Model> {
        match biodata::Entity::find().one(&self.db).await? {
            Some(existing) => {
                let mut active: biodata::ActiveModel = existing.into();
                active.name = Set(input.name);
                active.title = Set(input.title);
                active.bio = Set(input.bio);
                active.email = Set(input.email);
                active.phone = Set(input.phone);
                active.location = Set(input.location);
                active.profile_image = Set(input.profile_image);
                Ok(active.update(&self.db).await?)
            }
            None => {
                let new_biodata = biodata::ActiveModel {
                    name: Set(input.name),
                    title: Set(input.title),
                    bio: Set(input.bio),
                    email: Set(input.email),
                    phone: Set(input.phone),
                    location: Set(input.location),
                    profile_image: Set(input.profile_image),
                    ..Default::default()
                };
                Ok(new_biodata.insert(&self.db).await?)
            }
        }
    }

    // ── skills ──

    async fn list_skills(&self) -> StorageResult<Vec<skills::Model>> {
        Ok(skills::Entity::find()
            .order_by_asc(skills::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_skill(&self, id: i32) -> StorageResult<Option<skills::Model>> {
        Ok(skills::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_skill(&self, input: CreateSkill) -> StorageResult<skills::Model> {
        let new_skill = skills::ActiveModel {
            name: Set(input.name),
            level: Set(input.level),
            percentage: Set(input.percentage),
            icon: Set(input.icon),
            category: Set(input.category),
            ..Default::default()
        };
        Ok(new_skill.insert(&self.db).await?)
    }

    async fn update_skill(&self, id: i32, input: UpdateSkill) -> StorageResult<skills::Model> {
        let skill = skills::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Skill"))?;

        let mut active: skills::ActiveModel = skill.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(level) = input.level {
            active.level = Set(level);
        }
        if let Some(percentage) = input.percentage {
            active.percentage = Set(percentage);
        }
        if let Some(icon) = input.icon {
            active.icon = Set(icon);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        Ok(active.update(&self.db).await?)
    }

    async fn delete_skill(&self, id: i32) -> StorageResult<bool> {
        let result = skills::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    // ── experiences ──

    async fn list_experiences(&self) -> StorageResult<Vec<experiences::Model>> {
        Ok(experiences::Entity::find()
            .order_by_asc(experiences::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_experience(&self, id: i32) -> StorageResult<Option<experiences::Model>> {
        Ok(experiences::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_experience(
        &self,
        input: CreateExperience,
    ) -> StorageResult<experiences::Model> {
        let new_experience = experiences::ActiveModel {
            position: Set(input.position),
            company: Set(input.company),
            duration: Set(input.duration),
            description: Set(input.description),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            image: Set(input.image),
            ..Default::default()
        };
        Ok(new_experience.insert(&self.db).await?)
    }

    async fn update_experience(
        &self,
        id: i32,
        input: UpdateExperience,
    ) -> StorageResult<experiences::Model> {
        let experience = experiences::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Experience"))?;

        let mut active: experiences::ActiveModel = experience.into();
        if let Some(position) = input.position {
            active.position = Set(position);
        }
        if let Some(company) = input.company {
            active.company = Set(company);
        }
        if let Some(duration) = input.duration {
            active.duration = Set(duration);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(start_date) = input.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = input.end_date {
            active.end_date = Set(Some(end_date));
        }
        if let Some(image) = input.image {
            active.image = Set(Some(image));
        }
        Ok(active.update(&self.db).await?)
    }

    async fn delete_experience(&self, id: i32) -> StorageResult<bool> {
        let result = experiences::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    // ── education ──

    async fn list_education(&self) -> StorageResult<Vec<education::Model>> {
        Ok(education::Entity::find()
            .order_by_asc(education::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_education(&self, id: i32) -> StorageResult<Option<education::Model>> {
        Ok(education::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_education(&self, input: CreateEducation) -> StorageResult<education::Model> {
        let new_education = education::ActiveModel {
            degree: Set(input.degree),
            institution: Set(input.institution),
            year: Set(input.year),
            description: Set(input.description),
            ..Default::default()
        };
        Ok(new_education.insert(&self.db).await?)
    }

    async fn update_education(
        &self,
        id: i32,
        input: UpdateEducation,
    ) -> StorageResult<education::Model> {
        let education_item = education::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Education"))?;

        let mut active: education::ActiveModel = education_item.into();
        if let Some(degree) = input.degree {
            active.degree = Set(degree);
        }
        if let Some(institution) = input.institution {
            active.institution = Set(institution);
        }
        if let Some(year) = input.year {
            active.year = Set(year);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        Ok(active.update(&self.db).await?)
    }

    async fn delete_education(&self, id: i32) -> StorageResult<bool> {
        let result = education::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    // ── activities ──

    async fn list_activities(&self) -> StorageResult<Vec<activities::Model>> {
        Ok(activities::Entity::find()
            .order_by_asc(activities::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_activity(&self, id: i32) -> StorageResult<Option<activities::Model>> {
        Ok(activities::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_activity(&self, input: CreateActivity) -> StorageResult<activities::Model> {
        let new_activity = activities::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            icon: Set(input.icon),
            category: Set(input.category),
            image: Set(input.image),
            ..Default::default()
        };
        Ok(new_activity.insert(&self.db).await?)
    }

    async fn update_activity(
        &self,
        id: i32,
        input: UpdateActivity,
    ) -> StorageResult<activities::Model> {
        let activity = activities::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Activity"))?;

        let mut active: activities::ActiveModel = activity.into();
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(icon) = input.icon {
            active.icon = Set(icon);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(image) = input.image {
            active.image = Set(Some(image));
        }
        Ok(active.update(&self.db).await?)
    }

    async fn delete_activity(&self, id: i32) -> StorageResult<bool> {
        let result = activities::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    // ── articles ──

    async fn list_articles(&self) -> StorageResult<Vec<articles::Model>> {
        Ok(articles::Entity::find()
            .order_by_asc(articles::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn list_published_articles(&self) -> StorageResult<Vec<articles::Model>> {
        Ok(articles::Entity::find()
            .filter(articles::Column::Published.eq(true))
            .order_by_asc(articles::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_article(&self, id: i32) -> StorageResult<Option<articles::Model>> {
        Ok(articles::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_article(&self, input: CreateArticle) -> StorageResult<articles::Model> {
        let new_article = articles::ActiveModel {
            title: Set(input.title),
            excerpt: Set(input.excerpt),
            content: Set(input.content),
            category: Set(input.category),
            image: Set(input.image),
            date: Set(input.date),
            published: Set(input.published),
            ..Default::default()
        };
        Ok(new_article.insert(&self.db).await?)
    }

    async fn update_article(
        &self,
        id: i32,
        input: UpdateArticle,
    ) -> StorageResult<articles::Model> {
        let article = articles::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Article"))?;

        let mut active: articles::ActiveModel = article.into();
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(excerpt) = input.excerpt {
            active.excerpt = Set(excerpt);
        }
        if let Some(content) = input.content {
            active.content = Set(content);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(image) = input.image {
            active.image = Set(image);
        }
        if let Some(date) = input.date {
            active.date = Set(date);
        }
        if let Some(published) = input.published {
            active.published = Set(published);
        }
        Ok(active.update(&self.db).await?)
    }

    async fn delete_article(&self, id: i32) -> StorageResult<bool> {
        let result = articles::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    // ── contact messages ──

    async fn list_contact_messages(&self) -> StorageResult<Vec<contact_messages::Model>> {
        Ok(contact_messages::Entity::find()
            .order_by_asc(contact_messages::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn create_contact_message(
        &self,
        input: CreateContactMessage,
    ) -> StorageResult<contact_messages::Model> {
        let new_message = contact_messages::ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            message: Set(input.message),
            date: Set(chrono::Utc::now().to_rfc3339()),
            read: Set(false),
            ..Default::default()
        };
        Ok(new_message.insert(&self.db).await?)
    }

    async fn mark_message_read(&self, id: i32) -> StorageResult<bool> {
        let Some(message) = contact_messages::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(false);
        };
        let mut active: contact_messages::ActiveModel = message.into();
        active.read = Set(true);
        active.update(&self.db).await?;
        Ok(true)
    }

    async fn delete_contact_message(&self, id: i32) -> StorageResult<bool> {
        let result = contact_messages::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    // ── social links ──

    async fn list_social_links(&self) -> StorageResult<Vec<social_links::Model>> {
        Ok(social_links::Entity::find()
            .order_by_asc(social_links::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_social_link(&self, id: i32) -> StorageResult<Option<social_links::Model>> {
        Ok(social_links::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_social_link(
        &self,
        input: CreateSocialLink,
    ) -> StorageResult<social_links::Model> {
        let new_link = social_links::ActiveModel {
            platform: Set(input.platform),
            url: Set(input.url),
            icon: Set(input.icon),
            ..Default::default()
        };
        Ok(new_link.insert(&self.db).await?)
    }

    async fn update_social_link(
        &self,
        id: i32,
        input: UpdateSocialLink,
    ) -> StorageResult<social_links::Model> {
        let link = social_links::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Social link"))?;

        let mut active: social_links::ActiveModel = link.into();
        if let Some(platform) = input.platform {
            active.platform = Set(platform);
        }
        if let Some(url) = input.url {
            active.url = Set(url);
        }
        if let Some(icon) = input.icon {
            active.icon = Set(icon);
        }
        Ok(active.update(&self.db).await?)
    }

    async fn delete_social_link(&self, id: i32) -> StorageResult<bool> {
        let result = social_links::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    // ── services ──

    async fn list_services(&self) -> StorageResult<Vec<services::Model>> {
        Ok(services::Entity::find()
            .order_by_asc(services::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_service(&self, id: i32) -> StorageResult<Option<services::Model>> {
        Ok(services::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_service(&self, input: CreateService) -> StorageResult<services::Model> {
        let new_service = services::ActiveModel {
            name: Set(input.name),
            price: Set(input.price),
            description: Set(input.description),
            ..Default::default()
        };
        Ok(new_service.insert(&self.db).await?)
    }

    async fn update_service(
        &self,
        id: i32,
        input: UpdateService,
    ) -> StorageResult<services::Model> {
        let service = services::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Service"))?;

        let mut active: services::ActiveModel = service.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(price) = input.price {
            active.price = Set(price);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        Ok(active.update(&self.db).await?)
    }

    async fn delete_service(&self, id: i32) -> StorageResult<bool> {
        let result = services::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    // ── projects ──

    async fn list_projects(&self) -> StorageResult<Vec<projects::Model>> {
        Ok(projects::Entity::find()
            .order_by_asc(projects::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_project(&self, id: i32) -> StorageResult<Option<projects::Model>> {
        Ok(projects::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_project(&self, input: CreateProject) -> StorageResult<projects::Model> {
        let new_project = projects::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            year: Set(input.year),
            link: Set(input.link),
            image: Set(input.image),
            ..Default::default()
        };
        Ok(new_project.insert(&self.db).await?)
    }

    async fn update_project(
        &self,
        id: i32,
        input: UpdateProject,
    ) -> StorageResult<projects::Model> {
        let project = projects::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Project"))?;

        let mut active: projects::ActiveModel = project.into();
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(year) = input.year {
            active.year = Set(year);
        }
        if let Some(link) = input.link {
            active.link = Set(Some(link));
        }
        if let Some(image) = input.image {
            active.image = Set(Some(image));
        }
        Ok(active.update(&self.db).await?)
    }

    async fn delete_project(&self, id: i32) -> StorageResult<bool> {
        let result = projects::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
