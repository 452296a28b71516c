use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Storage, StorageError, StorageResult};
use crate::auth::password::hash_password;
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

/// One in-memory table: rows keyed by id plus a monotonic counter. Ids are
/// never reused within a process lifetime, and BTreeMap iteration yields
/// ascending ids, which is insertion order.
struct MemTable<M> {
    rows: BTreeMap<i32, M>,
    next_id: i32,
}

impl<M: Clone> MemTable<M> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push_with(&mut self, build: impl FnOnce(i32) -> M) -> M {
        let id = self.alloc_id();
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn list(&self) -> Vec<M> {
        self.rows.values().cloned().collect()
    }
}

/// Deterministic in-memory adapter used by tests and lightweight
/// deployments. State lives only as long as the process.
pub struct MemStorage {
    users: RwLock<MemTable<users::Model>>,
    biodata: RwLock<MemTable<biodata::Model>>,
    skills: RwLock<MemTable<skills::Model>>,
    experiences: RwLock<MemTable<experiences::Model>>,
    education: RwLock<MemTable<education::Model>>,
    activities: RwLock<MemTable<activities::Model>>,
    articles: RwLock<MemTable<articles::Model>>,
    contact_messages: RwLock<MemTable<contact_messages::Model>>,
    social_links: RwLock<MemTable<social_links::Model>>,
    services: RwLock<MemTable<services::Model>>,
    projects: RwLock<MemTable<projects::Model>>,
}

impl MemStorage {
    /// Empty store, no users. Callers that need an admin account seed one
    /// via `seed_admin` or start from `seeded()`.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(MemTable::new()),
            biodata: RwLock::new(MemTable::new()),
            skills: RwLock::new(MemTable::new()),
            experiences: RwLock::new(MemTable::new()),
            education: RwLock::new(MemTable::new()),
            activities: RwLock::new(MemTable::new()),
            articles: RwLock::new(MemTable::new()),
            contact_messages: RwLock::new(MemTable::new()),
            social_links: RwLock::new(MemTable::new()),
            services: RwLock::new(MemTable::new()),
            projects: RwLock::new(MemTable::new()),
        }
    }

    /// Store pre-seeded with the default admin account (admin / admin123)
    /// and representative sample content for local development.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        let admin_hash =
            hash_password("admin123").expect("bcrypt rejected the default admin password");
        store.users.get_mut().push_with(|id| users::Model {
            id,
            username: "admin".to_string(),
            password_hash: admin_hash,
        });

        store.biodata.get_mut().push_with(|id| biodata::Model {
            id,
            name: "John Carter".to_string(),
            title: "Full-Stack Developer".to_string(),
            bio: "I build web applications end to end, from database schema to pixel."
                .to_string(),
            email: "john@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Austin, TX".to_string(),
            profile_image: None,
        });

        let skill_rows = store.skills.get_mut();
        skill_rows.push_with(|id| skills::Model {
            id,
            name: "TypeScript".to_string(),
            level: "Advanced".to_string(),
            percentage: 90,
            icon: "devicon-typescript".to_string(),
            category: "Frontend".to_string(),
        });
        skill_rows.push_with(|id| skills::Model {
            id,
            name: "PostgreSQL".to_string(),
            level: "Intermediate".to_string(),
            percentage: 70,
            icon: "devicon-postgresql".to_string(),
            category: "Backend".to_string(),
        });

        store
            .experiences
            .get_mut()
            .push_with(|id| experiences::Model {
                id,
                position: "Software Engineer".to_string(),
                company: "Acme Corp".to_string(),
                duration: "2021 - Present".to_string(),
                description: "Building internal tooling and customer-facing dashboards."
                    .to_string(),
                start_date: "2021-03".to_string(),
                end_date: None,
                image: None,
            });

        store.education.get_mut().push_with(|id| education::Model {
            id,
            degree: "B.Sc. Computer Science".to_string(),
            institution: "State University".to_string(),
            year: "2020".to_string(),
            description: None,
        });

        store
            .activities
            .get_mut()
            .push_with(|id| activities::Model {
                id,
                title: "Open Source".to_string(),
                description: "Maintainer of a handful of small libraries.".to_string(),
                icon: "code".to_string(),
                category: "Community".to_string(),
                image: None,
            });

        let article_rows = store.articles.get_mut();
        article_rows.push_with(|id| articles::Model {
            id,
            title: "Shipping a Side Project".to_string(),
            excerpt: "Notes from taking a weekend idea to production.".to_string(),
            content: "The hardest part is deciding what not to build.".to_string(),
            category: "Engineering".to_string(),
            image: "/uploads/shipping.png".to_string(),
            date: "2024-11-02".to_string(),
            published: true,
        });
        article_rows.push_with(|id| articles::Model {
            id,
            title: "Draft: Database Indexing Notes".to_string(),
            excerpt: "Work in progress.".to_string(),
            content: "TBD".to_string(),
            category: "Engineering".to_string(),
            image: "/uploads/indexing.png".to_string(),
            date: "2024-12-01".to_string(),
            published: false,
        });

        let link_rows = store.social_links.get_mut();
        link_rows.push_with(|id| social_links::Model {
            id,
            platform: "GitHub".to_string(),
            url: "https://github.com/johncarter".to_string(),
            icon: "github".to_string(),
        });
        link_rows.push_with(|id| social_links::Model {
            id,
            platform: "LinkedIn".to_string(),
            url: "https://linkedin.com/in/johncarter".to_string(),
            icon: "linkedin".to_string(),
        });

        store.services.get_mut().push_with(|id| services::Model {
            id,
            name: "Web Development".to_string(),
            price: "$75/hr".to_string(),
            description: Some("Full-stack application development.".to_string()),
        });

        store.projects.get_mut().push_with(|id| projects::Model {
            id,
            title: "Portfolio CMS".to_string(),
            description: "The site you are looking at.".to_string(),
            year: "2024".to_string(),
            link: Some("https://github.com/johncarter/portfolio".to_string()),
            image: None,
        });

        store
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    // ── users ──

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<users::Model>> {
        let table = self.users.read().await;
        Ok(table
            .rows
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, input: CreateUser) -> StorageResult<users::Model> {
        let mut table = self.users.write().await;
        Ok(table.push_with(|id| users::Model {
            id,
            username: input.username,
            password_hash: input.password_hash,
        }))
    }

    // ── biodata ──

    async fn get_biodata(&self) -> StorageResult<Option<biodata::Model>> {
        Ok(self.biodata.read().await.rows.values().next().cloned())
    }

    async fn update_biodata(&self, input: CreateBiodata) -> StorageResult<biodata::Model> {
        let mut table = self.biodata.write().await;
        let existing_id = table.rows.keys().next().copied();
        match existing_id {
            Some(id) => {
                let row = biodata::Model {
                    id,
                    name: input.name,
                    title: input.title,
                    bio: input.bio,
                    email: input.email,
                    phone: input.phone,
                    location: input.location,
                    profile_image: input.profile_image,
                };
                table.rows.insert(id, row.clone());
                Ok(row)
            }
            None => Ok(table.push_with(|id| biodata::Model {
                id,
                name: input.name,
                title: input.title,
                bio: input.bio,
                email: input.email,
                phone: input.phone,
                location: input.location,
                profile_image: input.profile_image,
            })),
        }
    }

    // ── skills ──

    async fn list_skills(&self) -> StorageResult<Vec<skills::Model>> {
        Ok(self.skills.read().await.list())
    }

    async fn get_skill(&self, id: i32) -> StorageResult<Option<skills::Model>> {
        Ok(self.skills.read().await.rows.get(&id).cloned())
    }

    async fn create_skill(&self, input: CreateSkill) -> StorageResult<skills::Model> {
        let mut table = self.skills.write().await;
        Ok(table.push_with(|id| skills::Model {
            id,
            name: input.name,
            level: input.level,
            percentage: input.percentage,
            icon: input.icon,
            category: input.category,
        }))
    }

    async fn update_skill(&self, id: i32, input: UpdateSkill) -> StorageResult<skills::Model> {
        let mut table = self.skills.write().await;
        let skill = table
            .rows
            .get_mut(&id)
            .ok_or(StorageError::NotFound("Skill"))?;
        if let Some(name) = input.name {
            skill.name = name;
        }
        if let Some(level) = input.level {
            skill.level = level;
        }
        if let Some(percentage) = input.percentage {
            skill.percentage = percentage;
        }
        if let Some(icon) = input.icon {
            skill.icon = icon;
        }
        if let Some(category) = input.category {
            skill.category = category;
        }
        Ok(skill.clone())
    }

    async fn delete_skill(&self, id: i32) -> StorageResult<bool> {
        Ok(self.skills.write().await.rows.remove(&id).is_some())
    }

    // ── experiences ──

    async fn list_experiences(&self) -> StorageResult<Vec<experiences::Model>> {
        Ok(self.experiences.read().await.list())
    }

    async fn get_experience(&self, id: i32) -> StorageResult<Option<experiences::Model>> {
        Ok(self.experiences.read().await.rows.get(&id).cloned())
    }

    async fn create_experience(
        &self,
        input: CreateExperience,
    ) -> StorageResult<experiences::Model> {
        let mut table = self.experiences.write().await;
        Ok(table.push_with(|id| experiences::Model {
            id,
            position: input.position,
            company: input.company,
            duration: input.duration,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            image: input.image,
        }))
    }

    async fn update_experience(
        &self,
        id: i32,
        input: UpdateExperience,
    ) -> StorageResult<experiences::Model> {
        let mut table = self.experiences.write().await;
        let experience = table
            .rows
            .get_mut(&id)
            .ok_or(StorageError::NotFound("Experience"))?;
        if let Some(position) = input.position {
            experience.position = position;
        }
        if let Some(company) = input.company {
            experience.company = company;
        }
        if let Some(duration) = input.duration {
            experience.duration = duration;
        }
        if let Some(description) = input.description {
            experience.description = description;
        }
        if let Some(start_date) = input.start_date {
            experience.start_date = start_date;
        }
        if let Some(end_date) = input.end_date {
            experience.end_date = Some(end_date);
        }
        if let Some(image) = input.image {
            experience.image = Some(image);
        }
        Ok(experience.clone())
    }

    async fn delete_experience(&self, id: i32) -> StorageResult<bool> {
        Ok(self.experiences.write().await.rows.remove(&id).is_some())
    }

    // ── education ──

    async fn list_education(&self) -> StorageResult<Vec<education::Model>> {
        Ok(self.education.read().await.list())
    }

    async fn get_education(&self, id: i32) -> StorageResult<Option<education::Model>> {
        Ok(self.education.read().await.rows.get(&id).cloned())
    }

    async fn create_education(&self, input: CreateEducation) -> StorageResult<education::Model> {
        let mut table = self.education.write().await;
        Ok(table.push_with(|id| education::Model {
            id,
            degree: input.degree,
            institution: input.institution,
            year: input.year,
            description: input.description,
        }))
    }

    async fn update_education(
        &self,
        id: i32,
        input: UpdateEducation,
    ) -> StorageResult<education::Model> {
        let mut table = self.education.write().await;
        let education_item = table
            .rows
            .get_mut(&id)
            .ok_or(StorageError::NotFound("Education"))?;
        if let Some(degree) = input.degree {
            education_item.degree = degree;
        }
        if let Some(institution) = input.institution {
            education_item.institution = institution;
        }
        if let Some(year) = input.year {
            education_item.year = year;
        }
        if let Some(description) = input.description {
            education_item.description = Some(description);
        }
        Ok(education_item.clone())
    }

    async fn delete_education(&self, id: i32) -> StorageResult<bool> {
        Ok(self.education.write().await.rows.remove(&id).is_some())
    }

    // ── activities ──

    async fn list_activities(&self) -> StorageResult<Vec<activities::Model>> {
        Ok(self.activities.read().await.list())
    }

    async fn get_activity(&self, id: i32) -> StorageResult<Option<activities::Model>> {
        Ok(self.activities.read().await.rows.get(&id).cloned())
    }

    async fn create_activity(&self, input: CreateActivity) -> StorageResult<activities::Model> {
        let mut table = self.activities.write().await;
        Ok(table.push_with(|id| activities::Model {
            id,
            title: input.title,
            description: input.description,
            icon: input.icon,
            category: input.category,
            image: input.image,
        }))
    }

    async fn update_activity(
        &self,
        id: i32,
        input: UpdateActivity,
    ) -> StorageResult<activities::Model> {
        let mut table = self.activities.write().await;
        let activity = table
            .rows
            .get_mut(&id)
            .ok_or(StorageError::NotFound("Activity"))?;
        if let Some(title) = input.title {
            activity.title = title;
        }
        if let Some(description) = input.description {
            activity.description = description;
        }
        if let Some(icon) = input.icon {
            activity.icon = icon;
        }
        if let Some(category) = input.category {
            activity.category = category;
        }
        if let Some(image) = input.image {
            activity.image = Some(image);
        }
        Ok(activity.clone())
    }

    async fn delete_activity(&self, id: i32) -> StorageResult<bool> {
        Ok(self.activities.write().await.rows.remove(&id).is_some())
    }

    // ── articles ──

    async fn list_articles(&self) -> StorageResult<Vec<articles::Model>> {
        Ok(self.articles.read().await.list())
    }

    async fn list_published_articles(&self) -> StorageResult<Vec<articles::Model>> {
        let table = self.articles.read().await;
        Ok(table
            .rows
            .values()
            .filter(|a| a.published)
            .cloned()
            .collect())
    }

    async fn get_article(&self, id: i32) -> StorageResult<Option<articles::Model>> {
        Ok(self.articles.read().await.rows.get(&id).cloned())
    }

    async fn create_article(&self, input: CreateArticle) -> StorageResult<articles::Model> {
        let mut table = self.articles.write().await;
        Ok(table.push_with(|id| articles::Model {
            id,
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            category: input.category,
            image: input.image,
            date: input.date,
            published: input.published,
        }))
    }

    async fn update_article(
        &self,
        id: i32,
        input: UpdateArticle,
    ) -> StorageResult<articles::Model> {
        let mut table = self.articles.write().await;
        let article = table
            .rows
            .get_mut(&id)
            .ok_or(StorageError::NotFound("Article"))?;
        if let Some(title) = input.title {
            article.title = title;
        }
        if let Some(excerpt) = input.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(content) = input.content {
            article.content = content;
        }
        if let Some(category) = input.category {
            article.category = category;
        }
        if let Some(image) = input.image {
            article.image = image;
        }
        if let Some(date) = input.date {
            article.date = date;
        }
        if let Some(published) = input.published {
            article.published = published;
        }
        Ok(article.clone())
    }

    async fn delete_article(&self, id: i32) -> StorageResult<bool> {
        Ok(self.articles.write().await.rows.remove(&id).is_some())
    }

    // ── contact messages ──

    async fn list_contact_messages(&self) -> StorageResult<Vec<contact_messages::Model>> {
        Ok(self.contact_messages.read().await.list())
    }

    async fn create_contact_message(
        &self,
        input: CreateContactMessage,
    ) -> StorageResult<contact_messages::Model> {
        let mut table = self.contact_messages.write().await;
        Ok(table.push_with(|id| contact_messages::Model {
            id,
            name: input.name,
            email: input.email,
            message: input.message,
            date: chrono::Utc::now().to_rfc3339(),
            read: false,
        }))
    }

    async fn mark_message_read(&self, id: i32) -> StorageResult<bool> {
        let mut table = self.contact_messages.write().await;
        match table.rows.get_mut(&id) {
            Some(message) => {
                message.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_contact_message(&self, id: i32) -> StorageResult<bool> {
        Ok(self
            .contact_messages
            .write()
            .await
            .rows
            .remove(&id)
            .is_some())
    }

    // ── social links ──

    async fn list_social_links(&self) -> StorageResult<Vec<social_links::Model>> {
        Ok(self.social_links.read().await.list())
    }

    async fn get_social_link(&self, id: i32) -> StorageResult<Option<social_links::Model>> {
        Ok(self.social_links.read().await.rows.get(&id).cloned())
    }

    async fn create_social_link(
        &self,
        input: CreateSocialLink,
    ) -> StorageResult<social_links::Model> {
        let mut table = self.social_links.write().await;
        Ok(table.push_with(|id| social_links::Model {
            id,
            platform: input.platform,
            url: input.url,
            icon: input.icon,
        }))
    }

    async fn update_social_link(
        &self,
        id: i32,
        input: UpdateSocialLink,
    ) -> StorageResult<social_links::Model> {
        let mut table = self.social_links.write().await;
        let link = table
            .rows
            .get_mut(&id)
            .ok_or(StorageError::NotFound("Social link"))?;
        if let Some(platform) = input.platform {
            link.platform = platform;
        }
        if let Some(url) = input.url {
            link.url = url;
        }
        if let Some(icon) = input.icon {
            link.icon = icon;
        }
        Ok(link.clone())
    }

    async fn delete_social_link(&self, id: i32) -> StorageResult<bool> {
        Ok(self.social_links.write().await.rows.remove(&id).is_some())
    }

    // ── services ──

    async fn list_services(&self) -> StorageResult<Vec<services::Model>> {
        Ok(self.services.read().await.list())
    }

    async fn get_service(&self, id: i32) -> StorageResult<Option<services::Model>> {
        Ok(self.services.read().await.rows.get(&id).cloned())
    }

    async fn create_service(&self, input: CreateService) -> StorageResult<services::Model> {
        let mut table = self.services.write().await;
        Ok(table.push_with(|id| services::Model {
            id,
            name: input.name,
            price: input.price,
            description: input.description,
        }))
    }

    async fn update_service(
        &self,
        id: i32,
        input: UpdateService,
    ) -> StorageResult<services::Model> {
        let mut table = self.services.write().await;
        let service = table
            .rows
            .get_mut(&id)
            .ok_or(StorageError::NotFound("Service"))?;
        if let Some(name) = input.name {
            service.name = name;
        }
        if let Some(price) = input.price {
            service.price = price;
        }
        if let Some(description) = input.description {
            service.description = Some(description);
        }
        Ok(service.clone())
    }

    async fn delete_service(&self, id: i32) -> StorageResult<bool> {
        Ok(self.services.write().await.rows.remove(&id).is_some())
    }

    // ── projects ──

    async fn list_projects(&self) -> StorageResult<Vec<projects::Model>> {
        Ok(self.projects.read().await.list())
    }

    async fn get_project(&self, id: i32) -> StorageResult<Option<projects::Model>> {
        Ok(self.projects.read().await.rows.get(&id).cloned())
    }

    async fn create_project(&self, input: CreateProject) -> StorageResult<projects::Model> {
        let mut table = self.projects.write().await;
        Ok(table.push_with(|id| projects::Model {
            id,
            title: input.title,
            description: input.description,
            year: input.year,
            link: input.link,
            image: input.image,
        }))
    }

    async fn update_project(
        &self,
        id: i32,
        input: UpdateProject,
    ) -> StorageResult<projects::Model> {
        let mut table = self.projects.write().await;
        let project = table
            .rows
            .get_mut(&id)
            .ok_or(StorageError::NotFound("Project"))?;
        if let Some(title) = input.title {
            project.title = title;
        }
        if let Some(description) = input.description {
            project.description = description;
        }
        if let Some(year) = input.year {
            project.year = year;
        }
        if let Some(link) = input.link {
            project.link = Some(link);
        }
        if let Some(image) = input.image {
            project.image = Some(image);
        }
        Ok(project.clone())
    }

    async fn delete_project(&self, id: i32) -> StorageResult<bool> {
        Ok(self.projects.write().await.rows.remove(&id).is_some())
    }
}
