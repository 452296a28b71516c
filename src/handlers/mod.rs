pub mod activities;
pub mod articles;
pub mod auth;
pub mod biodata;
pub mod contact_messages;
pub mod education;
pub mod experiences;
pub mod projects;
pub mod services;
pub mod skills;
pub mod social_links;
pub mod upload;

use actix_web::{HttpResponse, web};

use crate::models::validation::FieldError;
use crate::storage::StorageError;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (login is the only way to obtain a session token) ──
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout))
            .route("/status", web::get().to(auth::status)),
    );

    // ── Biodata (singleton: GET public, PUT upserts and requires auth) ──
    cfg.service(
        web::resource("/biodata")
            .route(web::get().to(biodata::get_biodata))
            .route(web::put().to(biodata::update_biodata)),
    );

    // ── Skills ──
    cfg.service(
        web::scope("/skills")
            .route("", web::get().to(skills::list_skills))
            .route("", web::post().to(skills::create_skill))
            .route("/{id}", web::put().to(skills::update_skill))
            .route("/{id}", web::delete().to(skills::delete_skill)),
    );

    // ── Experiences ──
    cfg.service(
        web::scope("/experiences")
            .route("", web::get().to(experiences::list_experiences))
            .route("", web::post().to(experiences::create_experience))
            .route("/{id}", web::put().to(experiences::update_experience))
            .route("/{id}", web::delete().to(experiences::delete_experience)),
    );

    // ── Education ──
    cfg.service(
        web::scope("/education")
            .route("", web::get().to(education::list_education))
            .route("", web::post().to(education::create_education))
            .route("/{id}", web::put().to(education::update_education))
            .route("/{id}", web::delete().to(education::delete_education)),
    );

    // ── Activities ──
    cfg.service(
        web::scope("/activities")
            .route("", web::get().to(activities::list_activities))
            .route("", web::post().to(activities::create_activity))
            .route("/{id}", web::put().to(activities::update_activity))
            .route("/{id}", web::delete().to(activities::delete_activity)),
    );

    // ── Articles (public list is published-only; /all is the admin view) ──
    cfg.service(
        web::scope("/articles")
            .route("", web::get().to(articles::list_published))
            .route("", web::post().to(articles::create_article))
            .route("/all", web::get().to(articles::list_all))
            .route("/{id}", web::put().to(articles::update_article))
            .route("/{id}", web::delete().to(articles::delete_article)),
    );

    // ── Contact messages (submission is public; the inbox is not) ──
    cfg.service(
        web::scope("/contact-messages")
            .route("", web::get().to(contact_messages::list_messages))
            .route("", web::post().to(contact_messages::create_message))
            .route("/{id}/read", web::put().to(contact_messages::mark_read))
            .route("/{id}", web::delete().to(contact_messages::delete_message)),
    );

    // ── Social links ──
    cfg.service(
        web::scope("/social-links")
            .route("", web::get().to(social_links::list_links))
            .route("", web::post().to(social_links::create_link))
            .route("/{id}", web::put().to(social_links::update_link))
            .route("/{id}", web::delete().to(social_links::delete_link)),
    );

    // ── Services ──
    cfg.service(
        web::scope("/services")
            .route("", web::get().to(services::list_services))
            .route("", web::post().to(services::create_service))
            .route("/{id}", web::put().to(services::update_service))
            .route("/{id}", web::delete().to(services::delete_service)),
    );

    // ── Projects ──
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects::list_projects))
            .route("", web::post().to(projects::create_project))
            .route("/{id}", web::put().to(projects::update_project))
            .route("/{id}", web::delete().to(projects::delete_project)),
    );

    // ── Image upload (admin only; kind selects the target collection) ──
    cfg.service(
        web::resource("/upload/{kind}").route(web::post().to(upload::upload_image)),
    );
}

/// 400 with the per-field detail the validators produce.
pub(crate) fn validation_failed(what: &str, errors: Vec<FieldError>) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "message": format!("Invalid {what} data"),
        "errors": errors,
    }))
}

/// Map storage failures onto 404/500. Database detail is logged with the
/// request context and withheld from the caller.
pub(crate) fn storage_failed(context: &str, err: StorageError) -> HttpResponse {
    match err {
        StorageError::NotFound(what) => HttpResponse::NotFound().json(serde_json::json!({
            "message": format!("{what} not found"),
        })),
        StorageError::Database(e) => {
            tracing::error!("failed to {context}: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": format!("Failed to {context}"),
            }))
        }
    }
}
