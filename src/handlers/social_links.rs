use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::social_links::{CreateSocialLink, UpdateSocialLink};
use crate::storage::Storage;

pub async fn list_links(db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_social_links().await {
        Ok(links) => HttpResponse::Ok().json(links),
        Err(e) => storage_failed("fetch social links", e),
    }
}

pub async fn create_link(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateSocialLink>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("social link", errors);
    }
    match db.create_social_link(body.into_inner()).await {
        Ok(link) => HttpResponse::Created().json(link),
        Err(e) => storage_failed("create social link", e),
    }
}

pub async fn update_link(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateSocialLink>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("social link", errors);
    }
    match db.update_social_link(path.into_inner(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_failed("update social link", e),
    }
}

pub async fn delete_link(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_social_link(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Social link deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Social link not found",
        })),
        Err(e) => storage_failed("delete social link", e),
    }
}
