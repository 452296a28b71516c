use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::experiences::{CreateExperience, UpdateExperience};
use crate::storage::Storage;

pub async fn list_experiences(db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_experiences().await {
        Ok(experiences) => HttpResponse::Ok().json(experiences),
        Err(e) => storage_failed("fetch experiences", e),
    }
}

pub async fn create_experience(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateExperience>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("experience", errors);
    }
    match db.create_experience(body.into_inner()).await {
        Ok(experience) => HttpResponse::Created().json(experience),
        Err(e) => storage_failed("create experience", e),
    }
}

pub async fn update_experience(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateExperience>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("experience", errors);
    }
    match db.update_experience(path.into_inner(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_failed("update experience", e),
    }
}

pub async fn delete_experience(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_experience(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Experience deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Experience not found",
        })),
        Err(e) => storage_failed("delete experience", e),
    }
}
