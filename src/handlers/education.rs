use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::education::{CreateEducation, UpdateEducation};
use crate::storage::Storage;

pub async fn list_education(db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_education().await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => storage_failed("fetch education", e),
    }
}

pub async fn create_education(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateEducation>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("education", errors);
    }
    match db.create_education(body.into_inner()).await {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(e) => storage_failed("create education", e),
    }
}

pub async fn update_education(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateEducation>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("education", errors);
    }
    match db.update_education(path.into_inner(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_failed("update education", e),
    }
}

pub async fn delete_education(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_education(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Education deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Education not found",
        })),
        Err(e) => storage_failed("delete education", e),
    }
}
