use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::services::{CreateService, UpdateService};
use crate::storage::Storage;

pub async fn list_services(db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_services().await {
        Ok(services) => HttpResponse::Ok().json(services),
        Err(e) => storage_failed("fetch services", e),
    }
}

pub async fn create_service(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateService>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("service", errors);
    }
    match db.create_service(body.into_inner()).await {
        Ok(service) => HttpResponse::Created().json(service),
        Err(e) => storage_failed("create service", e),
    }
}

pub async fn update_service(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateService>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("service", errors);
    }
    match db.update_service(path.into_inner(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_failed("update service", e),
    }
}

pub async fn delete_service(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_service(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Service deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Service not found",
        })),
        Err(e) => storage_failed("delete service", e),
    }
}
