use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::activities::{CreateActivity, UpdateActivity};
use crate::storage::Storage;

pub async fn list_activities(db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_activities().await {
        Ok(activities) => HttpResponse::Ok().json(activities),
        Err(e) => storage_failed("fetch activities", e),
    }
}

pub async fn create_activity(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateActivity>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("activity", errors);
    }
    match db.create_activity(body.into_inner()).await {
        Ok(activity) => HttpResponse::Created().json(activity),
        Err(e) => storage_failed("create activity", e),
    }
}

pub async fn update_activity(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateActivity>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("activity", errors);
    }
    match db.update_activity(path.into_inner(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_failed("update activity", e),
    }
}

pub async fn delete_activity(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_activity(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Activity deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Activity not found",
        })),
        Err(e) => storage_failed("delete activity", e),
    }
}
