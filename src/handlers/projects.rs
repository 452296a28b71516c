use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::projects::{CreateProject, UpdateProject};
use crate::storage::Storage;

pub async fn list_projects(db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_projects().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => storage_failed("fetch projects", e),
    }
}

pub async fn create_project(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateProject>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("project", errors);
    }
    match db.create_project(body.into_inner()).await {
        Ok(project) => HttpResponse::Created().json(project),
        Err(e) => storage_failed("create project", e),
    }
}

pub async fn update_project(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateProject>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("project", errors);
    }
    match db.update_project(path.into_inner(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_failed("update project", e),
    }
}

pub async fn delete_project(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_project(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Project deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Project not found",
        })),
        Err(e) => storage_failed("delete project", e),
    }
}
