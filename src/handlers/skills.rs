use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::skills::{CreateSkill, UpdateSkill};
use crate::storage::Storage;

/// GET /api/skills — public list.
pub async fn list_skills(db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_skills().await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => storage_failed("fetch skills", e),
    }
}

/// POST /api/skills — create a skill (requires auth).
pub async fn create_skill(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateSkill>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("skill", errors);
    }
    match db.create_skill(body.into_inner()).await {
        Ok(skill) => HttpResponse::Created().json(skill),
        Err(e) => storage_failed("create skill", e),
    }
}

/// PUT /api/skills/{id} — partial update (requires auth).
pub async fn update_skill(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateSkill>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("skill", errors);
    }
    match db.update_skill(path.into_inner(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_failed("update skill", e),
    }
}

/// DELETE /api/skills/{id} — requires auth.
pub async fn delete_skill(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_skill(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Skill deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Skill not found",
        })),
        Err(e) => storage_failed("delete skill", e),
    }
}
