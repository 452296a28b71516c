use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::biodata::CreateBiodata;
use crate::storage::Storage;

/// GET /api/biodata — public; the site renders a placeholder when absent.
pub async fn get_biodata(db: web::Data<dyn Storage>) -> impl Responder {
    match db.get_biodata().await {
        Ok(biodata) => HttpResponse::Ok().json(biodata),
        Err(e) => storage_failed("fetch biodata", e),
    }
}

/// PUT /api/biodata — upsert the singleton row (requires auth).
pub async fn update_biodata(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateBiodata>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("biodata", errors);
    }
    match db.update_biodata(body.into_inner()).await {
        Ok(biodata) => HttpResponse::Ok().json(biodata),
        Err(e) => storage_failed("update biodata", e),
    }
}
