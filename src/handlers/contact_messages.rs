use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::contact_messages::CreateContactMessage;
use crate::storage::Storage;

/// GET /api/contact-messages — the admin inbox (requires auth).
pub async fn list_messages(_session: AdminSession, db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_contact_messages().await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => storage_failed("fetch contact messages", e),
    }
}

/// POST /api/contact-messages — the one public write. Receipt timestamp and
/// the unread flag come from the storage layer, not the caller.
pub async fn create_message(
    db: web::Data<dyn Storage>,
    body: web::Json<CreateContactMessage>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("contact message", errors);
    }
    match db.create_contact_message(body.into_inner()).await {
        Ok(message) => HttpResponse::Created().json(message),
        Err(e) => storage_failed("create contact message", e),
    }
}

/// PUT /api/contact-messages/{id}/read — flip the unread flag (requires auth).
pub async fn mark_read(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.mark_message_read(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Message marked as read",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Message not found",
        })),
        Err(e) => storage_failed("mark message read", e),
    }
}

pub async fn delete_message(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_contact_message(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Message deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Message not found",
        })),
        Err(e) => storage_failed("delete contact message", e),
    }
}
