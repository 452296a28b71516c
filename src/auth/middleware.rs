use std::future::Future;
use std::pin::Pin;

use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};
use actix_web::FromRequest;
use thiserror::Error;

use crate::auth::session::{Session, SessionStore};

/// Rejection from the auth gate, rendered as the API's JSON error shape.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Unauthorized {
    message: &'static str,
}

impl ResponseError for Unauthorized {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(serde_json::json!({
            "message": self.message,
        }))
    }
}

/// Pull the opaque token out of `Authorization: Bearer <token>`.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Extractor guarding every mutating handler: resolves the bearer token to
/// a live session before the handler body runs, so unauthenticated writes
/// are rejected before any storage access.
pub struct AdminSession(pub Session);

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req).ok_or(Unauthorized {
                message: "Unauthorized",
            })?;

            let sessions = req.app_data::<web::Data<SessionStore>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Session store not configured")
            })?;

            let session = sessions.get(&token).await.ok_or(Unauthorized {
                message: "Unauthorized",
            })?;

            Ok(AdminSession(session))
        })
    }
}
