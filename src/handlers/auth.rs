use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;

use crate::auth::middleware::bearer_token;
use crate::auth::password::verify_password;
use crate::auth::session::SessionStore;
use crate::models::users::UserIdentity;
use crate::storage::Storage;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn invalid_credentials() -> HttpResponse {
    // Deliberately silent on whether the username or the password failed.
    HttpResponse::Unauthorized().json(serde_json::json!({
        "message": "Invalid credentials",
    }))
}

/// POST /api/auth/login — verify credentials and issue a bearer token.
pub async fn login(
    db: web::Data<dyn Storage>,
    sessions: web::Data<SessionStore>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    let LoginRequest { username, password } = body.into_inner();

    if username.trim().is_empty() || password.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Username and password are required",
        }));
    }

    let user = match db.get_user_by_username(&username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!("login attempt for unknown user: {username}");
            return invalid_credentials();
        }
        Err(e) => {
            tracing::error!("login lookup failed: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Login failed",
            }));
        }
    };

    // bcrypt verification is CPU-bound; keep the async executor free.
    let stored_hash = user.password_hash.clone();
    let password_ok =
        tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .unwrap_or(false);

    if !password_ok {
        tracing::warn!("failed login attempt for {username}");
        return invalid_credentials();
    }

    let session = sessions.issue(user.id, &user.username).await;
    tracing::info!("successful login for {username}");

    HttpResponse::Ok().json(serde_json::json!({
        "message": "Login successful",
        "token": session.token,
        "user": UserIdentity::from(user),
    }))
}

/// POST /api/auth/logout — revoke whatever token was presented. Idempotent:
/// a missing or unknown token still reads as a successful logout.
pub async fn logout(req: HttpRequest, sessions: web::Data<SessionStore>) -> impl Responder {
    if let Some(token) = bearer_token(&req) {
        sessions.revoke(&token).await;
    }
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Logout successful",
    }))
}

/// GET /api/auth/status — never 401s; anonymous is a valid answer.
pub async fn status(req: HttpRequest, sessions: web::Data<SessionStore>) -> impl Responder {
    let session = match bearer_token(&req) {
        Some(token) => sessions.get(&token).await,
        None => None,
    };

    match session {
        Some(s) => HttpResponse::Ok().json(serde_json::json!({
            "isAuthenticated": true,
            "user": { "id": s.user_id, "username": s.username },
        })),
        None => HttpResponse::Ok().json(serde_json::json!({
            "isAuthenticated": false,
        })),
    }
}
