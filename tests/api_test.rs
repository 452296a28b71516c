use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};

use portfolio_backend::auth::session::SessionStore;
use portfolio_backend::handlers;
use portfolio_backend::storage::{MemStorage, Storage};

macro_rules! spawn_app {
    () => {{
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::seeded());
        test::init_service(
            App::new()
                .app_data(web::Data::from(storage))
                .app_data(web::Data::new(SessionStore::new()))
                .service(web::scope("/api").configure(handlers::init_routes)),
        )
        .await
    }};
}

macro_rules! login {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({ "username": "admin", "password": "admin123" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&$app, req).await;
        body["token"]
            .as_str()
            .expect("login response carries a token")
            .to_string()
    }};
}

#[actix_web::test]
async fn login_rejects_wrong_credentials() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "username": "admin", "password": "wrong" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "username": "nobody", "password": "admin123" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_returns_token_and_identity() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "username": "admin", "password": "admin123" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "admin");
    // The password hash never leaves the server.
    assert!(body["user"].get("passwordHash").is_none());
}

#[actix_web::test]
async fn mutations_require_a_session() {
    let app = spawn_app!();
    let payload = serde_json::json!({
        "name": "Rust",
        "level": "Advanced",
        "percentage": 95,
        "icon": "devicon-rust",
        "category": "Backend",
    });

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .set_json(&payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let token = login!(app);
    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(&payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn admin_session_covers_create_delete_and_dies_on_logout() {
    let app = spawn_app!();
    let token = login!(app);
    let auth = ("Authorization", format!("Bearer {token}"));

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(auth.clone())
        .set_json(serde_json::json!({
            "name": "Docker",
            "level": "Intermediate",
            "percentage": 60,
            "icon": "devicon-docker",
            "category": "DevOps",
        }))
        .to_request();
    let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let skills: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(
        skills
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["name"] == "Docker")
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/skills/{id}"))
        .insert_header(auth.clone())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let skills: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(
        !skills
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["name"] == "Docker")
    );

    // Revoking the session closes the write path for this token.
    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(auth.clone())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(auth)
        .set_json(serde_json::json!({
            "name": "Kubernetes",
            "level": "Beginner",
            "percentage": 20,
            "icon": "devicon-kubernetes",
            "category": "DevOps",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn out_of_range_percentage_is_rejected() {
    let app = spawn_app!();
    let token = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({
            "name": "Rust",
            "level": "Advanced",
            "percentage": 150,
            "icon": "devicon-rust",
            "category": "Backend",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unknown_fields_are_rejected_on_admin_writes() {
    let app = spawn_app!();
    let token = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({
            "name": "Rust",
            "level": "Advanced",
            "percentage": 95,
            "icon": "devicon-rust",
            "category": "Backend",
            "bogus": "field",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn status_reflects_session_state() {
    let app = spawn_app!();

    let req = test::TestRequest::get().uri("/api/auth/status").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["isAuthenticated"], false);

    let token = login!(app);
    let req = test::TestRequest::get()
        .uri("/api/auth/status")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["isAuthenticated"], true);
    assert_eq!(body["user"]["username"], "admin");
}

#[actix_web::test]
async fn contact_submission_ignores_client_stamps() {
    let app = spawn_app!();

    // `date` and `read` in the payload are dropped, not honored.
    let req = test::TestRequest::post()
        .uri("/api/contact-messages")
        .set_json(serde_json::json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "message": "Hi there",
            "date": "1999-01-01",
            "read": true,
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["read"], false);
    assert_ne!(body["date"], "1999-01-01");
}

#[actix_web::test]
async fn contact_inbox_requires_a_session() {
    let app = spawn_app!();

    let req = test::TestRequest::get()
        .uri("/api/contact-messages")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn public_article_list_hides_drafts() {
    let app = spawn_app!();

    let req = test::TestRequest::get().uri("/api/articles").to_request();
    let published: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let published = published.as_array().unwrap();
    assert!(published.iter().all(|a| a["published"] == true));

    // The admin view includes drafts and needs a session.
    let req = test::TestRequest::get().uri("/api/articles/all").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let token = login!(app);
    let req = test::TestRequest::get()
        .uri("/api/articles/all")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let all: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(all.as_array().unwrap().len() > published.len());
}

#[actix_web::test]
async fn biodata_roundtrip_preserves_the_singleton() {
    let app = spawn_app!();

    let req = test::TestRequest::get().uri("/api/biodata").to_request();
    let before: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let seeded_id = before["id"].as_i64().unwrap();

    let token = login!(app);
    let req = test::TestRequest::put()
        .uri("/api/biodata")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(serde_json::json!({
            "name": "Jane Doe",
            "title": "Engineer",
            "bio": "Updated bio",
            "email": "jane@example.com",
            "phone": "+1 555 0123",
            "location": "Remote",
            "profileImage": null,
        }))
        .to_request();
    let updated: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(updated["id"].as_i64().unwrap(), seeded_id);
    assert_eq!(updated["name"], "Jane Doe");
}

#[actix_web::test]
async fn missing_rows_yield_404_not_500() {
    let app = spawn_app!();
    let token = login!(app);
    let auth = ("Authorization", format!("Bearer {token}"));

    let req = test::TestRequest::put()
        .uri("/api/skills/9999")
        .insert_header(auth.clone())
        .set_json(serde_json::json!({ "percentage": 10 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/projects/9999")
        .insert_header(auth)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
