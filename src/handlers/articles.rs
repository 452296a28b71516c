use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AdminSession;
use crate::handlers::{storage_failed, validation_failed};
use crate::models::articles::{CreateArticle, UpdateArticle};
use crate::storage::Storage;

/// GET /api/articles — public, published rows only.
pub async fn list_published(db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_published_articles().await {
        Ok(articles) => HttpResponse::Ok().json(articles),
        Err(e) => storage_failed("fetch articles", e),
    }
}

/// GET /api/articles/all — drafts included (requires auth).
pub async fn list_all(_session: AdminSession, db: web::Data<dyn Storage>) -> impl Responder {
    match db.list_articles().await {
        Ok(articles) => HttpResponse::Ok().json(articles),
        Err(e) => storage_failed("fetch articles", e),
    }
}

pub async fn create_article(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    body: web::Json<CreateArticle>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("article", errors);
    }
    match db.create_article(body.into_inner()).await {
        Ok(article) => HttpResponse::Created().json(article),
        Err(e) => storage_failed("create article", e),
    }
}

pub async fn update_article(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
    body: web::Json<UpdateArticle>,
) -> impl Responder {
    if let Err(errors) = body.validate() {
        return validation_failed("article", errors);
    }
    match db.update_article(path.into_inner(), body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_failed("update article", e),
    }
}

pub async fn delete_article(
    _session: AdminSession,
    db: web::Data<dyn Storage>,
    path: web::Path<i32>,
) -> impl Responder {
    match db.delete_article(path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Article deleted successfully",
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Article not found",
        })),
        Err(e) => storage_failed("delete article", e),
    }
}
