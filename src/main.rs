use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use portfolio_backend::auth::password::hash_password;
use portfolio_backend::auth::session::SessionStore;
use portfolio_backend::handlers;
use portfolio_backend::storage::{PgStorage, Storage};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = sea_orm::Database::connect(&database_url)
        .await
        .expect("Failed to connect to the database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Connected to Postgres");

    let storage: Arc<dyn Storage> = Arc::new(PgStorage::new(db));

    // Seed the admin account so a fresh deployment is immediately usable.
    let admin_username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    let admin_hash = hash_password(&admin_password).expect("Failed to hash admin password");
    storage
        .seed_admin(&admin_username, &admin_hash)
        .await
        .expect("Failed to seed admin user");

    let storage_data: web::Data<dyn Storage> = web::Data::from(storage);
    let sessions = web::Data::new(SessionStore::new());

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(storage_data.clone())
            .app_data(sessions.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            .service(Files::new("/uploads", "./uploads"))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
