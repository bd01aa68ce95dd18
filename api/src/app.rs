//! Application state and factory
//!
//! This module holds the shared application state and the factory that
//! assembles the Actix-web application from it.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use fh_core::repositories::{FamilyRepository, UserRepository};
use fh_core::services::auth::AuthService;
use fh_core::services::family::FamilyService;
use fh_core::services::password::PasswordHasher;
use fh_core::services::user::UserService;

use crate::middleware::cors::create_cors;
use crate::routes::auth::login::login;
use crate::routes::family::create::create_family;
use crate::routes::family::delete::delete_family;
use crate::routes::user::get_by_email::get_by_email;
use crate::routes::user::register::register;
use crate::routes::user::update_email::update_email;
use crate::routes::user::update_password::update_password;
use crate::routes::user::update_profile::update_profile;

/// Application state holding the shared services
pub struct AppState<U, F, H>
where
    U: UserRepository,
    F: FamilyRepository,
    H: PasswordHasher,
{
    pub auth_service: Arc<AuthService<U, H>>,
    pub user_service: Arc<UserService<U, H>>,
    pub family_service: Arc<FamilyService<F>>,
}

/// Create and configure the application with all dependencies
pub fn create_app<U, F, H>(
    app_state: web::Data<AppState<U, F, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    F: FamilyRepository + 'static,
    H: PasswordHasher + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth").route("/login", web::post().to(login::<U, F, H>)),
                )
                .service(
                    web::scope("/users")
                        .route("/register", web::post().to(register::<U, F, H>))
                        .route("/profile", web::patch().to(update_profile::<U, F, H>))
                        .route("/email", web::patch().to(update_email::<U, F, H>))
                        .route("/password", web::patch().to(update_password::<U, F, H>))
                        .route("/{email}", web::get().to(get_by_email::<U, F, H>)),
                )
                .service(
                    web::scope("/families")
                        .route("", web::post().to(create_family::<U, F, H>))
                        .route("/{id}", web::delete().to(delete_family::<U, F, H>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "famhub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found"
    }))
}
