use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use fh_api::app::{create_app, AppState};
use fh_core::services::auth::AuthService;
use fh_core::services::family::FamilyService;
use fh_core::services::password::BcryptHasher;
use fh_core::services::token::{TokenConfig, TokenService};
use fh_core::services::user::UserService;
use fh_infra::database::connection::DatabasePool;
use fh_infra::database::mysql::{MySqlFamilyRepository, MySqlUserRepository};
use fh_infra::database::seed::seed_family_roles;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting FamHub API server");

    let config = fh_api::config::load();

    // Database pool and reference data
    let db = DatabasePool::new(&config.database)
        .await
        .map_err(into_io_error)?;
    seed_family_roles(db.get_pool())
        .await
        .map_err(into_io_error)?;

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(db.get_pool().clone()));
    let family_repository = Arc::new(MySqlFamilyRepository::new(db.get_pool().clone()));

    // Services
    let password_hasher = Arc::new(BcryptHasher::new());
    let token_service = Arc::new(TokenService::new(TokenConfig::from(config.jwt.clone())));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        password_hasher.clone(),
        token_service,
    ));
    let user_service = Arc::new(UserService::new(user_repository, password_hasher));
    let family_service = Arc::new(FamilyService::new(family_repository));

    let state = web::Data::new(AppState {
        auth_service,
        user_service,
        family_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

fn into_io_error(err: fh_core::errors::DomainError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}
