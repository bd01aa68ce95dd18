//! Handler for POST /api/v1/users/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use fh_core::repositories::{FamilyRepository, UserRepository};
use fh_core::services::password::PasswordHasher;

use crate::app::AppState;
use crate::dto::error::{domain_error_response, validator_error_response};
use crate::dto::user::{RegisterRequest, RegisterResponse};

/// Register a new user and return the assigned id
pub async fn register<U, F, H>(
    state: web::Data<AppState<U, F, H>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    F: FamilyRepository + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return validator_error_response(&errors);
    }

    let email = request.email.clone();
    match state.auth_service.register(request.into_inner().into()).await {
        Ok(registered) => HttpResponse::Ok().json(RegisterResponse::from(registered)),
        Err(err) => {
            log::error!("Could not register user with email: {}", email);
            domain_error_response(&err)
        }
    }
}
