//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use fh_core::repositories::{FamilyRepository, UserRepository};
use fh_core::services::password::PasswordHasher;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::dto::error::{domain_error_response, validator_error_response, ErrorBody};

/// Verify credentials and return a signed bearer token
///
/// A credential mismatch is a generic 401; the response does not reveal
/// whether the email exists.
pub async fn login<U, F, H>(
    state: web::Data<AppState<U, F, H>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    F: FamilyRepository + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return validator_error_response(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(Some(token)) => HttpResponse::Ok().json(LoginResponse { token }),
        Ok(None) => {
            log::error!("Email or password are invalid.");
            HttpResponse::Unauthorized().json(ErrorBody::unauthorized())
        }
        Err(err) => domain_error_response(&err),
    }
}
