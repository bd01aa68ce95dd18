//! Handler for PATCH /api/v1/users/profile

use actix_web::{web, HttpResponse};
use validator::Validate;

use fh_core::repositories::{FamilyRepository, UserRepository};
use fh_core::services::password::PasswordHasher;

use crate::app::AppState;
use crate::dto::error::{domain_error_response, validator_error_response};
use crate::dto::user::UpdateProfileRequest;

/// Overwrite the mutable profile fields of an existing user
pub async fn update_profile<U, F, H>(
    state: web::Data<AppState<U, F, H>>,
    request: web::Json<UpdateProfileRequest>,
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
    match state
        .user_service
        .update_profile(request.into_inner().into())
        .await
    {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => {
            log::error!("Could not update data for user with email: {}", email);
            domain_error_response(&err)
        }
    }
}
