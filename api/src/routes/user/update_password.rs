//! Handler for PATCH /api/v1/users/password

use actix_web::{web, HttpResponse};
use validator::Validate;

use fh_core::repositories::{FamilyRepository, UserRepository};
use fh_core::services::password::PasswordHasher;

use crate::app::AppState;
use crate::dto::error::{domain_error_response, validator_error_response};
use crate::dto::user::UpdatePasswordRequest;

/// Replace a user's password
///
/// Rejects a new password equal to the current one and enforces the full
/// complexity policy before the store is touched.
pub async fn update_password<U, F, H>(
    state: web::Data<AppState<U, F, H>>,
    request: web::Json<UpdatePasswordRequest>,
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
        .user_service
        .update_password(request.into_inner().into())
        .await
    {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => {
            log::error!("{}", err);
            domain_error_response(&err)
        }
    }
}
