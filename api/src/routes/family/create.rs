//! Handler for POST /api/v1/families

use actix_web::{web, HttpResponse};
use validator::Validate;

use fh_core::errors::{DomainError, UserError};
use fh_core::repositories::{FamilyRepository, UserRepository};
use fh_core::services::password::PasswordHasher;

use crate::app::AppState;
use crate::dto::error::{domain_error_response, validator_error_response, ErrorBody};
use crate::dto::family::{CreateFamilyRequest, FamilyResponse};

/// Create a family and bind the founder as its main administrator
pub async fn create_family<U, F, H>(
    state: web::Data<AppState<U, F, H>>,
    request: web::Json<CreateFamilyRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    F: FamilyRepository + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return validator_error_response(&errors);
    }

    let request = request.into_inner();
    match state
        .family_service
        .create_family(request.name, request.founder_id)
        .await
    {
        Ok(created) => HttpResponse::Ok().json(FamilyResponse::from(created)),
        Err(DomainError::User(UserError::NotFoundById { id })) => {
            log::error!("Could not find user with id: {}. Process terminated.", id);
            HttpResponse::NotFound().json(ErrorBody::new(
                "USER_NOT_FOUND",
                "Could not create a family with non-existing user",
            ))
        }
        Err(err) => {
            log::error!("{}", err);
            domain_error_response(&err)
        }
    }
}
