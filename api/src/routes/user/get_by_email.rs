//! Handler for GET /api/v1/users/{email}

use actix_web::{web, HttpResponse};

use fh_core::repositories::{FamilyRepository, UserRepository};
use fh_core::services::password::PasswordHasher;

use crate::app::AppState;
use crate::dto::error::{domain_error_response, ErrorBody};
use crate::dto::user::UserResponse;

/// Look up a user projection by email
pub async fn get_by_email<U, F, H>(
    state: web::Data<AppState<U, F, H>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    F: FamilyRepository + 'static,
    H: PasswordHasher + 'static,
{
    let email = path.into_inner();

    match state.user_service.get_by_email(&email).await {
        Ok(Some(view)) => HttpResponse::Ok().json(UserResponse::from(view)),
        Ok(None) => {
            log::error!("Could not find user with email: {}", email);
            HttpResponse::NotFound().json(ErrorBody::new(
                "USER_NOT_FOUND",
                format!("Could not find user with email: {}", email),
            ))
        }
        Err(err) => domain_error_response(&err),
    }
}
