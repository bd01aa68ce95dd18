//! Handler for DELETE /api/v1/families/{id}

use actix_web::{web, HttpResponse};

use fh_core::repositories::{FamilyRepository, UserRepository};
use fh_core::services::password::PasswordHasher;

use crate::app::AppState;
use crate::dto::error::{domain_error_response, ErrorBody};

/// Delete a family by id
pub async fn delete_family<U, F, H>(
    state: web::Data<AppState<U, F, H>>,
    path: web::Path<u64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    F: FamilyRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();

    match state.family_service.delete_family(id).await {
        Ok(true) => HttpResponse::Ok().finish(),
        Ok(false) => {
            log::error!("Could not find family with ID: {}", id);
            HttpResponse::NotFound().json(ErrorBody::new(
                "FAMILY_NOT_FOUND",
                format!("Could not find family with id: {}", id),
            ))
        }
        Err(err) => domain_error_response(&err),
    }
}
