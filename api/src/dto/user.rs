//! User DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use fh_core::domain::entities::user::UserProfileUpdate;
use fh_core::domain::value_objects::{
    EmailChange, PasswordChange, RegisterUser, RegisteredUser, UserView,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 64))]
    pub password: String,
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    pub birth_date: NaiveDate,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: u64,
    pub email: String,
}

impl From<RegisteredUser> for RegisterResponse {
    fn from(registered: RegisteredUser) -> Self {
        Self {
            id: registered.id,
            email: registered.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEmailRequest {
    #[validate(email)]
    pub old_email: String,
    #[validate(email)]
    pub new_email: String,
}

impl From<UpdateEmailRequest> for EmailChange {
    fn from(request: UpdateEmailRequest) -> Self {
        Self {
            old_email: request.old_email,
            new_email: request.new_email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 64))]
    pub new_password: String,
}

impl From<UpdatePasswordRequest> for PasswordChange {
    fn from(request: UpdatePasswordRequest) -> Self {
        Self {
            email: request.email,
            new_password: request.new_password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    pub birth_date: NaiveDate,
}

impl From<UpdateProfileRequest> for UserProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

impl From<UserView> for UserResponse {
    fn from(view: UserView) -> Self {
        Self {
            id: view.id,
            email: view.email,
            first_name: view.first_name,
            last_name: view.last_name,
            birth_date: view.birth_date,
        }
    }
}
