//! Unit tests for the user account service

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::user::{NewUser, UserProfileUpdate};
use crate::domain::value_objects::PasswordChange;
use crate::errors::{DomainError, PasswordError, UserError};
use crate::repositories::user::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::password::{BcryptHasher, PasswordHasher};
use crate::services::user::UserService;

fn hasher() -> Arc<BcryptHasher> {
    Arc::new(BcryptHasher::with_cost(4))
}

async fn service_with_user(
    email: &str,
    password: &str,
) -> (Arc<MockUserRepository>, UserService<MockUserRepository, BcryptHasher>) {
    let repo = Arc::new(MockUserRepository::new());
    let hasher = hasher();
    let hash = hasher.hash(password).unwrap();
    repo.add_user(NewUser::new(
        email,
        hash,
        "Jan",
        "Kowalski",
        NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
    ))
    .await
    .unwrap();

    let service = UserService::new(repo.clone(), hasher);
    (repo, service)
}

#[tokio::test]
async fn update_password_replaces_hash() {
    let (repo, service) = service_with_user("test@test.pl", "zaq1@WSX").await;
    let old_hash = repo
        .find_by_email("test@test.pl")
        .await
        .unwrap()
        .unwrap()
        .password_hash;

    service
        .update_password(PasswordChange {
            email: "test@test.pl".to_string(),
            new_password: "xsw2!QAZ".to_string(),
        })
        .await
        .unwrap();

    let new_hash = repo
        .find_by_email("test@test.pl")
        .await
        .unwrap()
        .unwrap()
        .password_hash;
    assert_ne!(old_hash, new_hash);
}

#[tokio::test]
async fn update_password_new_credential_verifies_and_old_does_not() {
    let (repo, service) = service_with_user("test@test.pl", "zaq1@WSX").await;

    service
        .update_password(PasswordChange {
            email: "test@test.pl".to_string(),
            new_password: "xsw2!QAZ".to_string(),
        })
        .await
        .unwrap();

    let hasher = hasher();
    let stored = repo
        .find_by_email("test@test.pl")
        .await
        .unwrap()
        .unwrap()
        .password_hash;
    assert!(hasher.verify(&stored, "xsw2!QAZ").unwrap());
    assert!(!hasher.verify(&stored, "zaq1@WSX").unwrap());
}

#[tokio::test]
async fn update_password_rejects_same_as_current() {
    let (_, service) = service_with_user("test@test.pl", "zaq1@WSX").await;

    let result = service
        .update_password(PasswordChange {
            email: "test@test.pl".to_string(),
            new_password: "zaq1@WSX".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Password(PasswordError::SameAsCurrent))
    ));
}

#[tokio::test]
async fn update_password_rejects_policy_violation() {
    let (_, service) = service_with_user("test@test.pl", "zaq1@WSX").await;

    let result = service
        .update_password(PasswordChange {
            email: "test@test.pl".to_string(),
            new_password: "test".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn update_password_reports_unknown_email() {
    let (_, service) = service_with_user("test@test.pl", "zaq1@WSX").await;

    let result = service
        .update_password(PasswordChange {
            email: "testkljkljkj@test.pl".to_string(),
            new_password: "xsw2!QAZ".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::NotFoundByEmail { .. }))
    ));
}

#[tokio::test]
async fn update_profile_overwrites_names_and_birth_date() {
    let (repo, service) = service_with_user("test@test.pl", "zaq1@WSX").await;

    service
        .update_profile(UserProfileUpdate {
            email: "test@test.pl".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 1, 30).unwrap(),
        })
        .await
        .unwrap();

    let user = repo.find_by_email("test@test.pl").await.unwrap().unwrap();
    assert_eq!(user.first_name, "Anna");
    assert_eq!(user.last_name, "Nowak");
    assert_eq!(
        user.birth_date,
        NaiveDate::from_ymd_opt(1985, 1, 30).unwrap()
    );
}

#[tokio::test]
async fn update_profile_rejects_blank_names() {
    let (repo, service) = service_with_user("test@test.pl", "zaq1@WSX").await;

    let result = service
        .update_profile(UserProfileUpdate {
            email: "test@test.pl".to_string(),
            first_name: String::new(),
            last_name: "Nowak".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 1, 30).unwrap(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
    let user = repo.find_by_email("test@test.pl").await.unwrap().unwrap();
    assert_eq!(user.first_name, "Jan");
}

#[tokio::test]
async fn get_by_email_returns_projection_without_hash() {
    let (_, service) = service_with_user("test@test.pl", "zaq1@WSX").await;

    let view = service.get_by_email("test@test.pl").await.unwrap().unwrap();

    assert_eq!(view.email, "test@test.pl");
    assert_eq!(view.first_name, "Jan");
}

#[tokio::test]
async fn get_by_email_returns_none_for_unknown_address() {
    let (_, service) = service_with_user("test@test.pl", "zaq1@WSX").await;

    assert!(service
        .get_by_email("unknown@test.pl")
        .await
        .unwrap()
        .is_none());
}
