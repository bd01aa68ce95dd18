//! Unit tests for the in-memory user repository

use chrono::NaiveDate;

use crate::domain::entities::user::{NewUser, UserProfileUpdate};
use crate::errors::{DomainError, UserError};
use crate::repositories::user::mock::MockUserRepository;
use crate::repositories::UserRepository;

fn new_user(email: &str) -> NewUser {
    NewUser::new(
        email,
        "hash",
        "Jan",
        "Kowalski",
        NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
    )
}

#[tokio::test]
async fn add_user_assigns_sequential_ids() {
    let repo = MockUserRepository::new();

    let first = repo.add_user(new_user("a@test.pl")).await.unwrap();
    let second = repo.add_user(new_user("b@test.pl")).await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(repo.user_count().await, 2);
}

#[tokio::test]
async fn add_user_rejects_blank_email() {
    let repo = MockUserRepository::new();

    let result = repo.add_user(new_user("   ")).await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::EmptyEmail))
    ));
    assert_eq!(repo.user_count().await, 0);
}

#[tokio::test]
async fn add_user_rejects_duplicate_email() {
    let repo = MockUserRepository::new();
    repo.add_user(new_user("test@test.pl")).await.unwrap();

    let result = repo.add_user(new_user("test@test.pl")).await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::EmailTaken))
    ));
    assert_eq!(repo.user_count().await, 1);
}

#[tokio::test]
async fn find_by_email_is_exact_match() {
    let repo = MockUserRepository::new();
    repo.add_user(new_user("test@test.pl")).await.unwrap();

    assert!(repo.find_by_email("test@test.pl").await.unwrap().is_some());
    assert!(repo.find_by_email("Test@test.pl").await.unwrap().is_none());
    assert!(repo.find_by_email("other@test.pl").await.unwrap().is_none());
}

#[tokio::test]
async fn update_profile_overwrites_mutable_fields_only() {
    let repo = MockUserRepository::new();
    let id = repo.add_user(new_user("test@test.pl")).await.unwrap();

    repo.update_profile(UserProfileUpdate {
        email: "test@test.pl".to_string(),
        first_name: "Anna".to_string(),
        last_name: "Nowak".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1985, 1, 30).unwrap(),
    })
    .await
    .unwrap();

    let user = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.email, "test@test.pl");
    assert_eq!(user.password_hash, "hash");
    assert_eq!(user.first_name, "Anna");
    assert_eq!(user.last_name, "Nowak");
}

#[tokio::test]
async fn update_profile_reports_unknown_email() {
    let repo = MockUserRepository::new();

    let result = repo
        .update_profile(UserProfileUpdate {
            email: "missing@test.pl".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 1, 30).unwrap(),
        })
        .await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::NotFoundByEmail { .. }))
    ));
}

#[tokio::test]
async fn update_email_rewrites_address_in_place() {
    let repo = MockUserRepository::new();
    let id = repo.add_user(new_user("test@test.pl")).await.unwrap();

    repo.update_email("test@test.pl", "test2@test.pl")
        .await
        .unwrap();

    let user = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(user.email, "test2@test.pl");
}

#[tokio::test]
async fn update_email_rejects_same_address() {
    let repo = MockUserRepository::new();
    repo.add_user(new_user("test@test.pl")).await.unwrap();

    let result = repo.update_email("test@test.pl", "test@test.pl").await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::SameEmail))
    ));
}

#[tokio::test]
async fn update_email_reports_unknown_old_address() {
    let repo = MockUserRepository::new();
    repo.add_user(new_user("test@test.pl")).await.unwrap();

    let result = repo
        .update_email("testkljkljkj@test.pl", "test2@test.pl")
        .await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::NotFoundByEmail { .. }))
    ));
}

#[tokio::test]
async fn update_email_rejects_address_owned_by_another_user() {
    let repo = MockUserRepository::new();
    repo.add_user(new_user("first@test.pl")).await.unwrap();
    repo.add_user(new_user("second@test.pl")).await.unwrap();

    let result = repo.update_email("first@test.pl", "second@test.pl").await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::EmailTaken))
    ));

    // both rows unchanged
    assert!(repo.find_by_email("first@test.pl").await.unwrap().is_some());
    assert!(repo.find_by_email("second@test.pl").await.unwrap().is_some());
}

#[tokio::test]
async fn update_password_overwrites_hash() {
    let repo = MockUserRepository::new();
    let id = repo.add_user(new_user("test@test.pl")).await.unwrap();

    repo.update_password("test@test.pl", "new-hash").await.unwrap();

    let user = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(user.password_hash, "new-hash");
}

#[tokio::test]
async fn update_password_reports_unknown_email() {
    let repo = MockUserRepository::new();
    repo.add_user(new_user("test@test.pl")).await.unwrap();

    let result = repo.update_password("testkljkljkj@test.pl", "new-hash").await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::NotFoundByEmail { .. }))
    ));
    let user = repo.find_by_email("test@test.pl").await.unwrap().unwrap();
    assert_eq!(user.password_hash, "hash");
}
