//! Unit tests for the family group service

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::family::FamilyRoleId;
use crate::domain::entities::user::NewUser;
use crate::errors::{DomainError, FamilyError, UserError};
use crate::repositories::family::MockFamilyRepository;
use crate::repositories::user::MockUserRepository;
use crate::repositories::{FamilyRepository, UserRepository};
use crate::services::family::FamilyService;

async fn setup() -> (
    Arc<MockFamilyRepository>,
    FamilyService<MockFamilyRepository>,
    u64,
) {
    let users = Arc::new(MockUserRepository::new());
    let founder_id = users
        .add_user(NewUser::new(
            "founder@test.pl",
            "hash",
            "Jan",
            "Kowalski",
            NaiveDate::from_ymd_opt(1980, 6, 1).unwrap(),
        ))
        .await
        .unwrap();

    let families = Arc::new(MockFamilyRepository::new(users));
    let service = FamilyService::new(families.clone());
    (families, service, founder_id)
}

#[tokio::test]
async fn create_family_returns_id_and_name() {
    let (families, service, founder_id) = setup().await;

    let created = service
        .create_family("Kowalscy".to_string(), founder_id)
        .await
        .unwrap();

    assert_eq!(created.name, "Kowalscy");
    assert_eq!(families.family_count().await, 1);
}

#[tokio::test]
async fn create_family_binds_founder_as_administrator() {
    let (families, service, founder_id) = setup().await;

    let created = service
        .create_family("Kowalscy".to_string(), founder_id)
        .await
        .unwrap();

    assert_eq!(families.membership_count().await, 1);
    assert_eq!(
        families.member_role(founder_id, created.id).await.unwrap(),
        Some(FamilyRoleId::MainAdministrator)
    );
}

#[tokio::test]
async fn create_family_rejects_blank_name_without_store_mutation() {
    let (families, service, founder_id) = setup().await;

    let result = service.create_family("   ".to_string(), founder_id).await;

    assert!(matches!(
        result,
        Err(DomainError::Family(FamilyError::EmptyName))
    ));
    assert_eq!(families.family_count().await, 0);
}

#[tokio::test]
async fn create_family_rejects_unknown_founder() {
    let (families, service, _) = setup().await;

    let result = service.create_family("Kowalscy".to_string(), 999).await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::NotFoundById { .. }))
    ));
    assert_eq!(families.family_count().await, 0);
}

#[tokio::test]
async fn create_family_rejects_duplicate_name() {
    let (families, service, founder_id) = setup().await;
    service
        .create_family("Kowalscy".to_string(), founder_id)
        .await
        .unwrap();

    let result = service
        .create_family("Kowalscy".to_string(), founder_id)
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Family(FamilyError::NameTaken { .. }))
    ));
    assert_eq!(families.family_count().await, 1);
}

#[tokio::test]
async fn delete_family_reports_outcome() {
    let (_, service, founder_id) = setup().await;
    let created = service
        .create_family("Kowalscy".to_string(), founder_id)
        .await
        .unwrap();

    assert!(service.delete_family(created.id).await.unwrap());
    assert!(!service.delete_family(created.id).await.unwrap());
}
