//! Integration tests for the full authorization flow over in-memory stores

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use fh_core::domain::entities::family::FamilyRoleId;
    use fh_core::domain::value_objects::{PasswordChange, RegisterUser};
    use fh_core::errors::{DomainError, PasswordError, UserError};
    use fh_core::repositories::family::MockFamilyRepository;
    use fh_core::repositories::user::MockUserRepository;
    use fh_core::repositories::FamilyRepository;
    use fh_core::services::auth::AuthService;
    use fh_core::services::family::FamilyService;
    use fh_core::services::password::BcryptHasher;
    use fh_core::services::token::{TokenConfig, TokenService};
    use fh_core::services::user::UserService;

    struct Harness {
        users: Arc<MockUserRepository>,
        families: Arc<MockFamilyRepository>,
        auth: AuthService<MockUserRepository, BcryptHasher>,
        user: UserService<MockUserRepository, BcryptHasher>,
        family: FamilyService<MockFamilyRepository>,
        tokens: Arc<TokenService>,
    }

    fn harness() -> Harness {
        let users = Arc::new(MockUserRepository::new());
        let families = Arc::new(MockFamilyRepository::new(users.clone()));
        let hasher = Arc::new(BcryptHasher::with_cost(4));
        let tokens = Arc::new(TokenService::new(TokenConfig {
            secret: "integration-test-secret".to_string(),
            issuer: "famhub-test".to_string(),
            expiry_days: 7,
        }));

        Harness {
            users: users.clone(),
            families: families.clone(),
            auth: AuthService::new(users.clone(), hasher.clone(), tokens.clone()),
            user: UserService::new(users, hasher),
            family: FamilyService::new(families),
            tokens,
        }
    }

    fn registration(email: &str) -> RegisterUser {
        RegisterUser {
            email: email.to_string(),
            password: "zaq1@WSX".to_string(),
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        }
    }

    #[tokio::test]
    async fn register_login_and_inspect_token() {
        let h = harness();

        let registered = h.auth.register(registration("test@test.pl")).await.unwrap();

        // wrong password never yields a token
        assert!(h
            .auth
            .login("test@test.pl", "zaq1@wsx")
            .await
            .unwrap()
            .is_none());

        let token = h
            .auth
            .login("test@test.pl", "zaq1@WSX")
            .await
            .unwrap()
            .expect("valid credentials");

        let claims = h.tokens.validate_token(&token).unwrap();
        assert_eq!(claims.user_id(), Some(registered.id));
        assert_eq!(claims.email, "test@test.pl");
        assert_eq!(claims.name, "Jan Kowalski");
    }

    #[tokio::test]
    async fn duplicate_registration_leaves_store_unchanged() {
        let h = harness();

        h.auth.register(registration("test@test.pl")).await.unwrap();
        let result = h.auth.register(registration("test@test.pl")).await;

        assert!(matches!(
            result,
            Err(DomainError::User(UserError::EmailTaken))
        ));
        assert_eq!(h.users.user_count().await, 1);
    }

    #[tokio::test]
    async fn password_change_rotates_the_accepted_credential() {
        let h = harness();
        h.auth.register(registration("test@test.pl")).await.unwrap();

        // same-as-current is rejected outright
        let same = h
            .user
            .update_password(PasswordChange {
                email: "test@test.pl".to_string(),
                new_password: "zaq1@WSX".to_string(),
            })
            .await;
        assert!(matches!(
            same,
            Err(DomainError::Password(PasswordError::SameAsCurrent))
        ));

        h.user
            .update_password(PasswordChange {
                email: "test@test.pl".to_string(),
                new_password: "xsw2!QAZ".to_string(),
            })
            .await
            .unwrap();

        assert!(!h
            .auth
            .check_credentials("test@test.pl", "zaq1@WSX")
            .await
            .unwrap());
        assert!(h
            .auth
            .check_credentials("test@test.pl", "xsw2!QAZ")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn founder_registers_then_creates_family() {
        let h = harness();
        let registered = h.auth.register(registration("founder@test.pl")).await.unwrap();

        let created = h
            .family
            .create_family("Kowalscy".to_string(), registered.id)
            .await
            .unwrap();

        assert_eq!(h.families.membership_count().await, 1);
        assert_eq!(
            h.families
                .member_role(registered.id, created.id)
                .await
                .unwrap(),
            Some(FamilyRoleId::MainAdministrator)
        );

        // the family can be torn down again
        assert!(h.family.delete_family(created.id).await.unwrap());
        assert_eq!(h.families.membership_count().await, 0);
    }
}
