//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainResult, TokenError};

use super::config::TokenConfig;

/// Service for signing and validating bearer tokens
///
/// Tokens are HS256-signed with a symmetric secret. The claim set carries
/// the user's id, display name and email; audience equals issuer.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a signed token for an authenticated user
    pub fn generate_token(&self, user: &User) -> DomainResult<String> {
        let now = Utc::now();
        let expires = now + Duration::days(self.config.expiry_days);

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.full_name(),
            email: user.email.clone(),
            iss: self.config.issuer.clone(),
            aud: self.config.issuer.clone(),
            exp: expires.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("token generation failed: {}", e);
            TokenError::GenerationFailed.into()
        })
    }

    /// Validate a token's signature, expiry, issuer and audience
    pub fn validate_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired.into(),
                ErrorKind::InvalidSignature => TokenError::InvalidSignature.into(),
                _ => TokenError::InvalidClaims.into(),
            })
    }

    /// Configured token lifetime in days
    pub fn expiry_days(&self) -> i64 {
        self.config.expiry_days
    }
}
