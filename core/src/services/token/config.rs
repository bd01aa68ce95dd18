//! Configuration for the token service

use fh_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// JWT signing secret
    pub secret: String,
    /// Issuer claim; also used as the audience claim
    pub issuer: String,
    /// Token expiry in days
    pub expiry_days: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            issuer: "famhub".to_string(),
            expiry_days: 7,
        }
    }
}

impl From<JwtConfig> for TokenConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            issuer: config.issuer,
            expiry_days: config.expiry_days,
        }
    }
}
