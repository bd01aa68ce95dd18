//! Configuration loading for the API binary.

use fh_shared::config::AppConfig;

/// Load configuration from the environment, after `.env` has been read
pub fn load() -> AppConfig {
    let config = AppConfig::from_env();

    if config.jwt.is_using_default_secret() && config.environment.is_production() {
        log::warn!("JWT_SECRET is unset; running production with the development secret");
    }

    config
}
