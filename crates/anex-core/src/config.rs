use crate::app_config::AppConfig;
use crate::error::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, which is useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let instagram_base_url = require("ANEX_INSTAGRAM_BASE_URL")?;
    let tiktok_base_url = require("ANEX_TIKTOK_BASE_URL")?;
    let content_base_url = require("ANEX_CONTENT_BASE_URL")?;
    let storage_base_url = require("ANEX_STORAGE_BASE_URL")?;
    let storage_cdn_base_url = lookup("ANEX_STORAGE_CDN_BASE_URL").ok();

    let log_level = or_default("ANEX_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("ANEX_HTTP_TIMEOUT_SECS", "30")?;
    let http_max_retries = parse_u32("ANEX_HTTP_MAX_RETRIES", "3")?;
    let http_retry_backoff_base_ms = parse_u64("ANEX_HTTP_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        instagram_base_url,
        tiktok_base_url,
        content_base_url,
        storage_base_url,
        storage_cdn_base_url,
        log_level,
        http_timeout_secs,
        http_max_retries,
        http_retry_backoff_base_ms,
    })
}
