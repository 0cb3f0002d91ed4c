use crate::app_config::AppConfig;
use crate::error::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. Every variable has a
/// default, so a bare environment is valid.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the process environment
/// so tests can drive it with a plain `HashMap` lookup.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let catalog_url = or_default(
        "OFFERWATCH_CATALOG_URL",
        "https://shop.wot.360.cn/api/product/list?game_id=1&type=vehicles",
    );
    let catalog_referer = or_default(
        "OFFERWATCH_CATALOG_REFERER",
        "https://shop.wot.360.cn/vehicles",
    );
    let request_timeout_secs = parse_u64("OFFERWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("OFFERWATCH_USER_AGENT", "offerwatch/0.1 (catalog-watch)");
    let max_retries = parse_u32("OFFERWATCH_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("OFFERWATCH_RETRY_BACKOFF_BASE_SECS", "5")?;
    let snapshot_path = PathBuf::from(or_default(
        "OFFERWATCH_SNAPSHOT_PATH",
        "./artifact/offers.json",
    ));
    let notify_webhook_url = lookup("OFFERWATCH_NOTIFY_WEBHOOK").ok();
    let log_level = or_default("OFFERWATCH_LOG_LEVEL", "info");

    Ok(AppConfig {
        catalog_url,
        catalog_referer,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        snapshot_path,
        notify_webhook_url,
        log_level,
    })
}
