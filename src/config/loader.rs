use std::env;

use crate::config::dto::{ApiKey, AppConfig, UpstreamConfig};
use crate::core::error::AppError;

pub const DEFAULT_CICERO_BASE_URL: &str = "https://cicero.azavea.com/v3.1";
pub const DEFAULT_CONGRESS_BASE_URL: &str = "https://api.congress.gov/v3";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("SERVER_PORT")
        .or_else(|_| env::var("PORT"))
        .unwrap_or_else(|_| "8888".to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let cicero_api_key = require_secret("CICERO_API_KEY")?;
    let congress_api_key = require_secret("CONGRESS_API_KEY")?;

    let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse::<u64>()
        .map_err(|err| AppError::configuration(format!("invalid HTTP_TIMEOUT_SECS: {err}")))?;

    Ok(AppConfig {
        port,
        disable_proxy: parse_bool_env("DISABLE_PROXY", false),
        http_timeout_secs,
        cicero: UpstreamConfig {
            base_url: base_url_env("CICERO_BASE_URL", DEFAULT_CICERO_BASE_URL),
            api_key: cicero_api_key,
        },
        congress: UpstreamConfig {
            base_url: base_url_env("CONGRESS_BASE_URL", DEFAULT_CONGRESS_BASE_URL),
            api_key: congress_api_key,
        },
    })
}

fn require_secret(key: &str) -> Result<ApiKey, AppError> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(ApiKey::new)
        .ok_or_else(|| AppError::configuration(format!("{key} is required")))
}

fn base_url_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}
