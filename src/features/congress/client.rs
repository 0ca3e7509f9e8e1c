use std::sync::Arc;

use axum::http::StatusCode;
use reqwest::Url;
use serde_json::Value;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;

pub const MISSING_STATE_MESSAGE: &str = "State parameter is required";

const LEGISLATORS_ENDPOINT: &str = "legislators";

pub struct CongressClient {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl CongressClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy, config.http_timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub async fn fetch_legislators(&self, state: Option<&str>) -> Result<Vec<Value>, AppError> {
        let state = state
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::bad_request(MISSING_STATE_MESSAGE.to_string()))?;

        let base = &self.config.congress.base_url;
        let mut url = Url::parse(&format!("{base}/{LEGISLATORS_ENDPOINT}"))
            .map_err(|err| AppError::internal(format!("invalid Congress url: {err}")))?;
        url.query_pairs_mut()
            .append_pair("state", state)
            .append_pair("format", "json");

        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.config.congress.api_key.expose())
            .send()
            .await
            .map_err(|err| AppError::transport(LEGISLATORS_ENDPOINT, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(
                Some(status),
                format!("Congress {LEGISLATORS_ENDPOINT} responded with {status}"),
            ));
        }

        let payload = response.json::<Value>().await.map_err(|err| {
            AppError::upstream(
                Some(StatusCode::BAD_GATEWAY),
                format!("failed to decode Congress response: {}", err.without_url()),
            )
        })?;

        extract_legislators(payload).ok_or_else(|| {
            AppError::upstream(
                Some(StatusCode::BAD_GATEWAY),
                "Congress response is missing results.legislators".to_string(),
            )
        })
    }
}

fn extract_legislators(mut payload: Value) -> Option<Vec<Value>> {
    match payload.get_mut("results")?.get_mut("legislators")?.take() {
        Value::Array(items) => Some(items),
        _ => None,
    }
}
