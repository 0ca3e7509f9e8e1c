use std::sync::Arc;

use reqwest::Url;
use serde_json::Value;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::cicero::dto::Location;

const LEGISLATIVE_DISTRICT_ENDPOINT: &str = "legislative_district";
const NONLEGISLATIVE_DISTRICT_ENDPOINT: &str = "nonlegislative_district";
const OFFICIAL_ENDPOINT: &str = "official";
const ELECTION_EVENT_ENDPOINT: &str = "election_event";

pub struct CiceroClient {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl CiceroClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy, config.http_timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub async fn fetch_legislative_districts(&self, location: &Location) -> Result<Value, AppError> {
        self.get_json(LEGISLATIVE_DISTRICT_ENDPOINT, &coordinate_params(location))
            .await
    }

    pub async fn fetch_officials_by_location(&self, location: &Location) -> Result<Value, AppError> {
        self.get_json(OFFICIAL_ENDPOINT, &coordinate_params(location))
            .await
    }

    pub async fn fetch_nonlegislative_districts(
        &self,
        location: &Location,
    ) -> Result<Value, AppError> {
        self.get_json(NONLEGISLATIVE_DISTRICT_ENDPOINT, &coordinate_params(location))
            .await
    }

    pub async fn fetch_officials_by_district(&self, district_id: &str) -> Result<Value, AppError> {
        self.get_json(
            OFFICIAL_ENDPOINT,
            &[("district_id", district_id.to_string())],
        )
        .await
    }

    pub async fn fetch_election_events(&self, location: &Location) -> Result<Value, AppError> {
        self.get_json(ELECTION_EVENT_ENDPOINT, &coordinate_params(location))
            .await
    }

    async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, AppError> {
        let base = &self.config.cicero.base_url;
        let mut url = Url::parse(&format!("{base}/{endpoint}")).map_err(|err| {
            AppError::internal(format!("invalid Cicero url for {endpoint}: {err}"))
        })?;

        {
            let mut query_pairs = url.query_pairs_mut();
            for (name, value) in params {
                query_pairs.append_pair(name, value);
            }
            query_pairs.append_pair("format", "json");
            query_pairs.append_pair("key", self.config.cicero.api_key.expose());
        }

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|err| AppError::transport(endpoint, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(
                Some(status),
                format!("Cicero {endpoint} responded with {status}"),
            ));
        }

        response.json::<Value>().await.map_err(|err| {
            AppError::upstream(
                None,
                format!(
                    "failed to decode Cicero {endpoint} response: {}",
                    err.without_url()
                ),
            )
        })
    }
}

fn coordinate_params(location: &Location) -> [(&'static str, String); 2] {
    [
        ("lat", location.lat.to_string()),
        ("lon", location.lon.to_string()),
    ]
}
