#![allow(dead_code)]

use std::sync::Arc;

use civic_lookup_server::config::{ApiKey, AppConfig, UpstreamConfig};
use serde_json::{Value, json};

pub const CICERO_KEY: &str = "test-cicero-key";
pub const CONGRESS_TOKEN: &str = "test-congress-token";

pub fn test_config(cicero_base: &str, congress_base: &str) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        port: 0,
        disable_proxy: true,
        http_timeout_secs: 5,
        cicero: UpstreamConfig {
            base_url: cicero_base.to_string(),
            api_key: ApiKey::new(CICERO_KEY),
        },
        congress: UpstreamConfig {
            base_url: congress_base.to_string(),
            api_key: ApiKey::new(CONGRESS_TOKEN),
        },
    })
}

pub fn official(id: Option<i64>, first_name: &str, last_name: &str, office: &str) -> Value {
    let mut record = json!({
        "first_name": first_name,
        "last_name": last_name,
        "office": { "name": office, "title": office },
        "party": "Independent",
    });
    if let Some(id) = id {
        record["id"] = json!(id);
    }
    record
}

pub fn officials_payload(officials: Vec<Value>) -> Value {
    json!({ "response": { "results": { "officials": officials } } })
}

pub fn districts_payload(districts: Vec<Value>) -> Value {
    json!({ "response": { "results": { "districts": districts } } })
}
