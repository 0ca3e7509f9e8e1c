use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::AppError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub address: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(AppError::bad_request(format!(
                "latitude must be between -90 and 90, received {}",
                self.lat
            )));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(AppError::bad_request(format!(
                "longitude must be between -180 and 180, received {}",
                self.lon
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Official(Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct District(Value);

impl Official {
    pub fn new(record: Value) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &Value {
        &self.0
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn first_name(&self) -> Option<&str> {
        self.0.get("first_name").and_then(Value::as_str)
    }

    pub fn last_name(&self) -> Option<&str> {
        self.0.get("last_name").and_then(Value::as_str)
    }

    pub fn office_name(&self) -> Option<&str> {
        self.0
            .get("office")
            .and_then(|office| office.get("name"))
            .and_then(Value::as_str)
    }
}

impl District {
    pub fn new(record: Value) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &Value {
        &self.0
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn district_type(&self) -> Option<&str> {
        self.0.get("district_type").and_then(Value::as_str)
    }

    // name, else district type
    pub fn label(&self) -> &str {
        self.name()
            .or(self.district_type())
            .unwrap_or("unnamed district")
    }
}
