use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::error::AppError;
use crate::features::cicero::helpers::{district_id, has_results, parse_districts, parse_officials};
use crate::features::cicero::{CiceroClient, District, Location, Official, dedupe_officials};
use crate::features::representatives::dto::AggregationResult;

#[async_trait]
pub trait CiceroDataSource: Send + Sync {
    async fn fetch_legislative_districts(&self, location: &Location) -> Result<Value, AppError>;
    async fn fetch_officials_by_location(&self, location: &Location) -> Result<Value, AppError>;
    async fn fetch_nonlegislative_districts(&self, location: &Location)
    -> Result<Value, AppError>;
    async fn fetch_officials_by_district(&self, district_id: &str) -> Result<Value, AppError>;
    async fn fetch_election_events(&self, location: &Location) -> Result<Value, AppError>;
}

#[async_trait]
impl CiceroDataSource for CiceroClient {
    async fn fetch_legislative_districts(&self, location: &Location) -> Result<Value, AppError> {
        CiceroClient::fetch_legislative_districts(self, location).await
    }

    async fn fetch_officials_by_location(&self, location: &Location) -> Result<Value, AppError> {
        CiceroClient::fetch_officials_by_location(self, location).await
    }

    async fn fetch_nonlegislative_districts(
        &self,
        location: &Location,
    ) -> Result<Value, AppError> {
        CiceroClient::fetch_nonlegislative_districts(self, location).await
    }

    async fn fetch_officials_by_district(&self, district_id: &str) -> Result<Value, AppError> {
        CiceroClient::fetch_officials_by_district(self, district_id).await
    }

    async fn fetch_election_events(&self, location: &Location) -> Result<Value, AppError> {
        CiceroClient::fetch_election_events(self, location).await
    }
}

pub struct RepresentativeAggregator {
    data_source: Arc<dyn CiceroDataSource>,
}

impl RepresentativeAggregator {
    pub fn new(data_source: Arc<dyn CiceroDataSource>) -> Self {
        Self { data_source }
    }

    pub async fn aggregate(&self, location: Location) -> Result<AggregationResult, AppError> {
        location.validate()?;

        info!(target: "representatives", lat = location.lat, lon = location.lon, "fetching representatives");
        debug!(target: "representatives", address = ?location.address, "address supplied by caller");

        let districts = self.collect_legislative_districts(&location).await;

        let mut officials = self.collect_location_officials(&location).await;
        officials.extend(self.collect_non_legislative_officials(&location).await);

        self.probe_election_events(&location).await;

        let officials = dedupe_officials(officials);
        let office_types = officials
            .iter()
            .filter_map(Official::office_name)
            .collect::<BTreeSet<_>>();
        info!(
            target: "representatives",
            total = officials.len(),
            ?office_types,
            "unique officials found"
        );

        Ok(AggregationResult::new(officials, districts))
    }

    async fn collect_legislative_districts(&self, location: &Location) -> Vec<District> {
        match self.data_source.fetch_legislative_districts(location).await {
            Ok(raw) => {
                let districts = parse_districts(&raw).unwrap_or_default();
                info!(target: "representatives", count = districts.len(), "legislative districts found");
                districts
            }
            Err(error) => {
                warn!(target: "representatives", %error, "failed to fetch legislative districts");
                Vec::new()
            }
        }
    }

    async fn collect_location_officials(&self, location: &Location) -> Vec<Official> {
        match self.data_source.fetch_officials_by_location(location).await {
            Ok(raw) => {
                let officials = parse_officials(&raw).unwrap_or_default();
                info!(target: "representatives", count = officials.len(), "officials found for location");
                officials
            }
            Err(error) => {
                warn!(target: "representatives", %error, "failed to fetch officials for location");
                Vec::new()
            }
        }
    }

    async fn collect_non_legislative_officials(&self, location: &Location) -> Vec<Official> {
        let districts = match self.data_source.fetch_nonlegislative_districts(location).await {
            Ok(raw) => parse_districts(&raw).unwrap_or_default(),
            Err(error) => {
                warn!(target: "representatives", %error, "failed to fetch non-legislative districts");
                return Vec::new();
            }
        };
        info!(target: "representatives", count = districts.len(), "non-legislative districts found");

        let mut officials = Vec::new();
        for district in &districts {
            let Some(id) = district_id(district) else {
                continue;
            };

            debug!(target: "representatives", district = district.label(), %id, "fetching district officials");
            match self.data_source.fetch_officials_by_district(&id).await {
                Ok(raw) => {
                    let found = parse_officials(&raw).unwrap_or_default();
                    debug!(target: "representatives", district = district.label(), count = found.len(), "district officials found");
                    officials.extend(found);
                }
                Err(error) => {
                    warn!(target: "representatives", %error, district_id = %id, "could not fetch district officials");
                }
            }
        }

        officials
    }

    // informational only, never merged into the result
    async fn probe_election_events(&self, location: &Location) {
        match self.data_source.fetch_election_events(location).await {
            Ok(raw) if has_results(&raw) => {
                info!(target: "representatives", "election data found");
            }
            Ok(_) => {
                debug!(target: "representatives", "election response carried no results");
            }
            Err(error) => {
                debug!(target: "representatives", %error, "no election data available");
            }
        }
    }
}
