use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::features::cicero::{District, Official};

pub const AGGREGATION_SOURCE: &str = "cicero_combined";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationResult {
    pub officials: Vec<Official>,
    pub districts: Vec<District>,
    pub metadata: AggregationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationMetadata {
    pub total_officials: usize,
    pub source: String,
    pub timestamp: String,
}

impl AggregationResult {
    pub fn new(officials: Vec<Official>, districts: Vec<District>) -> Self {
        let metadata = AggregationMetadata {
            total_officials: officials.len(),
            source: AGGREGATION_SOURCE.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        Self {
            officials,
            districts,
            metadata,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepresentativesEnvelope {
    pub response: RepresentativesResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepresentativesResponse {
    pub results: AggregationResult,
}

impl From<AggregationResult> for RepresentativesEnvelope {
    fn from(results: AggregationResult) -> Self {
        Self {
            response: RepresentativesResponse { results },
        }
    }
}
