pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{AGGREGATION_SOURCE, AggregationMetadata, AggregationResult, RepresentativesEnvelope};
pub use handler::{handle_get_representatives, handle_representatives_preflight};
pub use service::{CiceroDataSource, RepresentativeAggregator};
