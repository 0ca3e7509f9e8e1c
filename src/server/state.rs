use std::sync::Arc;

use crate::features::congress::CongressClient;
use crate::features::representatives::RepresentativeAggregator;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<RepresentativeAggregator>,
    pub congress: Arc<CongressClient>,
}

impl AppState {
    pub fn new(aggregator: Arc<RepresentativeAggregator>, congress: Arc<CongressClient>) -> Self {
        Self {
            aggregator,
            congress,
        }
    }
}
