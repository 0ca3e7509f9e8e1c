pub mod cors;
pub mod health;
pub mod state;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::features::congress::handle_fetch_congress;
use crate::features::representatives::{
    handle_get_representatives, handle_representatives_preflight,
};

pub use cors::allow_any_origin;
pub use health::handle_healthcheck;
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let representatives = post(handle_get_representatives)
        .options(handle_representatives_preflight)
        .layer(middleware::from_fn(allow_any_origin));

    Router::new()
        .route("/api/health", get(handle_healthcheck))
        .route("/get-representatives", representatives.clone())
        .route(
            "/.netlify/functions/get-representatives",
            representatives,
        )
        .route("/fetchCongress", get(handle_fetch_congress))
        .route(
            "/.netlify/functions/fetchCongress",
            get(handle_fetch_congress),
        )
        .with_state(state)
}
