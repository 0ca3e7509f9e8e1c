use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use crate::core::error::{AppError, ErrorBody};
use crate::features::congress::client::MISSING_STATE_MESSAGE;
use crate::features::congress::dto::FetchCongressQuery;
use crate::server::AppState;

const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch data from Congress.gov API";
const FETCH_ERROR_MESSAGE: &str = "Error fetching data from Congress.gov API";

pub async fn handle_fetch_congress(
    State(state): State<AppState>,
    query: Result<Query<FetchCongressQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(MISSING_STATE_MESSAGE)),
        )
            .into_response();
    };

    match state.congress.fetch_legislators(query.state.as_deref()).await {
        Ok(legislators) => {
            info!(target: "congress", count = legislators.len(), "legislators fetched");
            Json(legislators).into_response()
        }
        Err(err) => failure_response(err),
    }
}

fn failure_response(err: AppError) -> Response {
    let (status, message) = match &err {
        AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, MISSING_STATE_MESSAGE),
        AppError::Upstream {
            status: Some(status),
            ..
        } => (*status, UPSTREAM_FAILURE_MESSAGE),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_MESSAGE),
    };

    if status != StatusCode::BAD_REQUEST {
        warn!(target: "congress", error = %err, %status, "legislator lookup failed");
    }

    (status, Json(ErrorBody::new(message))).into_response()
}
