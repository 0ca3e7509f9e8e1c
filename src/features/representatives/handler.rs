use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::core::error::{AppError, ErrorBody};
use crate::features::cicero::Location;
use crate::features::representatives::dto::RepresentativesEnvelope;
use crate::server::AppState;

const INVALID_BODY_MESSAGE: &str = "Invalid request body";
const FAILURE_MESSAGE: &str = "Failed to fetch representatives";

pub async fn handle_get_representatives(State(state): State<AppState>, body: Bytes) -> Response {
    let location = match serde_json::from_slice::<Location>(&body) {
        Ok(location) => location,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::with_details(
                    INVALID_BODY_MESSAGE,
                    format!("expected {{lat, lon, address?}}: {err}"),
                )),
            )
                .into_response();
        }
    };

    match state.aggregator.aggregate(location).await {
        Ok(result) => Json(RepresentativesEnvelope::from(result)).into_response(),
        Err(err) => failure_response(err),
    }
}

pub async fn handle_representatives_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn failure_response(err: AppError) -> Response {
    match err {
        AppError::BadRequest(details) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::with_details(INVALID_BODY_MESSAGE, details)),
        )
            .into_response(),
        other => {
            error!(target: "representatives", error = %other, "representatives lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::with_details(FAILURE_MESSAGE, other.to_string())),
            )
                .into_response()
        }
    }
}
