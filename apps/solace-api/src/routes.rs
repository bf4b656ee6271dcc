use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use crate::state::AppState;
use solace_service::{ListRequest, ListResponse};

const LIST_FAILED: &str = "Failed to fetch advocates";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/advocates", get(list_advocates))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

/// Repeated keys keep their first value. Unknown keys are ignored.
async fn list_advocates(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListResponse>, ApiError> {
	let response = state.service.list(ListRequest::from_pairs(pairs)).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: &'static str,
}

/// Request-boundary failure. The cause is logged, never sent to the caller.
#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: &'static str,
}
impl From<solace_service::Error> for ApiError {
	fn from(err: solace_service::Error) -> Self {
		tracing::error!(error = %err, "Failed to fetch advocates.");

		Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: LIST_FAILED }
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
