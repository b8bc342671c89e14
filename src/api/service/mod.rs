pub mod endpoints;
pub mod router;
pub mod types;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::directions;
use crate::api::optimization::{OptimizationWorkflow, OptimizeError};

#[derive(Clone)]
pub struct State {
    pub workflow: OptimizationWorkflow<directions::Client>,
    pub directions: directions::Client,
}

impl State {
    pub fn new(
        workflow: OptimizationWorkflow<directions::Client>,
        directions: directions::Client,
    ) -> Self {
        Self {
            workflow,
            directions,
        }
    }
}

impl axum::extract::FromRef<State> for OptimizationWorkflow<directions::Client> {
    fn from_ref(input: &State) -> Self {
        input.workflow.clone()
    }
}

impl axum::extract::FromRef<State> for directions::Client {
    fn from_ref(input: &State) -> Self {
        input.directions.clone()
    }
}

pub struct ApiError(pub OptimizeError);

impl From<OptimizeError> for ApiError {
    fn from(value: OptimizeError) -> Self {
        ApiError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            OptimizeError::NoStops => StatusCode::BAD_REQUEST,
            OptimizeError::PollDeadline { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        };

        let body = types::ErrorResponse {
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
