use axum::extract::{Json, State};

use crate::api::directions::{self, Router, RouterOutcome};
use crate::api::optimization::{OptimizationWorkflow, OptimizeError};
use crate::model::RouteRequest;

use super::ApiError;
use super::types::*;

pub type Result<T> = std::result::Result<T, ApiError>;

pub async fn optimize_route(
    State(workflow): State<OptimizationWorkflow<directions::Client>>,
    Json(r): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>> {
    let stops = r.stops.into_stops();

    let planned = workflow.run(&stops, r.profile).await?;

    Ok(Json(PlanRouteResponse {
        request: planned.request,
        routes: planned.routes,
    }))
}

pub async fn fixed_route(
    State(directions): State<directions::Client>,
    Json(r): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>> {
    let stops = r.stops.into_stops();
    if stops.is_empty() {
        return Err(OptimizeError::NoStops.into());
    }

    let request = RouteRequest::ordered(
        stops.iter().map(|stop| stop.coord).collect(),
        stops.iter().map(|stop| stop.label.clone()).collect(),
        r.profile,
    );

    match directions.request_routes(&request).await {
        RouterOutcome::Ready(routes) => Ok(Json(PlanRouteResponse { request, routes })),
        RouterOutcome::Failure(reasons) => Err(OptimizeError::Downstream { reasons }.into()),
        RouterOutcome::Canceled => Err(OptimizeError::Canceled.into()),
    }
}
