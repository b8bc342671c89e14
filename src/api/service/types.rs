use serde::{Deserialize, Serialize};

use crate::api::directions::Route;
use crate::model::{FeatureCollection, RouteRequest, TravelProfile};

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanRouteRequest {
    pub stops: FeatureCollection,
    pub profile: TravelProfile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanRouteResponse {
    pub request: RouteRequest,
    pub routes: Vec<Route>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
