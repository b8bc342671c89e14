use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub code: String,

    #[serde(default)]
    pub routes: Vec<Route>,

    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub distance: f64,
    pub duration: f64,

    #[serde(default)]
    pub geometry: Option<String>,
}
