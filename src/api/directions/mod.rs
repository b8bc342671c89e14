pub mod client;
pub mod types;

use std::future::Future;

pub use client::Client;
pub use types::{DirectionsResponse, Route};

use crate::model::RouteRequest;

/// What the downstream route provider reported for one request.
#[derive(Debug, Clone)]
pub enum RouterOutcome {
    Ready(Vec<Route>),
    Failure(Vec<String>),
    Canceled,
}

/// Downstream route-request collaborator. Callers relay the three
/// outcomes without interpreting failure reasons further.
pub trait Router {
    fn request_routes(
        &self,
        request: &RouteRequest,
    ) -> impl Future<Output = RouterOutcome> + Send;
}
