use axum::routing::post;

use super::State;
use super::endpoints;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/api/optimize_route", post(endpoints::optimize_route))
        .route("/api/route", post(endpoints::fixed_route))
        .with_state(state)
}
