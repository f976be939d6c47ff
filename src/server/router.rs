//! Router builder for the simulation resource

use super::handlers::simulate;
use axum::{Router, routing::post};

/// Build the simulation routes
///
/// - POST /simulation - Validate a simulation and echo it back
pub fn build_simulation_routes() -> Router {
    Router::new().route("/simulation", post(simulate))
}
