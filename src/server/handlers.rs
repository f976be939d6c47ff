//! HTTP handlers for the simulation resource

use crate::core::error::SimulationError;
use crate::core::simulation::Simulation;
use crate::core::validation::Validated;
use axum::{Json, http::StatusCode};

/// Handler for `POST /simulation`
///
/// A request is either accepted (202, echoing the simulation) or rejected
/// with the extractor's error: a malformed body or the list of violations.
pub async fn simulate(
    payload: Result<Validated<Simulation>, SimulationError>,
) -> Result<(StatusCode, Json<Simulation>), SimulationError> {
    match payload {
        Ok(Validated(simulation)) => {
            tracing::debug!(
                amount = ?simulation.amount,
                installments = ?simulation.installments,
                "simulation accepted"
            );
            Ok((StatusCode::ACCEPTED, Json(simulation)))
        }
        Err(err) => {
            tracing::info!(code = err.error_code(), "simulation rejected: {}", err);
            Err(err)
        }
    }
}
