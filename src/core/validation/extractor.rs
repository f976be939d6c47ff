//! Axum extractor for validated payloads
//!
//! `Validated<T>` deserializes the JSON body into `T` and runs its rules
//! before the handler is called. A body that cannot be parsed is rejected
//! with a request error; a body that parses but breaks rules is rejected with
//! the full list of violations.

use super::Validatable;
use crate::core::error::{RequestError, SimulationError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

/// Axum extractor that deserializes and validates a JSON payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn simulate(
///     Validated(simulation): Validated<Simulation>,
/// ) -> (StatusCode, Json<Simulation>) {
///     // simulation already passed every rule
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Get the inner payload
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validatable + Send,
{
    type Rejection = SimulationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| rejection_to_error(rejection, content_type))?;

        let violations = payload.violations();
        if violations.is_empty() {
            Ok(Validated(payload))
        } else {
            Err(ValidationError::Violations(violations).into())
        }
    }
}

fn rejection_to_error(rejection: JsonRejection, content_type: Option<String>) -> SimulationError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            RequestError::UnsupportedMediaType { content_type }.into()
        }
        other => RequestError::InvalidBody {
            message: other.body_text(),
        }
        .into(),
    }
}
