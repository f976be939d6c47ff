//! Typed error handling for the simulation service
//!
//! Errors are split by category so that callers can match on what went wrong
//! instead of inspecting a generic `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: the payload parsed but broke one or more rules
//! - [`RequestError`]: the payload could not be turned into a simulation
//! - [`ConfigError`]: the server configuration could not be loaded
//!
//! # Example
//!
//! ```rust,ignore
//! match simulation.validated() {
//!     Ok(simulation) => accept(simulation),
//!     Err(ValidationError::Violations(violations)) => {
//!         for v in violations {
//!             println!("{}: {}", v.field, v.message);
//!         }
//!     }
//! }
//! ```

use crate::core::validation::Violation;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The main error type for the simulation service
#[derive(Debug)]
pub enum SimulationError {
    /// The simulation broke one or more rules
    Validation(ValidationError),

    /// HTTP/Request errors (malformed body, wrong content type)
    Request(RequestError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Validation(e) => write!(f, "{}", e),
            SimulationError::Request(e) => write!(f, "{}", e),
            SimulationError::Config(e) => write!(f, "{}", e),
            SimulationError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Validation(e) => Some(e),
            SimulationError::Request(e) => Some(e),
            SimulationError::Config(e) => Some(e),
            SimulationError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SimulationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SimulationError::Validation(_) => StatusCode::BAD_REQUEST,
            SimulationError::Request(e) => e.status_code(),
            SimulationError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SimulationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SimulationError::Validation(_) => "VALIDATION_ERROR",
            SimulationError::Request(e) => e.error_code(),
            SimulationError::Config(_) => "CONFIG_ERROR",
            SimulationError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            SimulationError::Validation(ValidationError::Violations(violations)) => {
                Some(serde_json::json!({ "fields": violations }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for SimulationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to simulation rules
#[derive(Debug)]
pub enum ValidationError {
    /// Every rule the simulation broke
    Violations(Vec<Violation>),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Violations(violations) => {
                let msgs: Vec<String> = violations
                    .iter()
                    .map(|v| format!("{}: {}", v.field, v.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for SimulationError {
    fn from(err: ValidationError) -> Self {
        SimulationError::Validation(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the incoming request itself
#[derive(Debug)]
pub enum RequestError {
    /// Body could not be parsed into a simulation
    InvalidBody { message: String },

    /// Body was not sent as JSON
    UnsupportedMediaType { content_type: Option<String> },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            RequestError::UnsupportedMediaType { content_type } => match content_type {
                Some(ct) => write!(f, "Expected application/json, got '{}'", ct),
                None => write!(f, "Expected application/json, no content type given"),
            },
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
        }
    }
}

impl From<RequestError> for SimulationError {
    fn from(err: RequestError) -> Self {
        SimulationError::Request(err)
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        SimulationError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::Request(RequestError::InvalidBody {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for the simulation service
pub type SimulationResult<T> = Result<T, SimulationError>;
