//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows clients to handle specific cases

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use simulation::prelude::*;

fn installments_violation() -> Violation {
    Violation::new(
        "installments",
        json!(49),
        "Installments must be equal or less than 48",
    )
}

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_validation_error_returns_400() {
        let err = SimulationError::Validation(ValidationError::Violations(vec![
            installments_violation(),
        ]));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_body_returns_400() {
        let err = SimulationError::Request(RequestError::InvalidBody {
            message: "EOF while parsing".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unsupported_media_type_returns_415() {
        let err = SimulationError::Request(RequestError::UnsupportedMediaType {
            content_type: None,
        });
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_config_error_returns_500() {
        let err = SimulationError::Config(ConfigError::ParseError {
            file: Some("simulation.yaml".to_string()),
            message: "invalid syntax".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_returns_500() {
        let err = SimulationError::Internal("unexpected".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_request_error_codes() {
        assert_eq!(
            RequestError::InvalidBody {
                message: "x".to_string()
            }
            .error_code(),
            "INVALID_BODY"
        );
        assert_eq!(
            RequestError::UnsupportedMediaType {
                content_type: Some("text/plain".to_string())
            }
            .error_code(),
            "UNSUPPORTED_MEDIA_TYPE"
        );
    }

    #[test]
    fn test_top_level_error_codes() {
        assert_eq!(
            SimulationError::from(ValidationError::Violations(vec![])).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            SimulationError::from(ConfigError::FileNotFound {
                path: "x".to_string()
            })
            .error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            SimulationError::Internal("x".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_error_response_has_code_and_message() {
        let err = SimulationError::from(RequestError::InvalidBody {
            message: "expected `,` or `}`".to_string(),
        });
        let response = err.to_response();

        assert_eq!(response.code, "INVALID_BODY");
        assert!(response.message.contains("expected"));
        assert!(response.details.is_none());
    }

    #[test]
    fn test_validation_errors_include_field_details() {
        let err = SimulationError::from(ValidationError::Violations(vec![
            Violation::new("amount", json!("500"), "Amount must be equal or less than $ 40.000"),
            installments_violation(),
        ]));

        let response = err.to_response();
        let details = response.details.unwrap();
        let fields = details["fields"].as_array().unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["field"], "amount");
        assert_eq!(fields[0]["value"], "500");
        assert_eq!(fields[1]["field"], "installments");
    }

    #[test]
    fn test_details_are_omitted_from_json_when_absent() {
        let err = SimulationError::Internal("boom".to_string());
        let body = serde_json::to_value(err.to_response()).unwrap();
        assert!(body.get("details").is_none());
        assert_eq!(body["message"], "Internal error: boom");
    }
}

// =============================================================================
// Error Conversion Tests
// =============================================================================

mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_serde_json_error_converts_to_invalid_body() {
        let json_err = serde_json::from_str::<Simulation>("{\"installments\": []}").unwrap_err();
        let err: SimulationError = json_err.into();

        assert!(matches!(
            err,
            SimulationError::Request(RequestError::InvalidBody { .. })
        ));
    }

    #[test]
    fn test_yaml_error_converts_to_config_parse_error() {
        let yaml_err = serde_yaml::from_str::<AppConfig>("server:\n  port: abc\n").unwrap_err();
        let err: ConfigError = yaml_err.into();
        assert!(matches!(err, ConfigError::ParseError { file: None, .. }));
    }

    #[test]
    fn test_io_error_converts_to_config_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[test]
    fn test_can_match_validation_errors() {
        let result = Simulation::builder()
            .amount(Decimal::new(10, 0))
            .installments(49)
            .build()
            .validated()
            .map_err(SimulationError::from);

        match result {
            Err(SimulationError::Validation(ValidationError::Violations(violations))) => {
                assert_eq!(violations, vec![installments_violation()]);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}

// =============================================================================
// IntoResponse Tests
// =============================================================================

mod into_response_tests {
    use super::*;

    #[test]
    fn test_validation_error_into_response_status() {
        let err = SimulationError::from(ValidationError::Violations(vec![
            installments_violation(),
        ]));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unsupported_media_type_into_response_status() {
        let err = SimulationError::from(RequestError::UnsupportedMediaType {
            content_type: Some("text/plain".to_string()),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
