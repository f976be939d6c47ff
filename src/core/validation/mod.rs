//! Validation system
//!
//! Validation is an explicit, pure step: rules are plain functions over the
//! entity and every failing rule yields a [`Violation`]. The [`Validated`]
//! extractor applies it to request bodies before they reach handlers.

pub mod extractor;
pub mod rules;
pub mod validators;

pub use extractor::Validated;
pub use rules::validate;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the offending field
    pub field: String,
    /// The offending value (`null` when missing)
    pub value: Value,
    /// Human-readable message
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, value: Value, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value,
            message: message.into(),
        }
    }
}

/// Trait for entities that can be checked against their rules
pub trait Validatable {
    /// Run every rule and collect all violations. Empty means valid.
    fn violations(&self) -> Vec<Violation>;
}
