//! Acceptance rules for simulations

use super::validators::{decimal_max, decimal_min, int_max, int_min, required};
use super::{Validatable, Violation};
use crate::core::error::ValidationError;
use crate::core::simulation::Simulation;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

pub const AMOUNT_FIELD: &str = "amount";
pub const INSTALLMENTS_FIELD: &str = "installments";

/// Smallest accepted amount (inclusive)
pub const MIN_AMOUNT: Decimal = Decimal::ONE;
/// Largest accepted amount (inclusive)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(40, 0, 0, false, 0);
pub const MIN_INSTALLMENTS: i32 = 2;
pub const MAX_INSTALLMENTS: i32 = 48;

pub const AMOUNT_EMPTY: &str = "Amount cannot be empty";
pub const AMOUNT_TOO_LOW: &str = "Amount must be equal or greater than $ 1.000";
pub const AMOUNT_TOO_HIGH: &str = "Amount must be equal or less than $ 40.000";
pub const INSTALLMENTS_EMPTY: &str = "Installments cannot be empty";
pub const INSTALLMENTS_TOO_LOW: &str = "Installments must be equal or greater than 2";
pub const INSTALLMENTS_TOO_HIGH: &str = "Installments must be equal or less than 48";

/// Check a simulation against every rule
///
/// All failing rules are reported, amount rules first. A missing field only
/// yields its "cannot be empty" violation.
pub fn validate(simulation: &Simulation) -> Vec<Violation> {
    let mut violations = Vec::new();

    let amount_rules: [FieldRule<'_, Decimal>; 3] = [
        &required::<Decimal>(AMOUNT_EMPTY),
        &decimal_min(MIN_AMOUNT, AMOUNT_TOO_LOW),
        &decimal_max(MAX_AMOUNT, AMOUNT_TOO_HIGH),
    ];
    check_field(
        &mut violations,
        AMOUNT_FIELD,
        &simulation.amount,
        &amount_rules,
    );

    let installments_rules: [FieldRule<'_, i32>; 3] = [
        &required::<i32>(INSTALLMENTS_EMPTY),
        &int_min(MIN_INSTALLMENTS, INSTALLMENTS_TOO_LOW),
        &int_max(MAX_INSTALLMENTS, INSTALLMENTS_TOO_HIGH),
    ];
    check_field(
        &mut violations,
        INSTALLMENTS_FIELD,
        &simulation.installments,
        &installments_rules,
    );

    violations
}

type FieldRule<'a, T> = &'a dyn Fn(&str, &Option<T>) -> Result<(), String>;

fn check_field<T: Serialize>(
    violations: &mut Vec<Violation>,
    field: &str,
    value: &Option<T>,
    rules: &[FieldRule<'_, T>],
) {
    for rule in rules {
        if let Err(message) = rule(field, value) {
            let offending = serde_json::to_value(value).unwrap_or(Value::Null);
            violations.push(Violation::new(field, offending, message));
        }
    }
}

impl Validatable for Simulation {
    fn violations(&self) -> Vec<Violation> {
        validate(self)
    }
}

impl Simulation {
    /// Check this simulation against every rule
    pub fn validate(&self) -> Vec<Violation> {
        validate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Consume the simulation, returning it back only if it is valid
    pub fn validated(self) -> Result<Self, ValidationError> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(self)
        } else {
            Err(ValidationError::Violations(violations))
        }
    }
}
