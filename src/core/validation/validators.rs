//! Reusable field validators
//!
//! Each validator receives the field name and the field value and returns the
//! configured message when the value breaks the rule. Range validators let a
//! missing value through so that only `required` reports it.

use rust_decimal::Decimal;

/// Validator: field is required (not None)
pub fn required<T>(
    message: &'static str,
) -> impl Fn(&str, &Option<T>) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Option<T>| {
        if value.is_none() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: decimal must be greater than or equal to `min`
///
/// Comparison is numeric, so `1` and `1.000` are the same bound.
pub fn decimal_min(
    min: Decimal,
    message: &'static str,
) -> impl Fn(&str, &Option<Decimal>) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Option<Decimal>| match value {
        Some(amount) if *amount < min => Err(message.to_string()),
        _ => Ok(()),
    }
}

/// Validator: decimal must be less than or equal to `max`
pub fn decimal_max(
    max: Decimal,
    message: &'static str,
) -> impl Fn(&str, &Option<Decimal>) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Option<Decimal>| match value {
        Some(amount) if *amount > max => Err(message.to_string()),
        _ => Ok(()),
    }
}

/// Validator: integer must be greater than or equal to `min`
pub fn int_min(
    min: i32,
    message: &'static str,
) -> impl Fn(&str, &Option<i32>) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Option<i32>| match value {
        Some(n) if *n < min => Err(message.to_string()),
        _ => Ok(()),
    }
}

/// Validator: integer must be less than or equal to `max`
pub fn int_max(
    max: i32,
    message: &'static str,
) -> impl Fn(&str, &Option<i32>) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Option<i32>| match value {
        Some(n) if *n > max => Err(message.to_string()),
        _ => Ok(()),
    }
}
