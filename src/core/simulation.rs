//! The simulation entity
//!
//! A `Simulation` is a loan simulation request as submitted by a client. It is
//! a plain data record: building or deserializing one never runs validation,
//! so a value may be invalid until [`Simulation::validate`] is called.
//!
//! Amounts are read from the literal JSON text (serde_json runs with
//! `arbitrary_precision`), so `40.0000000000000001` stays above 40 and `1.500`
//! keeps its scale. Amounts outside what a `Decimal` can hold exactly are
//! rejected as malformed payloads.

use rust_decimal::Decimal;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A loan simulation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Requested amount
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<Decimal>,

    /// Number of installments
    #[serde(default)]
    pub installments: Option<i32>,

    /// Borrower name
    #[serde(default)]
    pub name: Option<String>,

    /// Borrower CPF (Brazilian taxpayer id)
    #[serde(default)]
    pub cpf: Option<String>,

    /// Borrower email
    #[serde(default)]
    pub email: Option<String>,

    /// Whether credit insurance is requested
    #[serde(default)]
    pub insurance: bool,
}

impl Simulation {
    /// Start building a new simulation
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::default()
    }

    /// Get a builder seeded with this simulation's values
    pub fn to_builder(&self) -> SimulationBuilder {
        SimulationBuilder {
            inner: self.clone(),
        }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => parse_amount(&n.to_string())
            .map(Some)
            .map_err(D::Error::custom),
        Some(Value::String(s)) => parse_amount(&s).map(Some).map_err(D::Error::custom),
        Some(Value::Bool(b)) => Err(D::Error::invalid_type(
            Unexpected::Bool(b),
            &"a decimal number or string",
        )),
        Some(_) => Err(D::Error::invalid_type(
            Unexpected::Other("a JSON array or object"),
            &"a decimal number or string",
        )),
    }
}

/// Parse an amount without rounding
pub fn parse_amount(text: &str) -> Result<Decimal, String> {
    let text = text.trim();
    let parsed = match text.split_once(['e', 'E']) {
        // from_scientific rounds an over-long mantissa, so check it first
        Some((mantissa, _)) => {
            Decimal::from_str_exact(mantissa)
                .and_then(|_| Decimal::from_scientific(&text.to_ascii_lowercase()))
        }
        None => Decimal::from_str_exact(text),
    };
    parsed.map_err(|e| format!("invalid amount '{}': {}", text, e))
}

/// Staged constructor for [`Simulation`]
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use simulation::prelude::*;
///
/// let simulation = Simulation::builder()
///     .name("John")
///     .amount(Decimal::new(15, 0))
///     .installments(5)
///     .build();
///
/// assert!(simulation.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    inner: Simulation,
}

impl SimulationBuilder {
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn installments(mut self, installments: i32) -> Self {
        self.inner.installments = Some(installments);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.inner.cpf = Some(cpf.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.inner.email = Some(email.into());
        self
    }

    pub fn insurance(mut self, insurance: bool) -> Self {
        self.inner.insurance = insurance;
        self
    }

    /// Clear the amount (used to build incomplete requests)
    pub fn without_amount(mut self) -> Self {
        self.inner.amount = None;
        self
    }

    /// Clear the installments
    pub fn without_installments(mut self) -> Self {
        self.inner.installments = None;
        self
    }

    /// Finish building. Never validates.
    pub fn build(self) -> Simulation {
        self.inner
    }
}
