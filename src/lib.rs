//! # Simulation API
//!
//! A small REST service that accepts loan simulation requests, checks them
//! against the acceptance rules and echoes them back.
//!
//! ## Features
//!
//! - **Explicit validation**: rules are pure functions returning every violation
//! - **Exact decimals**: amounts compare by value, so `1` and `1.000` are equal
//! - **Typed errors**: malformed bodies and rule violations are distinct errors
//! - **Configuration-Based**: listener settings loaded from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use simulation::prelude::*;
//!
//! let simulation = Simulation::builder()
//!     .name("John")
//!     .amount(Decimal::new(15, 0))
//!     .installments(5)
//!     .build();
//!
//! assert!(simulation.validate().is_empty());
//!
//! // Serve POST /simulation
//! ServerBuilder::new().serve().await?;
//! ```

pub mod config;
pub mod core;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, ErrorResponse, RequestError, Simulation, SimulationBuilder, SimulationError,
        SimulationResult, Validatable, Validated, ValidationError, Violation, validate,
    };

    // === Config ===
    pub use crate::config::{AppConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{ServerBuilder, build_simulation_routes};

    // === External dependencies ===
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
