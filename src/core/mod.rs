//! Core module containing the simulation entity, its rules and errors

pub mod error;
pub mod simulation;
pub mod validation;

pub use error::{
    ConfigError, ErrorResponse, RequestError, SimulationError, SimulationResult, ValidationError,
};
pub use simulation::{Simulation, SimulationBuilder};
pub use validation::{Validatable, Validated, Violation, validate};
