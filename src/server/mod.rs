//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers the simulation
//! routes, attaches request tracing and serves them with graceful shutdown.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use router::build_simulation_routes;
