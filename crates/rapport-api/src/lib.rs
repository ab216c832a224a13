//! # Rapport-API
//!
//! Request plumbing around the outreach generator.
//!
//! - `config` - layered configuration (defaults, TOML file, `RAPPORT__*` env vars)
//! - `request` - generate-message JSON bodies
//! - `handler` - request handling on top of the orchestrator
//! - `telemetry` - tracing subscriber setup
//!
//! Routing and transport belong to the hosting server.

pub mod config;
pub mod error;
pub mod handler;
pub mod request;
pub mod telemetry;

pub use crate::config::*;
pub use error::*;
pub use handler::*;
pub use request::*;
pub use telemetry::*;
