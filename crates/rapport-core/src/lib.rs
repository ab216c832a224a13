//! # Rapport-Core
//!
//! Core types, errors, and buyer-motivation classification for the Rapport
//! relationship-management outreach generator.

pub mod error;
pub mod motivation;
pub mod types;

pub use error::{Error, Result};
pub use motivation::*;
pub use types::*;
