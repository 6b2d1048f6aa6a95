//! Core types for the data object engine.
//!
//! This module provides foundational types used throughout the system:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for logging and mapping behaviour
//! - **IDs**: Typed identifiers carried inside data objects
//! - **Dates**: JSON timestamp values

mod config;
mod date;
mod errors;
mod ids;

pub use config::{Config, DataObjectsConfig, ObservabilityConfig};
pub use date::JsonDate;
pub use errors::{Error, Result};
pub use ids::DoId;
