//! Builder API for ergonomic decoration and scenario construction.
//!
//! This module provides fluent builders and the `mode_enum!` macro for
//! declaring transducer pieces with minimal boilerplate while keeping every
//! validation failure a typed [`BuildError`].

pub mod decoration;
pub mod error;
pub mod macros;
pub mod scenario;

pub use decoration::DecorationBuilder;
pub use error::BuildError;
pub use scenario::ScenarioBuilder;
