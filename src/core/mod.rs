//! Core transducer types and contract.
//!
//! This module contains the pure functional core every combinator builds on:
//! - Mode definitions via the `Mode` trait
//! - Configurations pairing a mode with extended data
//! - The `Transducer` contract itself
//!
//! All logic in this module is pure (no side effects).

mod config;
mod mode;
mod transducer;

pub use config::{Configuration, Configured};
pub use mode::Mode;
pub use transducer::{from_fn, FromFn, Step, Transducer};
