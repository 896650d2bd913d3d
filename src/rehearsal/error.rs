//! Rehearsal error types.

use thiserror::Error;

/// A rehearsal whose final configuration or outputs differed from the
/// expectation.
///
/// Both pairs are carried in their `Debug` rendering so that mismatches from
/// transducers of different types can be collected together.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Rehearsal '{scenario}' mismatched: expected {expected}, got {actual}")]
pub struct Mismatch {
    /// Name of the scenario that failed
    pub scenario: String,
    /// Expected `(configuration, outputs)` pair
    pub expected: String,
    /// Actual `(configuration, outputs)` pair
    pub actual: String,
}
