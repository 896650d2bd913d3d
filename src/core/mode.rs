//! Core Mode trait for transducer control states.
//!
//! Every transducer's configuration carries a mode drawn from a small, closed
//! enumeration. The trait provides pure methods for inspecting it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the finite control-state component of a configuration.
///
/// All methods are pure. Modes are immutable values; a transition that
/// changes mode builds a new configuration rather than mutating one.
///
/// # Required Traits
///
/// - `Clone`: Modes are copied into every successor configuration
/// - `PartialEq`: Entry/exit tables are keyed by mode equality
/// - `Debug`: Rehearsal mismatches render configurations for diagnostics
/// - `Serialize` + `Deserialize`: Drivers may persist or transmit modes
///
/// # Example
///
/// ```rust
/// use modal::core::Mode;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ValveMode {
///     Shut,
///     Flowing,
/// }
///
/// impl Mode for ValveMode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Shut => "Shut",
///             Self::Flowing => "Flowing",
///         }
///     }
/// }
///
/// assert_eq!(ValveMode::Flowing.name(), "Flowing");
/// ```
pub trait Mode:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the mode's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestMode {
        Idle,
        Armed,
        Tripped,
    }

    impl Mode for TestMode {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Armed => "Armed",
                Self::Tripped => "Tripped",
            }
        }
    }

    #[test]
    fn mode_name_returns_correct_value() {
        assert_eq!(TestMode::Idle.name(), "Idle");
        assert_eq!(TestMode::Armed.name(), "Armed");
        assert_eq!(TestMode::Tripped.name(), "Tripped");
    }

    #[test]
    fn mode_serializes_correctly() {
        let mode = TestMode::Armed;
        let json = serde_json::to_string(&mode).unwrap();
        let deserialized: TestMode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, deserialized);
    }

    #[test]
    fn mode_is_comparable() {
        assert_eq!(TestMode::Armed, TestMode::Armed.clone());
        assert_ne!(TestMode::Armed, TestMode::Tripped);
    }
}
