//! Rehearsal: driving a transducer over a fixed input sequence.
//!
//! [`rehearse`] is the canonical way to observe a transducer: it threads a
//! configuration through every input in order and concatenates the outputs
//! of each step. [`Scenario`] pairs a rehearsal with its expected result, and
//! [`Suite`] collects scenarios over transducers of different types and
//! reports every mismatch instead of stopping at the first.

pub mod error;
mod suite;

pub use error::Mismatch;
pub use suite::Suite;

use crate::core::{Step, Transducer};
use std::fmt::Debug;

/// Fold `transducer` over `inputs`, starting from `initial`.
///
/// Returns the final configuration and the outputs of every step, earlier
/// steps first. An empty input sequence returns `initial` and no outputs.
///
/// # Example
///
/// ```rust
/// use modal::machines::light::{self, Light, LightInput, LightMode, LightOutput};
/// use modal::rehearse;
///
/// let (config, outputs) = rehearse(
///     &Light,
///     light::initial(),
///     &[LightInput::TurnOn, LightInput::TurnOff],
/// );
///
/// assert_eq!(config.mode, LightMode::Off);
/// assert_eq!(outputs, vec![LightOutput::RingBell]);
/// ```
pub fn rehearse<T: Transducer>(
    transducer: &T,
    initial: T::Config,
    inputs: &[T::Input],
) -> Step<T::Config, T::Output> {
    inputs
        .iter()
        .enumerate()
        .fold((initial, Vec::new()), |(config, mut outputs), (step, input)| {
            let (next, produced) = transducer.transition(&config, input);
            tracing::trace!(step, produced = produced.len(), "rehearsal step");
            outputs.extend(produced);
            (next, outputs)
        })
}

/// A rehearsal together with its expected outcome.
///
/// Built with [`ScenarioBuilder`](crate::builder::ScenarioBuilder).
pub struct Scenario<T: Transducer> {
    pub name: String,
    pub initial: T::Config,
    pub inputs: Vec<T::Input>,
    pub expected_config: T::Config,
    pub expected_outputs: Vec<T::Output>,
}

impl<T> Scenario<T>
where
    T: Transducer,
    T::Config: Clone + PartialEq + Debug,
    T::Output: PartialEq + Debug,
{
    /// Rehearse against `transducer` and compare with the expectation.
    ///
    /// On mismatch the offending expected/actual pair is surfaced in the
    /// error; nothing is asserted or aborted here.
    pub fn check(&self, transducer: &T) -> Result<(), Mismatch> {
        let (config, outputs) = rehearse(transducer, self.initial.clone(), &self.inputs);

        if config == self.expected_config && outputs == self.expected_outputs {
            return Ok(());
        }

        Err(Mismatch {
            scenario: self.name.clone(),
            expected: format!("{:?}", (&self.expected_config, &self.expected_outputs)),
            actual: format!("{:?}", (&config, &outputs)),
        })
    }
}
