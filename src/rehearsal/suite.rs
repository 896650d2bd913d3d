//! Heterogeneous collections of rehearsal scenarios.

use super::error::Mismatch;
use super::Scenario;
use crate::core::Transducer;
use std::fmt::Debug;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for a type-erased scenario check.
type Check = Box<dyn Fn() -> Result<(), Mismatch> + Send + Sync>;

/// Scenarios over any mix of transducer types.
///
/// Every scenario runs when the suite is evaluated; a failing scenario never
/// prevents later ones from running.
///
/// # Example
///
/// ```rust
/// use modal::builder::ScenarioBuilder;
/// use modal::machines::light::{self, Light, LightInput, LightOutput};
/// use modal::rehearsal::Suite;
///
/// let scenario = ScenarioBuilder::<Light>::new()
///     .named("one press")
///     .initial(light::initial())
///     .inputs(vec![LightInput::TurnOn])
///     .expect(light::initial(), vec![LightOutput::RingBell])
///     .build()
///     .unwrap();
///
/// let mismatches = Suite::new().scenario(Light, scenario).mismatches();
///
/// assert_eq!(mismatches.len(), 1);
/// assert_eq!(mismatches[0].scenario, "one press");
/// ```
#[derive(Default)]
pub struct Suite {
    checks: Vec<(String, Check)>,
}

impl Suite {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Register `scenario` to be rehearsed against `transducer`.
    pub fn scenario<T>(mut self, transducer: T, scenario: Scenario<T>) -> Self
    where
        T: Transducer + Send + Sync + 'static,
        T::Config: Clone + PartialEq + Debug + Send + Sync + 'static,
        T::Input: Send + Sync + 'static,
        T::Output: PartialEq + Debug + Send + Sync + 'static,
    {
        let name = scenario.name.clone();
        self.checks
            .push((name, Box::new(move || scenario.check(&transducer))));
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every scenario and return the failures in registration order.
    ///
    /// An empty result means every scenario matched.
    pub fn mismatches(&self) -> Vec<Mismatch> {
        let mismatches: Vec<Mismatch> = self
            .checks
            .iter()
            .filter_map(|(name, check)| match check() {
                Ok(()) => None,
                Err(mismatch) => {
                    tracing::debug!(
                        scenario = name.as_str(),
                        expected = mismatch.expected.as_str(),
                        actual = mismatch.actual.as_str(),
                        "rehearsal mismatch"
                    );
                    Some(mismatch)
                }
            })
            .collect();

        tracing::info!(
            scenarios = self.checks.len(),
            mismatches = mismatches.len(),
            "rehearsal suite finished"
        );
        mismatches
    }

    /// Run every scenario, accumulating ALL mismatches.
    ///
    /// Returns `Validation::Success(())` if every scenario matched, otherwise
    /// `Validation::Failure` with every mismatch.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<Mismatch>> {
        let checks: Vec<Validation<(), NonEmptyVec<Mismatch>>> = self
            .mismatches()
            .into_iter()
            .map(Validation::fail)
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}
