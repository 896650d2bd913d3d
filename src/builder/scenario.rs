//! Builder for rehearsal scenarios.

use crate::builder::error::BuildError;
use crate::core::Transducer;
use crate::rehearsal::Scenario;

/// Builder for constructing scenarios with a fluent API.
pub struct ScenarioBuilder<T: Transducer> {
    name: Option<String>,
    initial: Option<T::Config>,
    inputs: Vec<T::Input>,
    expected: Option<(T::Config, Vec<T::Output>)>,
}

impl<T: Transducer> ScenarioBuilder<T> {
    /// Create a new scenario builder.
    pub fn new() -> Self {
        Self {
            name: None,
            initial: None,
            inputs: Vec::new(),
            expected: None,
        }
    }

    /// Set the scenario name (required).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the starting configuration (required).
    pub fn initial(mut self, config: T::Config) -> Self {
        self.initial = Some(config);
        self
    }

    /// Append inputs to rehearse, in order.
    pub fn inputs(mut self, inputs: impl IntoIterator<Item = T::Input>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    /// Set the expected final configuration and outputs (required).
    pub fn expect(mut self, config: T::Config, outputs: Vec<T::Output>) -> Self {
        self.expected = Some((config, outputs));
        self
    }

    /// Build the scenario.
    pub fn build(self) -> Result<Scenario<T>, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let initial = self
            .initial
            .ok_or(BuildError::MissingInitialConfiguration)?;
        let (expected_config, expected_outputs) =
            self.expected.ok_or(BuildError::MissingExpectation)?;

        Ok(Scenario {
            name,
            initial,
            inputs: self.inputs,
            expected_config,
            expected_outputs,
        })
    }
}

impl<T: Transducer> Default for ScenarioBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::light::{self, Light, LightInput, LightOutput};

    #[test]
    fn builder_validates_name() {
        let result = ScenarioBuilder::<Light>::new()
            .initial(light::initial())
            .build();

        assert!(matches!(result, Err(BuildError::MissingName)));
    }

    #[test]
    fn builder_validates_initial_configuration() {
        let result = ScenarioBuilder::<Light>::new().named("no start").build();

        assert!(matches!(
            result,
            Err(BuildError::MissingInitialConfiguration)
        ));
    }

    #[test]
    fn builder_validates_expectation() {
        let result = ScenarioBuilder::<Light>::new()
            .named("no expectation")
            .initial(light::initial())
            .build();

        assert!(matches!(result, Err(BuildError::MissingExpectation)));
    }

    #[test]
    fn inputs_accumulate_in_order() {
        let scenario = ScenarioBuilder::<Light>::new()
            .named("two batches")
            .initial(light::initial())
            .inputs([LightInput::TurnOn])
            .inputs(vec![LightInput::TurnOff])
            .expect(light::initial(), vec![LightOutput::RingBell])
            .build()
            .unwrap();

        assert_eq!(scenario.inputs, vec![LightInput::TurnOn, LightInput::TurnOff]);
        assert!(scenario.check(&Light).is_ok());
    }
}
