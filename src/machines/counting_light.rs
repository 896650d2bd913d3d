//! A light that counts how many times it has been switched on.

use super::light::{LightInput, LightMode, LightOutput};
use crate::core::{Configuration, Step, Transducer};

/// Light configuration whose data is the number of times it was lit.
///
/// The count saturates at `u32::MAX`.
pub type CountingConfig = Configuration<LightMode, u32>;

#[derive(Clone, Copy, Debug, Default)]
pub struct CountingLight;

pub fn initial() -> CountingConfig {
    Configuration::new(LightMode::Off, 0)
}

impl Transducer for CountingLight {
    type Config = CountingConfig;
    type Input = LightInput;
    type Output = LightOutput;

    fn transition(
        &self,
        config: &CountingConfig,
        input: &LightInput,
    ) -> Step<CountingConfig, LightOutput> {
        match (config.mode, *input) {
            (LightMode::Off, LightInput::TurnOn) => (
                Configuration::new(LightMode::On, config.data.saturating_add(1)),
                vec![LightOutput::RingBell],
            ),
            (LightMode::On, LightInput::TurnOff) => (config.with_mode(LightMode::Off), Vec::new()),
            (LightMode::Off, LightInput::TurnOff) | (LightMode::On, LightInput::TurnOn) => {
                (config.clone(), Vec::new())
            }
        }
    }
}
