//! A light switch that rings a bell whenever it is switched on.

use crate::core::{Configuration, Step, Transducer};
use crate::mode_enum;
use serde::{Deserialize, Serialize};

mode_enum! {
    /// Whether a light is lit.
    pub enum LightMode {
        Off,
        On,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LightInput {
    TurnOn,
    TurnOff,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LightOutput {
    RingBell,
}

pub type LightConfig = Configuration<LightMode, ()>;

/// Mode-only light: no extended data.
#[derive(Clone, Copy, Debug, Default)]
pub struct Light;

pub fn initial() -> LightConfig {
    Configuration::new(LightMode::Off, ())
}

impl Transducer for Light {
    type Config = LightConfig;
    type Input = LightInput;
    type Output = LightOutput;

    fn transition(&self, config: &LightConfig, input: &LightInput) -> Step<LightConfig, LightOutput> {
        match (config.mode, *input) {
            (LightMode::Off, LightInput::TurnOn) => {
                (config.with_mode(LightMode::On), vec![LightOutput::RingBell])
            }
            (LightMode::On, LightInput::TurnOff) => (config.with_mode(LightMode::Off), Vec::new()),
            (LightMode::Off, LightInput::TurnOff) | (LightMode::On, LightInput::TurnOn) => {
                (config.clone(), Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_on_rings_the_bell() {
        let (next, outputs) = Light.transition(&initial(), &LightInput::TurnOn);

        assert_eq!(next.mode, LightMode::On);
        assert_eq!(outputs, vec![LightOutput::RingBell]);
    }

    #[test]
    fn turning_off_is_silent() {
        let on = initial().with_mode(LightMode::On);
        let (next, outputs) = Light.transition(&on, &LightInput::TurnOff);

        assert_eq!(next, initial());
        assert!(outputs.is_empty());
    }

    #[test]
    fn irrelevant_inputs_change_nothing() {
        for mode in LightMode::ALL {
            let config = initial().with_mode(*mode);
            let redundant = match mode {
                LightMode::Off => LightInput::TurnOff,
                LightMode::On => LightInput::TurnOn,
            };

            assert_eq!(Light.transition(&config, &redundant), (config, vec![]));
        }
    }
}
