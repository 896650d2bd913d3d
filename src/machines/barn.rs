//! A barn door guarding a whole row of counting lights.
//!
//! While the barn is open every light receives the same light input.

use super::counting_light::{self, CountingConfig, CountingLight};
use super::door::{DoorInput, DoorMode};
use super::light::LightOutput;
use crate::combinators::All;
use crate::core::{Configuration, Step, Transducer};

pub type BarnConfig = Configuration<DoorMode, Vec<CountingConfig>>;

#[derive(Clone, Debug, Default)]
pub struct Barn {
    lights: All<CountingLight>,
}

impl Barn {
    pub fn new() -> Self {
        Self {
            lights: All::new(CountingLight),
        }
    }
}

/// A closed barn with `lights` unlit lights.
pub fn initial(lights: usize) -> BarnConfig {
    Configuration::new(DoorMode::Closed, vec![counting_light::initial(); lights])
}

impl Transducer for Barn {
    type Config = BarnConfig;
    type Input = DoorInput;
    type Output = LightOutput;

    fn transition(&self, config: &BarnConfig, input: &DoorInput) -> Step<BarnConfig, LightOutput> {
        match (config.mode, input) {
            (DoorMode::Closed, DoorInput::Open) => (config.with_mode(DoorMode::Opened), Vec::new()),
            (DoorMode::Opened, DoorInput::Close) => (config.with_mode(DoorMode::Closed), Vec::new()),
            (DoorMode::Opened, DoorInput::Light(light)) => {
                BarnConfig::data_lens().step(&self.lights, config, light)
            }
            (DoorMode::Closed, DoorInput::Close | DoorInput::Light(_))
            | (DoorMode::Opened, DoorInput::Open) => (config.clone(), Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::light::{LightInput, LightMode};

    #[test]
    fn every_light_switches_together() {
        let open = initial(3).with_mode(DoorMode::Opened);

        let (next, outputs) = Barn::new().transition(&open, &DoorInput::Light(LightInput::TurnOn));

        assert_eq!(next.data, vec![Configuration::new(LightMode::On, 1); 3]);
        assert_eq!(outputs, vec![LightOutput::RingBell; 3]);
    }

    #[test]
    fn lights_keep_their_positions() {
        let open = Configuration::new(
            DoorMode::Opened,
            vec![
                Configuration::new(LightMode::On, 4),
                Configuration::new(LightMode::Off, 0),
                Configuration::new(LightMode::Off, 9),
            ],
        );

        let (next, outputs) = Barn::new().transition(&open, &DoorInput::Light(LightInput::TurnOn));

        assert_eq!(
            next.data,
            vec![
                Configuration::new(LightMode::On, 4),
                Configuration::new(LightMode::On, 1),
                Configuration::new(LightMode::On, 10),
            ]
        );
        assert_eq!(outputs.len(), 2);
    }

    #[test]
    fn empty_barn_is_total() {
        let open = initial(0).with_mode(DoorMode::Opened);

        let (next, outputs) = Barn::new().transition(&open, &DoorInput::Light(LightInput::TurnOn));

        assert!(next.data.is_empty());
        assert!(outputs.is_empty());
    }
}
