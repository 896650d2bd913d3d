//! A door with a counting light inside the room behind it.
//!
//! The light can only be reached while the door is open: light inputs are
//! ignored while it is closed, and the light keeps whatever state it had when
//! the door closed.

use super::counting_light::{self, CountingConfig, CountingLight};
use super::light::LightInput;
use crate::core::{Configuration, Step, Transducer};
use crate::mode_enum;
use serde::{Deserialize, Serialize};

mode_enum! {
    pub enum DoorMode {
        Closed,
        Opened,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum DoorInput {
    Open,
    Close,
    /// Input for the light behind the door.
    Light(LightInput),
}

pub type DoorConfig = Configuration<DoorMode, CountingConfig>;

/// Door nesting a light transducer `L` in its data.
///
/// `L` defaults to a plain [`CountingLight`]; any transducer over the same
/// configuration, such as a decorated counting light, can stand in.
#[derive(Clone, Debug)]
pub struct Door<L = CountingLight> {
    light: L,
}

impl Door {
    pub fn new() -> Self {
        Self {
            light: CountingLight,
        }
    }
}

impl Default for Door {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Door<L> {
    pub fn with_light(light: L) -> Self {
        Self { light }
    }
}

pub fn initial() -> DoorConfig {
    Configuration::new(DoorMode::Closed, counting_light::initial())
}

impl<L> Transducer for Door<L>
where
    L: Transducer<Config = CountingConfig, Input = LightInput>,
{
    type Config = DoorConfig;
    type Input = DoorInput;
    type Output = L::Output;

    fn transition(&self, config: &DoorConfig, input: &DoorInput) -> Step<DoorConfig, L::Output> {
        match (config.mode, input) {
            (DoorMode::Closed, DoorInput::Open) => (config.with_mode(DoorMode::Opened), Vec::new()),
            (DoorMode::Opened, DoorInput::Close) => (config.with_mode(DoorMode::Closed), Vec::new()),
            (DoorMode::Opened, DoorInput::Light(light)) => {
                DoorConfig::data_lens().step(&self.light, config, light)
            }
            (DoorMode::Closed, DoorInput::Close | DoorInput::Light(_))
            | (DoorMode::Opened, DoorInput::Open) => (config.clone(), Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DecorationBuilder;
    use crate::combinators::TransducerExt;
    use crate::core::{from_fn, Configured};
    use crate::machines::light::{LightMode, LightOutput};

    #[test]
    fn closed_door_ignores_light_input() {
        let (next, outputs) = Door::new().transition(&initial(), &DoorInput::Light(LightInput::TurnOn));

        assert_eq!(next, initial());
        assert!(outputs.is_empty());
    }

    #[test]
    fn open_door_forwards_light_input() {
        let open = initial().with_mode(DoorMode::Opened);
        let (next, outputs) = Door::new().transition(&open, &DoorInput::Light(LightInput::TurnOn));

        assert_eq!(next.mode(), &DoorMode::Opened);
        assert_eq!(next.data, Configuration::new(LightMode::On, 1));
        assert_eq!(outputs, vec![LightOutput::RingBell]);
    }

    #[test]
    fn closing_retains_inner_configuration() {
        let lit = Configuration::new(DoorMode::Opened, Configuration::new(LightMode::On, 3));
        let (closed, _) = Door::new().transition(&lit, &DoorInput::Close);
        let (reopened, _) = Door::new().transition(&closed, &DoorInput::Open);

        assert_eq!(closed.data, lit.data);
        assert_eq!(reopened, lit);
    }

    #[test]
    fn inner_decoration_surfaces_through_the_door() {
        let announce = DecorationBuilder::new()
            .on_entry(LightMode::On, vec![LightOutput::RingBell])
            .build()
            .unwrap();
        let door = Door::with_light(CountingLight.decorate(announce));
        let open = initial().with_mode(DoorMode::Opened);

        let (_, outputs) = door.transition(&open, &DoorInput::Light(LightInput::TurnOn));

        assert_eq!(outputs, vec![LightOutput::RingBell, LightOutput::RingBell]);
    }

    #[test]
    fn outer_decoration_does_not_reach_inner_light() {
        let door_only = DecorationBuilder::new()
            .on_entry(DoorMode::Opened, vec![LightOutput::RingBell])
            .build()
            .unwrap();
        let door = Door::new().decorate(door_only);
        let open = initial().with_mode(DoorMode::Opened);

        let (_, outputs) = door.transition(&open, &DoorInput::Light(LightInput::TurnOff));

        // Only the door's own entry row fires; the light contributes nothing.
        assert_eq!(outputs, vec![LightOutput::RingBell]);
    }

    #[test]
    fn decorations_at_both_levels_nest_in_one_step() {
        let ringing = from_fn(|config: &CountingConfig, input: &LightInput| {
            let (next, outputs) = CountingLight.transition(config, input);
            (next, outputs.into_iter().map(|_| "ring").collect::<Vec<_>>())
        });
        let light_rows = DecorationBuilder::new()
            .on_exit(LightMode::Off, vec!["light exit"])
            .on_entry(LightMode::On, vec!["light entry"])
            .build()
            .unwrap();
        let door_rows = DecorationBuilder::new()
            .on_exit(DoorMode::Opened, vec!["door exit"])
            .on_entry(DoorMode::Opened, vec!["door entry"])
            .build()
            .unwrap();
        let door = Door::with_light(ringing.decorate(light_rows)).decorate(door_rows);
        let open = initial().with_mode(DoorMode::Opened);

        let (next, outputs) = door.transition(&open, &DoorInput::Light(LightInput::TurnOn));

        assert_eq!(next.data, Configuration::new(LightMode::On, 1));
        assert_eq!(
            outputs,
            vec!["door exit", "light exit", "ring", "light entry", "door entry"]
        );
    }
}
