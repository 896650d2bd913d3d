//! Example transducers exercising every combinator.
//!
//! - [`light`]: mode-only light
//! - [`counting_light`]: light with extended data
//! - [`door`]: nesting a counting light
//! - [`barn`]: an array of counting lights behind one door
//! - [`gui`]: input synthesis
//!
//! [`rehearse_all`] runs the reference scenario for each of them.

pub mod barn;
pub mod counting_light;
pub mod door;
pub mod gui;
pub mod light;

use crate::builder::{BuildError, ScenarioBuilder};
use crate::core::Configuration;
use crate::rehearsal::{Mismatch, Suite};
use barn::Barn;
use counting_light::CountingLight;
use door::{Door, DoorInput, DoorMode};
use gui::{GuiInput, GuiMode, GuiOutput, Point};
use light::{Light, LightInput, LightMode, LightOutput};

/// The reference scenarios for every example transducer.
pub fn suite() -> Result<Suite, BuildError> {
    let light_scenario = ScenarioBuilder::<Light>::new()
        .named("light")
        .initial(light::initial())
        .inputs([
            LightInput::TurnOn,
            LightInput::TurnOff,
            LightInput::TurnOn,
            LightInput::TurnOff,
        ])
        .expect(
            Configuration::new(LightMode::Off, ()),
            vec![LightOutput::RingBell, LightOutput::RingBell],
        )
        .build()?;

    let counting_scenario = ScenarioBuilder::<CountingLight>::new()
        .named("counting light")
        .initial(counting_light::initial())
        .inputs([
            LightInput::TurnOn,
            LightInput::TurnOn,
            LightInput::TurnOff,
            LightInput::TurnOn,
        ])
        .expect(
            Configuration::new(LightMode::On, 2),
            vec![LightOutput::RingBell, LightOutput::RingBell],
        )
        .build()?;

    let door_scenario = ScenarioBuilder::<Door>::new()
        .named("door")
        .initial(door::initial())
        .inputs([
            DoorInput::Open,
            DoorInput::Light(LightInput::TurnOn),
            DoorInput::Close,
        ])
        .expect(
            Configuration::new(DoorMode::Closed, Configuration::new(LightMode::On, 1)),
            vec![LightOutput::RingBell],
        )
        .build()?;

    let barn_scenario = ScenarioBuilder::<Barn>::new()
        .named("barn")
        .initial(barn::initial(2))
        .inputs([
            DoorInput::Open,
            DoorInput::Light(LightInput::TurnOn),
            DoorInput::Close,
        ])
        .expect(
            Configuration::new(
                DoorMode::Closed,
                vec![Configuration::new(LightMode::On, 1); 2],
            ),
            vec![LightOutput::RingBell, LightOutput::RingBell],
        )
        .build()?;

    let gui_scenario = ScenarioBuilder::<gui::Gui>::new()
        .named("gui")
        .initial(gui::initial())
        .inputs([
            GuiInput::MousePress,
            GuiInput::MouseMove(10, 10),
            GuiInput::MouseRelease,
        ])
        .expect(
            Configuration::new(GuiMode::MouseUp, Point { x: 10, y: 10 }),
            vec![GuiOutput::ShowClick(0, 0), GuiOutput::ShowHand(10, 10)],
        )
        .build()?;

    Ok(Suite::new()
        .scenario(Light, light_scenario)
        .scenario(CountingLight, counting_scenario)
        .scenario(Door::new(), door_scenario)
        .scenario(Barn::new(), barn_scenario)
        .scenario(gui::gui(), gui_scenario))
}

/// Rehearse every reference scenario and return the mismatching pairs.
///
/// An empty result means every example transducer behaves as documented.
pub fn rehearse_all() -> Result<Vec<Mismatch>, BuildError> {
    Ok(suite()?.mismatches())
}
