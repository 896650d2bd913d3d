//! A pointer tracker whose drag input is synthesized from raw mouse events.
//!
//! The raw event stream only knows presses, releases and moves. [`gui`]
//! rewrites a move that arrives while the button is held into a `Drag`, so
//! [`Pointer`] can react to dragging without keeping any history of its own.

use crate::combinators::{synthesize_input, Synthesize};
use crate::core::{Configuration, Step, Transducer};
use crate::mode_enum;
use serde::{Deserialize, Serialize};

mode_enum! {
    pub enum GuiMode {
        MouseUp,
        MouseDown,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GuiInput {
    MousePress,
    MouseRelease,
    MouseMove(i32, i32),
    /// Synthesized: a move while the button is held.
    Drag(i32, i32),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GuiOutput {
    ShowClick(i32, i32),
    ShowHand(i32, i32),
}

pub type GuiConfig = Configuration<GuiMode, Point>;

pub fn initial() -> GuiConfig {
    Configuration::new(GuiMode::MouseUp, Point::default())
}

/// Pointer state machine over synthesized input.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pointer;

impl Transducer for Pointer {
    type Config = GuiConfig;
    type Input = GuiInput;
    type Output = GuiOutput;

    fn transition(&self, config: &GuiConfig, input: &GuiInput) -> Step<GuiConfig, GuiOutput> {
        let Point { x, y } = config.data;
        match (config.mode, *input) {
            (GuiMode::MouseUp, GuiInput::MousePress) => (
                config.with_mode(GuiMode::MouseDown),
                vec![GuiOutput::ShowClick(x, y)],
            ),
            (GuiMode::MouseDown, GuiInput::MouseRelease) => {
                (config.with_mode(GuiMode::MouseUp), Vec::new())
            }
            (_, GuiInput::MouseMove(x, y)) => (config.with_data(Point { x, y }), Vec::new()),
            (GuiMode::MouseDown, GuiInput::Drag(x, y)) => (
                config.with_data(Point { x, y }),
                vec![GuiOutput::ShowHand(x, y)],
            ),
            (GuiMode::MouseUp, GuiInput::MouseRelease | GuiInput::Drag(..))
            | (GuiMode::MouseDown, GuiInput::MousePress) => (config.clone(), Vec::new()),
        }
    }
}

/// Turn a move while the button is held into a drag.
pub fn drag_while_pressed(mode: &GuiMode, raw: &GuiInput) -> GuiInput {
    match (mode, raw) {
        (GuiMode::MouseDown, GuiInput::MouseMove(x, y)) => GuiInput::Drag(*x, *y),
        _ => *raw,
    }
}

/// Mode-aware rewrite applied to raw GUI input.
pub type Rewrite = fn(&GuiMode, &GuiInput) -> GuiInput;

/// [`Pointer`] behind drag synthesis.
pub type Gui = Synthesize<Pointer, Rewrite, GuiInput>;

/// The complete GUI transducer.
pub fn gui() -> Gui {
    synthesize_input(Pointer, drag_while_pressed as Rewrite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_while_released_only_tracks_position() {
        let (next, outputs) = gui().transition(&initial(), &GuiInput::MouseMove(3, 4));

        assert_eq!(next, Configuration::new(GuiMode::MouseUp, Point { x: 3, y: 4 }));
        assert!(outputs.is_empty());
    }

    #[test]
    fn move_while_pressed_becomes_drag() {
        assert_eq!(
            drag_while_pressed(&GuiMode::MouseDown, &GuiInput::MouseMove(1, 2)),
            GuiInput::Drag(1, 2)
        );
        assert_eq!(
            drag_while_pressed(&GuiMode::MouseUp, &GuiInput::MouseMove(1, 2)),
            GuiInput::MouseMove(1, 2)
        );
    }

    #[test]
    fn unwrapped_pointer_never_shows_hand_for_raw_moves() {
        let pressed = initial().with_mode(GuiMode::MouseDown);

        let (_, raw) = Pointer.transition(&pressed, &GuiInput::MouseMove(5, 5));
        let (_, synthesized) = gui().transition(&pressed, &GuiInput::MouseMove(5, 5));

        assert!(raw.is_empty());
        assert_eq!(synthesized, vec![GuiOutput::ShowHand(5, 5)]);
    }

    #[test]
    fn press_shows_click_at_current_position() {
        let config = Configuration::new(GuiMode::MouseUp, Point { x: 7, y: 8 });

        let (next, outputs) = gui().transition(&config, &GuiInput::MousePress);

        assert_eq!(next.mode, GuiMode::MouseDown);
        assert_eq!(outputs, vec![GuiOutput::ShowClick(7, 8)]);
    }
}
