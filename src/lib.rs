//! Modal: hierarchical, purely functional transducers
//!
//! A transducer maps a configuration (a mode plus extended data) and an input
//! to a new configuration and an ordered list of outputs. Outputs describe
//! effects; they never perform them. Everything in this crate is a pure
//! function of its arguments, so transducers can be nested, run side by side,
//! decorated and rehearsed without any shared mutable state.
//!
//! # Core Concepts
//!
//! - **Transducer**: the `(config, input) -> (config', outputs)` contract
//! - **Combinators**: orthogonal regions, arrays of regions, nesting,
//!   entry/exit decoration and input synthesis
//! - **Rehearsal**: folding a transducer over a fixed input sequence
//!
//! # Example
//!
//! ```rust
//! use modal::combinators::TransducerExt;
//! use modal::core::Configuration;
//! use modal::machines::door::{self, Door, DoorInput, DoorMode};
//! use modal::machines::light::{LightInput, LightMode, LightOutput};
//!
//! let (config, outputs) = Door::new().rehearse(
//!     door::initial(),
//!     &[
//!         DoorInput::Open,
//!         DoorInput::Light(LightInput::TurnOn),
//!         DoorInput::Close,
//!     ],
//! );
//!
//! assert_eq!(
//!     config,
//!     Configuration::new(DoorMode::Closed, Configuration::new(LightMode::On, 1))
//! );
//! assert_eq!(outputs, vec![LightOutput::RingBell]);
//! ```

pub mod builder;
pub mod combinators;
pub mod core;
pub mod driver;
pub mod machines;
pub mod rehearsal;

// Re-export commonly used types
pub use crate::combinators::{
    add_entry_exit, combine, synthesize_input, transduce_all, Lens, TransducerExt,
};
pub use crate::core::{Configuration, Mode, Transducer};
pub use crate::rehearsal::rehearse;
