//! Composition algebra for transducers.
//!
//! Every combinator here is a pure function over its arguments and produces
//! a value that implements the same [`Transducer`] contract as its inputs,
//! so combinators compose freely:
//!
//! - [`combine`]: fixed-arity orthogonal regions under one input
//! - [`transduce_all`] / [`All`]: a homogeneous array of regions
//! - [`Lens`]: hierarchical embedding of an inner configuration
//! - [`add_entry_exit`]: mode-keyed entry/exit output injection
//! - [`synthesize_input`]: mode-aware input rewriting
//!
//! Output order is always deterministic and never deduplicated.

mod all;
mod combine;
mod decorate;
mod nest;
mod synthesize;

pub use all::{transduce_all, All};
pub use combine::{combine, Combine};
pub use decorate::{add_entry_exit, Decoration, EntryExit, OutputTable};
pub use nest::Lens;
pub use synthesize::{synthesize_input, Synthesize};

use crate::core::{Configured, Mode, Step, Transducer};
use crate::rehearsal;

/// Method forms of the combinators, available on every transducer.
///
/// # Example
///
/// ```rust
/// use modal::combinators::TransducerExt;
/// use modal::machines::counting_light::{self, CountingLight};
/// use modal::machines::light::{Light, LightInput, LightOutput};
///
/// let both = Light.combine(CountingLight);
/// let (_, outputs) = both.rehearse(
///     (modal::machines::light::initial(), counting_light::initial()),
///     &[LightInput::TurnOn],
/// );
///
/// assert_eq!(outputs, vec![LightOutput::RingBell, LightOutput::RingBell]);
/// ```
pub trait TransducerExt: Transducer + Sized {
    fn combine<B>(self, other: B) -> Combine<Self, B>
    where
        B: Transducer<Input = Self::Input, Output = Self::Output>,
    {
        combine(self, other)
    }

    fn all(self) -> All<Self> {
        All::new(self)
    }

    fn decorate<M>(self, decoration: Decoration<M, Self::Output>) -> EntryExit<Self, M, Self::Output>
    where
        Self::Config: Configured<Mode = M>,
        Self::Output: Clone,
        M: Mode,
    {
        add_entry_exit(self, decoration)
    }

    fn synthesize<R, Raw>(self, rewrite: R) -> Synthesize<Self, R, Raw>
    where
        Self::Config: Configured,
        R: Fn(&<Self::Config as Configured>::Mode, &Raw) -> Self::Input,
    {
        synthesize_input(self, rewrite)
    }

    fn rehearse(&self, initial: Self::Config, inputs: &[Self::Input]) -> Step<Self::Config, Self::Output> {
        rehearsal::rehearse(self, initial, inputs)
    }
}

impl<T: Transducer> TransducerExt for T {}
