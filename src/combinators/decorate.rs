//! Entry/exit output injection.
//!
//! A decorated transducer emits the exit outputs of the mode it left before
//! the wrapped transition's outputs, and the entry outputs of the mode it
//! arrived in after them:
//!
//! ```text
//! exit(config.mode) ++ outputs ++ entry(next.mode)
//! ```
//!
//! The injection happens on every step, whether or not the mode changed.
//! Decoration is not idempotent: wrapping twice emits the table outputs
//! twice. Decorations nest like brackets, so the outermost wrapper's exit
//! outputs come first and its entry outputs come last.
//!
//! Only the wrapped level is decorated. An outer transducer that nests a
//! decorated inner one gets the inner table outputs; one that nests an
//! undecorated inner one does not, even if the outer level is decorated.

use crate::core::{Configured, Mode, Step, Transducer};

/// Mode-keyed lookup of outputs.
///
/// Modes without a row map to no outputs.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputTable<M, O> {
    rows: Vec<(M, Vec<O>)>,
}

impl<M: Mode, O> OutputTable<M, O> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Outputs registered for `mode`, or an empty slice.
    pub fn lookup(&self, mode: &M) -> &[O] {
        self.rows
            .iter()
            .find(|(row, _)| row == mode)
            .map(|(_, outputs)| outputs.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, mode: &M) -> bool {
        self.rows.iter().any(|(row, _)| row == mode)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn push(&mut self, mode: M, outputs: Vec<O>) {
        self.rows.push((mode, outputs));
    }
}

impl<M: Mode, O> Default for OutputTable<M, O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry and exit tables for one transducer type.
///
/// Built with [`DecorationBuilder`](crate::builder::DecorationBuilder).
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration<M, O> {
    pub(crate) entry: OutputTable<M, O>,
    pub(crate) exit: OutputTable<M, O>,
}

impl<M: Mode, O> Decoration<M, O> {
    /// A decoration that injects nothing.
    pub fn none() -> Self {
        Self {
            entry: OutputTable::new(),
            exit: OutputTable::new(),
        }
    }

    pub fn entry(&self) -> &OutputTable<M, O> {
        &self.entry
    }

    pub fn exit(&self) -> &OutputTable<M, O> {
        &self.exit
    }
}

/// Transducer wrapped with entry/exit output injection.
#[derive(Clone, Debug)]
pub struct EntryExit<T, M, O> {
    inner: T,
    decoration: Decoration<M, O>,
}

/// Wrap `transducer` so that `decoration`'s tables are applied on every
/// step.
///
/// # Example
///
/// ```rust
/// use modal::builder::DecorationBuilder;
/// use modal::combinators::add_entry_exit;
/// use modal::core::{Configuration, Transducer};
/// use modal::machines::light::{self, Light, LightInput, LightMode, LightOutput};
///
/// let decoration = DecorationBuilder::new()
///     .on_exit(LightMode::Off, vec![LightOutput::RingBell])
///     .build()
///     .unwrap();
/// let chiming = add_entry_exit(Light, decoration);
///
/// let (next, outputs) = chiming.transition(&light::initial(), &LightInput::TurnOn);
///
/// assert_eq!(next, Configuration::new(LightMode::On, ()));
/// assert_eq!(outputs, vec![LightOutput::RingBell, LightOutput::RingBell]);
/// ```
pub fn add_entry_exit<T, M, O>(transducer: T, decoration: Decoration<M, O>) -> EntryExit<T, M, O>
where
    T: Transducer<Output = O>,
    T::Config: Configured<Mode = M>,
    M: Mode,
    O: Clone,
{
    EntryExit {
        inner: transducer,
        decoration,
    }
}

impl<T, M, O> Transducer for EntryExit<T, M, O>
where
    T: Transducer<Output = O>,
    T::Config: Configured<Mode = M>,
    M: Mode,
    O: Clone,
{
    type Config = T::Config;
    type Input = T::Input;
    type Output = O;

    fn transition(&self, config: &T::Config, input: &T::Input) -> Step<T::Config, O> {
        let (next, outputs) = self.inner.transition(config, input);
        let exit = self.decoration.exit.lookup(config.mode());
        let entry = self.decoration.entry.lookup(next.mode());

        if !exit.is_empty() || !entry.is_empty() {
            tracing::trace!(
                from = config.mode().name(),
                to = next.mode().name(),
                exit = exit.len(),
                entry = entry.len(),
                "injecting entry/exit outputs"
            );
        }

        let mut decorated = Vec::with_capacity(exit.len() + outputs.len() + entry.len());
        decorated.extend_from_slice(exit);
        decorated.extend(outputs);
        decorated.extend_from_slice(entry);
        (next, decorated)
    }
}
