//! Input synthesis: rewriting raw inputs by mode before delegating.

use crate::core::{Configured, Step, Transducer};
use std::marker::PhantomData;

/// Transducer whose inputs pass through a mode-aware rewrite first.
pub struct Synthesize<T, R, Raw> {
    inner: T,
    rewrite: R,
    _raw: PhantomData<fn(&Raw)>,
}

/// Wrap `transducer` so that each raw input is first mapped by
/// `rewrite(current_mode, raw)`.
///
/// The rewrite sees only the current mode and the literal raw input. The
/// wrapped transducer never observes the raw input when a rewrite applies.
/// `Raw` may be the wrapped transducer's own input type (the rewrite then
/// returns a clone when nothing applies) or a separate, smaller type.
///
/// # Example
///
/// ```rust
/// use modal::combinators::synthesize_input;
/// use modal::core::Transducer;
/// use modal::machines::gui::{self, GuiInput, GuiMode, GuiOutput, Pointer};
///
/// let pointer = synthesize_input(Pointer, |mode: &GuiMode, raw: &GuiInput| match (mode, raw) {
///     (GuiMode::MouseDown, GuiInput::MouseMove(x, y)) => GuiInput::Drag(*x, *y),
///     _ => *raw,
/// });
///
/// let (pressed, _) = pointer.transition(&gui::initial(), &GuiInput::MousePress);
/// let (_, outputs) = pointer.transition(&pressed, &GuiInput::MouseMove(4, 2));
///
/// assert_eq!(outputs, vec![GuiOutput::ShowHand(4, 2)]);
/// ```
pub fn synthesize_input<T, R, Raw>(transducer: T, rewrite: R) -> Synthesize<T, R, Raw>
where
    T: Transducer,
    T::Config: Configured,
    R: Fn(&<T::Config as Configured>::Mode, &Raw) -> T::Input,
{
    Synthesize {
        inner: transducer,
        rewrite,
        _raw: PhantomData,
    }
}

impl<T, R, Raw> Transducer for Synthesize<T, R, Raw>
where
    T: Transducer,
    T::Config: Configured,
    R: Fn(&<T::Config as Configured>::Mode, &Raw) -> T::Input,
{
    type Config = T::Config;
    type Input = Raw;
    type Output = T::Output;

    fn transition(&self, config: &T::Config, raw: &Raw) -> Step<T::Config, T::Output> {
        let input = (self.rewrite)(config.mode(), raw);
        self.inner.transition(config, &input)
    }
}

impl<T: Clone, R: Clone, Raw> Clone for Synthesize<T, R, Raw> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            rewrite: self.rewrite.clone(),
            _raw: PhantomData,
        }
    }
}
