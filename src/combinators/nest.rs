//! Hierarchical embedding of an inner configuration in outer data.
//!
//! Nesting is a pattern rather than a single combinator. An outer transducer
//! decides from its own mode and input whether the inner transducer runs this
//! step and which input it receives. It then extracts the inner
//! configuration, runs the inner transition, embeds the result, and settles
//! its own mode and outputs. [`Lens`] packages the extract/run/embed part.
//!
//! When the outer transducer is in a mode where the inner one is inactive,
//! the inner configuration simply stays where it is inside the outer data.
//! Nothing resets it implicitly.

use crate::core::{Step, Transducer};

/// Pure get/put pair locating an inner configuration inside an outer one.
///
/// Lenses must satisfy the round-trip law: embedding what was just extracted,
/// with no change in between, yields a value equal to the original.
///
/// # Example
///
/// ```rust
/// use modal::combinators::Lens;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Room {
///     lamp: u32,
///     label: &'static str,
/// }
///
/// fn lamp(room: &Room) -> &u32 {
///     &room.lamp
/// }
///
/// fn with_lamp(room: &Room, lamp: u32) -> Room {
///     Room { lamp, ..room.clone() }
/// }
///
/// let lens = Lens::new(lamp, with_lamp);
/// let room = Room { lamp: 3, label: "hall" };
///
/// assert_eq!(lens.embed(&room, *lens.extract(&room)), room);
/// ```
pub struct Lens<O, I> {
    get: fn(&O) -> &I,
    put: fn(&O, I) -> O,
}

impl<O, I> Lens<O, I> {
    pub const fn new(get: fn(&O) -> &I, put: fn(&O, I) -> O) -> Self {
        Self { get, put }
    }

    /// Project the inner configuration out of `outer`.
    pub fn extract<'a>(&self, outer: &'a O) -> &'a I {
        (self.get)(outer)
    }

    /// Build a new outer value holding `inner`.
    pub fn embed(&self, outer: &O, inner: I) -> O {
        (self.put)(outer, inner)
    }

    /// Run `inner` against the embedded configuration and embed the result.
    ///
    /// The inner outputs are returned unchanged; an outer transducer that
    /// re-tags them into its own output type maps over them afterwards.
    pub fn step<T>(&self, inner: &T, outer: &O, input: &T::Input) -> Step<O, T::Output>
    where
        T: Transducer<Config = I>,
    {
        let (config, outputs) = inner.transition(self.extract(outer), input);
        (self.embed(outer, config), outputs)
    }
}

impl<O, I> Clone for Lens<O, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, I> Copy for Lens<O, I> {}
