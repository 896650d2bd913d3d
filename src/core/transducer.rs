//! The transducer contract.
//!
//! A transducer is a total, pure function from a configuration and an input
//! to a successor configuration and an ordered sequence of outputs.

use std::marker::PhantomData;

/// Result of a single transition: the successor configuration and the
/// outputs it produced, in effect order.
pub type Step<C, O> = (C, Vec<O>);

/// Pure transition function over a configuration type.
///
/// Implementations must be total: every reachable `(mode, input)` pair has a
/// defined result. Inputs that do not concern the current mode return the
/// configuration unchanged with no outputs.
///
/// # Example
///
/// ```rust
/// use modal::core::{Configuration, Step, Transducer};
/// use modal::mode_enum;
///
/// mode_enum! {
///     pub enum Latch {
///         Open,
///         Locked,
///     }
/// }
///
/// struct Padlock;
///
/// impl Transducer for Padlock {
///     type Config = Configuration<Latch, ()>;
///     type Input = ();
///     type Output = &'static str;
///
///     fn transition(&self, config: &Self::Config, _input: &()) -> Step<Self::Config, &'static str> {
///         match config.mode {
///             Latch::Open => (config.with_mode(Latch::Locked), vec!["click"]),
///             Latch::Locked => (config.clone(), Vec::new()),
///         }
///     }
/// }
///
/// let (next, outputs) = Padlock.transition(&Configuration::new(Latch::Open, ()), &());
/// assert_eq!(next.mode, Latch::Locked);
/// assert_eq!(outputs, vec!["click"]);
/// ```
pub trait Transducer {
    type Config;
    type Input;
    type Output;

    fn transition(
        &self,
        config: &Self::Config,
        input: &Self::Input,
    ) -> Step<Self::Config, Self::Output>;
}

impl<T: Transducer + ?Sized> Transducer for &T {
    type Config = T::Config;
    type Input = T::Input;
    type Output = T::Output;

    fn transition(&self, config: &T::Config, input: &T::Input) -> Step<T::Config, T::Output> {
        (**self).transition(config, input)
    }
}

/// Transducer backed by a plain function or closure.
///
/// Built with [`from_fn`].
pub struct FromFn<F, C, I, O> {
    f: F,
    _phantom: PhantomData<fn(&C, &I) -> Step<C, O>>,
}

/// Adapt a closure into a [`Transducer`].
///
/// # Example
///
/// ```rust
/// use modal::core::{from_fn, Transducer};
///
/// let counter = from_fn(|count: &u32, step: &u32| (count + step, vec![*count]));
///
/// assert_eq!(counter.transition(&1, &2), (3, vec![1]));
/// ```
pub fn from_fn<C, I, O, F>(f: F) -> FromFn<F, C, I, O>
where
    F: Fn(&C, &I) -> Step<C, O>,
{
    FromFn {
        f,
        _phantom: PhantomData,
    }
}

impl<F, C, I, O> Transducer for FromFn<F, C, I, O>
where
    F: Fn(&C, &I) -> Step<C, O>,
{
    type Config = C;
    type Input = I;
    type Output = O;

    fn transition(&self, config: &C, input: &I) -> Step<C, O> {
        (self.f)(config, input)
    }
}

impl<F: Clone, C, I, O> Clone for FromFn<F, C, I, O> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_delegates_to_closure() {
        let doubler = from_fn(|n: &i32, _: &()| (n * 2, vec![*n]));

        assert_eq!(doubler.transition(&4, &()), (8, vec![4]));
    }

    #[test]
    fn transition_is_deterministic() {
        let toggle = from_fn(|on: &bool, _: &()| (!on, vec![*on]));

        let first = toggle.transition(&false, &());
        let second = toggle.transition(&false, &());

        assert_eq!(first, second);
    }

    #[test]
    fn references_are_transducers() {
        fn run<T: Transducer<Config = u8, Input = u8, Output = u8>>(t: T) -> Step<u8, u8> {
            t.transition(&1, &2)
        }

        let adder = from_fn(|a: &u8, b: &u8| (a + b, Vec::new()));
        assert_eq!(run(&adder), (3, vec![]));
        assert_eq!(run(&&adder), (3, vec![]));
    }
}
