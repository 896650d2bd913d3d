//! Fixed-arity orthogonal regions.

use crate::core::{Step, Transducer};

/// Two transducers driven by the same input, side by side.
///
/// Built with [`combine`] or [`TransducerExt::combine`](super::TransducerExt::combine).
#[derive(Clone, Debug)]
pub struct Combine<A, B> {
    left: A,
    right: B,
}

/// Run `left` and `right` as independent regions under one input.
///
/// The combined configuration is `(left, right)`. Each step's outputs are the
/// left region's outputs followed immediately by the right region's. Neither
/// region observes the other's configuration. More than two regions nest:
/// `combine(combine(a, b), c)` keeps the same left-to-right order.
///
/// # Example
///
/// ```rust
/// use modal::combinators::combine;
/// use modal::core::{from_fn, Transducer};
///
/// let left = from_fn(|n: &u32, _: &()| (n + 1, vec!["left"]));
/// let right = from_fn(|s: &bool, _: &()| (!s, vec!["right"]));
///
/// let both = combine(left, right);
/// let (config, outputs) = both.transition(&(0, false), &());
///
/// assert_eq!(config, (1, true));
/// assert_eq!(outputs, vec!["left", "right"]);
/// ```
pub fn combine<A, B>(left: A, right: B) -> Combine<A, B>
where
    A: Transducer,
    B: Transducer<Input = A::Input, Output = A::Output>,
{
    Combine { left, right }
}

impl<A, B> Transducer for Combine<A, B>
where
    A: Transducer,
    B: Transducer<Input = A::Input, Output = A::Output>,
{
    type Config = (A::Config, B::Config);
    type Input = A::Input;
    type Output = A::Output;

    fn transition(&self, config: &Self::Config, input: &A::Input) -> Step<Self::Config, A::Output> {
        let (left, right) = config;
        let (left, mut outputs) = self.left.transition(left, input);
        let (right, right_outputs) = self.right.transition(right, input);
        outputs.extend(right_outputs);
        ((left, right), outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::from_fn;

    #[test]
    fn both_regions_receive_the_same_input() {
        let add = from_fn(|n: &i32, d: &i32| (n + d, Vec::<i32>::new()));
        let sub = from_fn(|n: &i32, d: &i32| (n - d, Vec::<i32>::new()));

        let (config, _) = combine(add, sub).transition(&(10, 10), &3);

        assert_eq!(config, (13, 7));
    }

    #[test]
    fn left_outputs_precede_right_outputs() {
        let left = from_fn(|_: &(), _: &()| ((), vec![1, 2]));
        let right = from_fn(|_: &(), _: &()| ((), vec![3]));

        let (_, outputs) = combine(left, right).transition(&((), ()), &());

        assert_eq!(outputs, vec![1, 2, 3]);
    }

    #[test]
    fn three_regions_nest_left_to_right() {
        let tag = |label: char| from_fn(move |_: &(), _: &()| ((), vec![label]));

        let nested = combine(combine(tag('a'), tag('b')), tag('c'));
        let (_, outputs) = nested.transition(&(((), ()), ()), &());

        assert_eq!(outputs, vec!['a', 'b', 'c']);
    }

    #[test]
    fn duplicate_outputs_are_kept() {
        let bell = from_fn(|_: &(), _: &()| ((), vec!["bell"]));

        let (_, outputs) = combine(&bell, &bell).transition(&((), ()), &());

        assert_eq!(outputs, vec!["bell", "bell"]);
    }
}
