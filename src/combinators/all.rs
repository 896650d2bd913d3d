//! Array-type orthogonal regions.

use crate::core::{Step, Transducer};

/// Apply one transducer to every configuration in `configs` with the same
/// input.
///
/// The result keeps index order: element `i` of the returned configurations
/// is the successor of `configs[i]`, and outputs are concatenated in index
/// order. An empty slice yields empty results.
///
/// # Example
///
/// ```rust
/// use modal::combinators::transduce_all;
/// use modal::core::from_fn;
///
/// let bump = from_fn(|n: &u32, by: &u32| (n + by, vec![*n]));
///
/// let (configs, outputs) = transduce_all(&bump, &10, &[1, 2, 3]);
///
/// assert_eq!(configs, vec![11, 12, 13]);
/// assert_eq!(outputs, vec![1, 2, 3]);
/// ```
pub fn transduce_all<T: Transducer>(
    transducer: &T,
    input: &T::Input,
    configs: &[T::Config],
) -> Step<Vec<T::Config>, T::Output> {
    let mut next = Vec::with_capacity(configs.len());
    let mut outputs = Vec::new();
    for config in configs {
        let (config, produced) = transducer.transition(config, input);
        next.push(config);
        outputs.extend(produced);
    }
    (next, outputs)
}

/// A homogeneous array of regions treated as a single transducer.
///
/// Built with [`TransducerExt::all`](super::TransducerExt::all). The
/// configuration is a `Vec` of the wrapped transducer's configurations.
#[derive(Clone, Debug, Default)]
pub struct All<T> {
    inner: T,
}

impl<T> All<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Transducer> Transducer for All<T> {
    type Config = Vec<T::Config>;
    type Input = T::Input;
    type Output = T::Output;

    fn transition(&self, config: &Self::Config, input: &T::Input) -> Step<Self::Config, T::Output> {
        transduce_all(&self.inner, input, config)
    }
}
