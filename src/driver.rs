//! Driver loop connecting a transducer to an input source and output sink.
//!
//! The core never performs effects. A driver pulls inputs one at a time,
//! steps the transducer, and hands each step's outputs to an [`OutputSink`]
//! in sequence order. Sinks decide what an output means; a sink that does
//! not recognise an output may ignore it or fail.

use crate::core::Transducer;
use std::convert::Infallible;
use std::fmt::Debug;
use thiserror::Error;

/// Consumer of outputs, executing them in the order given.
pub trait OutputSink<O> {
    type Error: std::error::Error + 'static;

    fn execute(&mut self, output: &O) -> Result<(), Self::Error>;
}

/// Recording sink: outputs are appended in order and never refused.
impl<O: Clone> OutputSink<O> for Vec<O> {
    type Error = Infallible;

    fn execute(&mut self, output: &O) -> Result<(), Infallible> {
        self.push(output.clone());
        Ok(())
    }
}

/// Errors that can occur while driving a transducer.
#[derive(Debug, Error)]
pub enum DriveError<C: Debug, E: std::error::Error + 'static> {
    /// `config` is the configuration the failing step started from.
    #[error("Sink refused output {index} of step {step}")]
    Sink {
        step: usize,
        index: usize,
        config: C,
        #[source]
        source: E,
    },
}

/// Step `transducer` through `inputs`, executing outputs on `sink`.
///
/// Returns the final configuration. When the sink refuses an output, driving
/// stops and the remaining outputs of that step are not executed; the error
/// carries the last committed configuration so driving can resume from it.
///
/// # Example
///
/// ```rust
/// use modal::driver::drive;
/// use modal::machines::light::{self, Light, LightInput, LightMode, LightOutput};
///
/// let mut executed = Vec::new();
/// let config = drive(&Light, light::initial(), [LightInput::TurnOn], &mut executed).unwrap();
///
/// assert_eq!(config.mode, LightMode::On);
/// assert_eq!(executed, vec![LightOutput::RingBell]);
/// ```
pub fn drive<T, S, K>(
    transducer: &T,
    initial: T::Config,
    inputs: S,
    sink: &mut K,
) -> Result<T::Config, DriveError<T::Config, K::Error>>
where
    T: Transducer,
    T::Config: Debug,
    S: IntoIterator<Item = T::Input>,
    K: OutputSink<T::Output>,
{
    let mut config = initial;
    for (step, input) in inputs.into_iter().enumerate() {
        let (next, outputs) = transducer.transition(&config, &input);
        tracing::debug!(step, outputs = outputs.len(), "driver step");

        for (index, output) in outputs.iter().enumerate() {
            if let Err(source) = sink.execute(output) {
                return Err(DriveError::Sink {
                    step,
                    index,
                    config,
                    source,
                });
            }
        }
        config = next;
    }
    Ok(config)
}
