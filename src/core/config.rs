//! Configurations: a mode paired with its extended data.

use super::mode::Mode;
use crate::combinators::Lens;
use serde::{Deserialize, Serialize};

/// The complete state of a transducer instance.
///
/// Configurations are immutable values. The `with_*` methods return a new
/// configuration and leave the receiver untouched.
///
/// # Example
///
/// ```rust
/// use modal::core::Configuration;
/// use modal::machines::light::LightMode;
///
/// let off = Configuration::new(LightMode::Off, 0u32);
/// let on = off.with_mode(LightMode::On);
///
/// assert_eq!(off.mode, LightMode::Off);
/// assert_eq!(on.mode, LightMode::On);
/// assert_eq!(on.data, 0);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Configuration<M, D> {
    /// The finite control state
    pub mode: M,
    /// The extended state, possibly holding nested configurations
    pub data: D,
}

impl<M, D> Configuration<M, D> {
    pub fn new(mode: M, data: D) -> Self {
        Self { mode, data }
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    /// Same data, different mode.
    pub fn with_mode(&self, mode: M) -> Self
    where
        D: Clone,
    {
        Self {
            mode,
            data: self.data.clone(),
        }
    }

    /// Same mode, different data.
    pub fn with_data(&self, data: D) -> Self
    where
        M: Clone,
    {
        Self {
            mode: self.mode.clone(),
            data,
        }
    }

    /// Lens focusing on the data component.
    ///
    /// This is the embedding used by every outer transducer in this crate
    /// whose inner configuration is the whole of its data.
    pub fn data_lens() -> Lens<Self, D>
    where
        M: Clone,
    {
        Lens::new(Self::data, Self::with_data)
    }
}

/// Anything that exposes a current mode.
///
/// Decoration and input synthesis only need to read the mode, so they are
/// written against this trait rather than against `Configuration` directly.
pub trait Configured {
    type Mode: Mode;

    fn mode(&self) -> &Self::Mode;
}

impl<M: Mode, D> Configured for Configuration<M, D> {
    type Mode = M;

    fn mode(&self) -> &M {
        &self.mode
    }
}
