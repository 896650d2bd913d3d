//! Build errors for decoration and scenario builders.

use thiserror::Error;

/// Errors that can occur when building decorations and scenarios.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Entry outputs for mode '{mode}' already registered. Merge them into one .on_entry() call")]
    DuplicateEntry { mode: String },

    #[error("Exit outputs for mode '{mode}' already registered. Merge them into one .on_exit() call")]
    DuplicateExit { mode: String },

    #[error("Scenario name not specified. Call .named(name) before .build()")]
    MissingName,

    #[error("Initial configuration not specified. Call .initial(config) before .build()")]
    MissingInitialConfiguration,

    #[error("Expected outcome not specified. Call .expect(config, outputs) before .build()")]
    MissingExpectation,
}
