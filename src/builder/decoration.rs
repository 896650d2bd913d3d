//! Builder for entry/exit decorations.

use crate::builder::error::BuildError;
use crate::combinators::{Decoration, OutputTable};
use crate::core::Mode;

/// Builder for constructing decorations with a fluent API.
///
/// Each mode may have at most one entry row and one exit row. Rows are
/// validated when `build()` is called so that every duplicate is reported
/// against the first offending mode.
pub struct DecorationBuilder<M: Mode, O> {
    entry: Vec<(M, Vec<O>)>,
    exit: Vec<(M, Vec<O>)>,
}

impl<M: Mode, O> DecorationBuilder<M, O> {
    /// Create a new decoration builder.
    pub fn new() -> Self {
        Self {
            entry: Vec::new(),
            exit: Vec::new(),
        }
    }

    /// Outputs emitted after any step that ends in `mode`.
    pub fn on_entry(mut self, mode: M, outputs: Vec<O>) -> Self {
        self.entry.push((mode, outputs));
        self
    }

    /// Outputs emitted before any step that starts in `mode`.
    pub fn on_exit(mut self, mode: M, outputs: Vec<O>) -> Self {
        self.exit.push((mode, outputs));
        self
    }

    /// Build the decoration.
    pub fn build(self) -> Result<Decoration<M, O>, BuildError> {
        let entry = table(self.entry, |mode| BuildError::DuplicateEntry { mode })?;
        let exit = table(self.exit, |mode| BuildError::DuplicateExit { mode })?;

        Ok(Decoration { entry, exit })
    }
}

fn table<M, O, E>(rows: Vec<(M, Vec<O>)>, duplicate: E) -> Result<OutputTable<M, O>, BuildError>
where
    M: Mode,
    E: Fn(String) -> BuildError,
{
    let mut table = OutputTable::new();
    for (mode, outputs) in rows {
        if table.contains(&mode) {
            return Err(duplicate(mode.name().to_string()));
        }
        table.push(mode, outputs);
    }
    Ok(table)
}

impl<M: Mode, O> Default for DecorationBuilder<M, O> {
    fn default() -> Self {
        Self::new()
    }
}
