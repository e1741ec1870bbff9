//! Module containing a ready-made location tag for templates read from source files.

use std::fmt::Display;

use getset::{CopyGetters, Getters};

/// Points at the place in a source file where a template was written.
///
/// The tokenizer never looks inside a location; it only hands it back in errors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Getters, CopyGetters)]
pub struct SourceLocation {
    /// Get the name of the file containing the template.
    #[get = "pub"]
    file: String,

    /// Get the line number of the template (starts at 1).
    #[get_copy = "pub"]
    line: usize,

    /// Get the column number of the template (starts at 1).
    #[get_copy = "pub"]
    column: usize,
}

impl SourceLocation {
    /// Create a new location in the given file.
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
