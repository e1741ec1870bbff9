//! Contains the errors returned when a template is malformed.

use std::fmt::{Debug, Display};

use getset::{CopyGetters, Getters};

use crate::base::{
    location::SourceLocation,
    log::{LocationDisplay, Message, Severity},
};

/// Is an enumeration of the ways a template can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// A `$` is the last character, or is followed by something other than `$` or `{`.
    #[error("Expect $ or {{ after every $ in string")]
    UnterminatedEscape,

    /// A `${` is never closed by a `}`.
    #[error("Unterminated '${{'. Expected '}}'")]
    UnterminatedInterpolation,

    /// A `${}` names nothing.
    #[error("Expect non-empty interpolated value name")]
    EmptyInterpolationName,
}

/// Template could not be tokenized.
///
/// Carries the whole template for context and the location the tokenizer was created with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct ParseError<L = SourceLocation> {
    /// Get the kind of malformation that was found.
    #[get_copy = "pub"]
    kind: ErrorKind,

    /// Get the template that failed to tokenize.
    #[get = "pub"]
    template: String,

    location: Option<L>,
}

impl<L> ParseError<L> {
    pub(super) fn new(kind: ErrorKind, template: &str, location: Option<L>) -> Self {
        Self {
            kind,
            template: template.to_string(),
            location,
        }
    }

    /// Get the location tag the tokenizer was created with, if any.
    #[must_use]
    pub fn location(&self) -> Option<&L> {
        self.location.as_ref()
    }

    /// Dissolves the error into its location tag.
    #[must_use]
    pub fn into_location(self) -> Option<L> {
        self.location
    }
}

impl<L: Display> Display for ParseError<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("{}: {}", self.kind, self.template);

        write!(
            f,
            "{}{}",
            Message::new(Severity::Error, message),
            LocationDisplay::new(self.location.as_ref())
        )
    }
}

impl<L: Debug + Display> std::error::Error for ParseError<L> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
