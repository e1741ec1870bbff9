//! Module containing structures and implementations for rendering diagnostics to the user.

use colored::Colorize;
use std::fmt::Display;

/// Represent the severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
}

/// Struct implementing [`Display`] that represents a diagnostic header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Message<T> {
    /// The severity of the message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T> Message<T> {
    /// Create a new message with the given severity and content to be displayed.
    pub fn new(severity: Severity, display: T) -> Self {
        Self { severity, display }
    }
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = match self.severity {
            Severity::Error => "[error]:".red().bold(),
        };

        write!(f, "{header} {}", self.display.to_string().bold())
    }
}

/// Structure implementing [`Display`] that points at the location a template came from.
///
/// Renders nothing when no location is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationDisplay<'a, L> {
    /// The location to point at.
    pub location: Option<&'a L>,
}

impl<'a, L> LocationDisplay<'a, L> {
    /// Create a new location pointer.
    pub fn new(location: Option<&'a L>) -> Self {
        Self { location }
    }
}

impl<L: Display> Display for LocationDisplay<'_, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(f, "\n {} {location}", "-->".blue().bold()),
            None => Ok(()),
        }
    }
}
