//! The `templatetoken` tokenizer.
//!
//! Splits templates like `foo${bar}baz` into a sequence of literal and interpolation tokens.
//! A literal dollar sign is written as `$$`.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;
pub mod util;

use base::location::SourceLocation;
use lexical::{token::TokenList, tokenizer::Tokenizer, ParseError};

/// Converts the given template to tokens without attaching a location to errors.
///
/// # Errors
/// - If the template is malformed, see [`ErrorKind`](lexical::ErrorKind).
pub fn tokenize(template: &str) -> Result<TokenList, ParseError> {
    Tokenizer::<SourceLocation>::default().parse(template)
}
