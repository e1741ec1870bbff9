//! The lexical module is responsible for converting template text into tokens.

pub mod token;

pub mod tokenizer;

mod error;
pub use error::{ErrorKind, ParseError};
