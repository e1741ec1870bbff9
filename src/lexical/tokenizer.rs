//! Contains the [`Tokenizer`] struct.

use std::mem;

use crate::base::location::SourceLocation;

use super::{
    error::{ErrorKind, ParseError},
    token::{Token, TokenList},
};

/// Splits templates like `foo${bar}baz` into literal and interpolation tokens.
///
/// In the template, interpolation is written as `${name}` and a literal dollar sign as `$$`.
/// The tokenizer keeps an optional location of type `L` that it attaches to every error it
/// returns, without ever looking at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tokenizer<L = SourceLocation> {
    location: Option<L>,
}

impl<L> Default for Tokenizer<L> {
    fn default() -> Self {
        Self { location: None }
    }
}

impl<L> Tokenizer<L> {
    /// Creates a tokenizer that tags its errors with the given location, if any.
    #[must_use]
    pub fn new(location: Option<L>) -> Self {
        Self { location }
    }

    /// Creates a tokenizer that tags its errors with the given location.
    #[must_use]
    pub fn with_location(location: L) -> Self {
        Self::new(Some(location))
    }

    /// Get the location attached to errors, if any.
    #[must_use]
    pub fn location(&self) -> Option<&L> {
        self.location.as_ref()
    }
}

impl<L: Clone> Tokenizer<L> {
    /// Tokenizes the given template.
    ///
    /// The template is scanned once from left to right. Literal text accumulates until a `${`
    /// starts a placeholder, which flushes it as a literal token even when empty. The text left
    /// after the last placeholder always becomes the final literal token.
    ///
    /// # Errors
    /// - [`ErrorKind::UnterminatedEscape`] - A `$` is not followed by `$` or `{`.
    /// - [`ErrorKind::UnterminatedInterpolation`] - A `${` has no closing `}`.
    /// - [`ErrorKind::EmptyInterpolationName`] - A `${}` contains no name.
    #[tracing::instrument(level = "debug", skip_all, fields(template_length = template.len()))]
    pub fn parse(&self, template: &str) -> Result<TokenList, ParseError<L>> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut cursor = 0;

        while let Some(character) = template[cursor..].chars().next() {
            cursor += character.len_utf8();

            if character != '$' {
                literal.push(character);
                continue;
            }

            let Some(escaped) = template[cursor..].chars().next() else {
                return Err(self.error(ErrorKind::UnterminatedEscape, template));
            };
            cursor += escaped.len_utf8();

            match escaped {
                '$' => literal.push('$'),
                '{' => {
                    tokens.push(Token::literal(mem::take(&mut literal)));

                    let terminating = template[cursor..]
                        .find('}')
                        .map(|offset| cursor + offset)
                        .ok_or_else(|| {
                            self.error(ErrorKind::UnterminatedInterpolation, template)
                        })?;

                    if terminating == cursor {
                        return Err(self.error(ErrorKind::EmptyInterpolationName, template));
                    }

                    let name = &template[cursor..terminating];
                    tracing::trace!(interpolation = name, "found interpolation");

                    tokens.push(Token::interpolation(name));
                    cursor = terminating + 1;
                }
                _ => return Err(self.error(ErrorKind::UnterminatedEscape, template)),
            }
        }

        tokens.push(Token::literal(literal));

        Ok(TokenList::new(tokens))
    }

    fn error(&self, kind: ErrorKind, template: &str) -> ParseError<L> {
        tracing::debug!(%kind, "malformed template");

        ParseError::new(kind, template, self.location.clone())
    }
}
