//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use derive_more::Deref;
use getset::CopyGetters;
use itertools::Itertools as _;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::util::escape_dollars;

/// Is an enumeration of the kinds of tokens a template is made of.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum TokenKind {
    /// Plain text, emitted unchanged.
    Literal,
    /// A `${name}` placeholder.
    Interpolation,
}

/// Is an error that is returned when a string cannot be parsed into a [`TokenKind`] in [`FromStr`]
/// trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of token kind.")]
pub struct TokenKindParseError;

impl FromStr for TokenKind {
    type Err = TokenKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_KIND_MAP: OnceLock<HashMap<&'static str, TokenKind>> = OnceLock::new();
        let map = STRING_KIND_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for kind in Self::iter() {
                map.insert(kind.as_str(), kind);
            }

            map
        });

        map.get(s).copied().ok_or(TokenKindParseError)
    }
}

impl TokenKind {
    /// Gets the string representation of the token kind as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Interpolation => "interpolation",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single piece of a template.
///
/// For [`TokenKind::Literal`] the value is the text with `$$` already collapsed to `$`. For
/// [`TokenKind::Interpolation`] it is the raw name found between `${` and `}`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters)]
pub struct Token {
    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    value: String,
}

impl Token {
    /// Creates a literal token.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Literal,
            value: value.into(),
        }
    }

    /// Creates an interpolation token.
    #[must_use]
    pub fn interpolation(name: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Interpolation,
            value: name.into(),
        }
    }

    /// Returns the text of the token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the token is plain text.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.kind == TokenKind::Literal
    }

    /// Whether the token is a placeholder.
    #[must_use]
    pub fn is_interpolation(&self) -> bool {
        self.kind == TokenKind::Interpolation
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Literal => f.write_str(&escape_dollars(&self.value)),
            TokenKind::Interpolation => write!(f, "${{{}}}", self.value),
        }
    }
}

/// Is the ordered list of [`Token`]s a template consists of.
///
/// This struct is the output of [`Tokenizer::parse`](super::tokenizer::Tokenizer::parse). It is
/// never empty and always ends with a literal token, which is empty when the template ends with a
/// placeholder.
///
/// Outside the tokenizer a list can only be built through [`TryFrom<Vec<Token>>`], which checks
/// that literals and interpolations alternate in the same way.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Token>", into = "Vec<Token>")
)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenList {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenList {
    pub(super) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().is_some_and(Token::is_literal));

        Self { tokens }
    }

    /// Iterates over the values of the literal tokens in order.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|token| token.is_literal())
            .map(Token::value)
    }

    /// Iterates over the names of the interpolation tokens in order.
    pub fn interpolations(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|token| token.is_interpolation())
            .map(Token::value)
    }

    /// Returns the distinct interpolation names in the order they first appear.
    #[must_use]
    pub fn interpolation_names(&self) -> Vec<&str> {
        self.interpolations().unique().collect()
    }

    /// Renders the tokens back into template syntax.
    ///
    /// Tokenizing the result yields an equal [`TokenList`]. Literal `$` characters are written
    /// as `$$`.
    #[must_use]
    pub fn to_template(&self) -> String {
        self.to_string()
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}

/// Is an error that is returned when a list of tokens could not have come out of the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum InvalidTokenList {
    /// The list has no tokens, not even the trailing literal.
    #[error("token list is empty.")]
    Empty,

    /// Literals must sit at even positions and interpolations at odd positions, ending with a
    /// literal.
    #[error("expected a {expected} token at position {index}.")]
    MisplacedToken {
        /// Position of the offending token.
        index: usize,
        /// Kind of token that belongs at that position.
        expected: TokenKind,
    },

    /// An interpolation token has an empty name.
    #[error("interpolation token at position {0} has an empty name.")]
    EmptyInterpolationName(usize),
}

impl TryFrom<Vec<Token>> for TokenList {
    type Error = InvalidTokenList;

    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        if tokens.is_empty() {
            return Err(InvalidTokenList::Empty);
        }

        // L I L ... I L
        let expected_kinds = [TokenKind::Literal, TokenKind::Interpolation]
            .into_iter()
            .cycle();
        for (index, (token, expected)) in tokens.iter().zip(expected_kinds).enumerate() {
            if token.kind != expected {
                return Err(InvalidTokenList::MisplacedToken { index, expected });
            }
            if token.is_interpolation() && token.value.is_empty() {
                return Err(InvalidTokenList::EmptyInterpolationName(index));
            }
        }

        if tokens.len() % 2 == 0 {
            return Err(InvalidTokenList::MisplacedToken {
                index: tokens.len(),
                expected: TokenKind::Literal,
            });
        }

        Ok(Self { tokens })
    }
}

impl From<TokenList> for Vec<Token> {
    fn from(list: TokenList) -> Self {
        list.tokens
    }
}

impl Display for TokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.tokens.iter().try_for_each(|token| write!(f, "{token}"))
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
