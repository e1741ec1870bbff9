//! Utility functions for working with template text.

use std::borrow::Cow;

/// Escapes every `$` in a string as `$$`, so it reads back as literal text.
#[must_use]
pub fn escape_dollars(s: &str) -> Cow<'_, str> {
    if s.contains('$') {
        Cow::Owned(s.replace('$', "$$"))
    } else {
        Cow::Borrowed(s)
    }
}
