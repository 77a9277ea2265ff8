// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tag value: an immutable text token confirmed by the user.

use alloc::string::String;

/// An immutable text token.
///
/// Identity is the text and nothing else: equality and hashing derive solely
/// from it. The type stores whatever it is given; trimming and the non-empty
/// rule live in [`TagsField`](crate::field::TagsField), which trims before
/// committing and never commits whitespace-only text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Tag {
    text: String,
}

impl Tag {
    /// Creates a tag from raw text, stored as-is.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The tag's text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Tag {
    fn from(text: String) -> Self {
        Self { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_text_only() {
        assert_eq!(Tag::new("alpha"), Tag::from("alpha"));
        assert_ne!(Tag::new("alpha"), Tag::new("beta"));
    }

    #[test]
    fn stores_text_verbatim() {
        let tag = Tag::new("  spaced  ");
        assert_eq!(tag.text(), "  spaced  ");
    }
}
