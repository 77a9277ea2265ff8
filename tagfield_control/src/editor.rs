// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor slot: single-line text entry with a watched backspace.
//!
//! The editor adds exactly one thing to plain text-field behavior: its owner
//! observes every backward-delete *before* the default edit applies and
//! decides what an empty-field backspace means
//! ([`TagsField::press_backspace`](crate::field::TagsField::press_backspace)).
//! Everything else is ordinary state a host mirrors into its text widget.
//!
//! Mutation goes through the container; hosts read the editor via
//! [`TagsField::editor`](crate::field::TagsField::editor).

use alloc::string::{String, ToString};
use kurbo::Rect;

use crate::style::Color;

/// Advisory keyboard type, stored verbatim and never interpreted.
///
/// Hosts map it onto their platform keyboard traits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum KeyboardHint {
    /// The host's standard text keyboard.
    #[default]
    Standard,
    /// Email-address entry.
    EmailAddress,
    /// Numeric entry.
    NumberPad,
    /// URL entry.
    Url,
}

/// Fixed entry traits a host applies to its text widget.
///
/// Tag entry wants raw tokens, so correction and capitalization default off.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InputTraits {
    /// Whether the host should autocorrect.
    pub autocorrect: bool,
    /// Whether the host should autocapitalize.
    pub autocapitalize: bool,
}

impl Default for InputTraits {
    fn default() -> Self {
        Self {
            autocorrect: false,
            autocapitalize: false,
        }
    }
}

/// Single-line text state for the live entry slot.
#[derive(Clone, Debug)]
pub struct Editor {
    text: String,
    placeholder: String,
    enabled: bool,
    focused: bool,
    keyboard: KeyboardHint,
    traits: InputTraits,
    text_color: Option<Color>,
    rect: Rect,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// An empty, enabled, unfocused editor with the default placeholder.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: "Tags".to_string(),
            enabled: true,
            focused: false,
            keyboard: KeyboardHint::Standard,
            traits: InputTraits::default(),
            text_color: None,
            rect: Rect::ZERO,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholder the host draws while the control is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the editor accepts input. Read-only containers disable it.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the editor holds keyboard focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Advisory keyboard type.
    pub fn keyboard(&self) -> KeyboardHint {
        self.keyboard
    }

    /// Entry traits for the host text widget.
    pub fn traits(&self) -> InputTraits {
        self.traits
    }

    /// Editor text color; `None` inherits the host default.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// The rect assigned by the last layout pass; zero while hidden.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Sets the text programmatically, without a change signal.
    pub(crate) fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Appends typed input. Returns whether the text changed.
    pub(crate) fn insert(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        self.text.push_str(s);
        true
    }

    /// The default backward edit: drop the last character. Returns whether
    /// the text changed.
    pub(crate) fn delete_backward(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub(crate) fn set_placeholder(&mut self, text: &str) {
        self.placeholder.clear();
        self.placeholder.push_str(text);
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub(crate) fn set_keyboard(&mut self, keyboard: KeyboardHint) {
        self.keyboard = keyboard;
    }

    pub(crate) fn set_text_color(&mut self, color: Option<Color>) {
        self.text_color = color;
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}
