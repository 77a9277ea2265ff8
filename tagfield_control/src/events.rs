// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The callback surface: one optional hook per named event channel.
//!
//! Delivery is synchronous and ordered, with no batching or deduplication.
//! The container finishes the triggering mutation and all of its index
//! bookkeeping before any hook runs, so a hook always observes consistent
//! state. Hooks receive data only; follow-up mutations are queued by the
//! host for after the triggering call returns.

use alloc::boxed::Box;
use core::fmt;

use crate::tag::Tag;

/// Optional callbacks, one per event.
///
/// Assign directly, the field is public on the container:
///
/// ```
/// use tagfield_control::field::TagsField;
///
/// let mut field = TagsField::new(300.0);
/// field.hooks.on_did_add_tag = Some(Box::new(|tag| {
///     println!("added {}", tag.text());
/// }));
/// field.add_tag("rust");
/// ```
#[derive(Default)]
pub struct Hooks {
    /// A tag was appended.
    pub on_did_add_tag: Option<Box<dyn FnMut(&Tag)>>,
    /// A tag was removed.
    pub on_did_remove_tag: Option<Box<dyn FnMut(&Tag)>>,
    /// The editor text changed: typed input, the default backspace edit, or
    /// the clears that follow a commit.
    pub on_did_change_text: Option<Box<dyn FnMut(&str)>>,
    /// The editor gained focus.
    pub on_did_begin_editing: Option<Box<dyn FnMut()>>,
    /// The editor lost focus.
    pub on_did_end_editing: Option<Box<dyn FnMut()>>,
    /// Consulted after a return-key commit. The result is handed back to the
    /// host as "also run the platform default return behavior".
    pub on_should_return: Option<Box<dyn FnMut() -> bool>>,
    /// Veto for a pending commit; `false` means "do not commit" and leaves
    /// the field text untouched.
    pub on_verify_tag: Option<Box<dyn FnMut(&str) -> bool>>,
    /// The content height changed. The value is the reported height,
    /// including the minimum-height floor.
    pub on_did_change_height_to: Option<Box<dyn FnMut(f64)>>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_did_add_tag", &self.on_did_add_tag.is_some())
            .field("on_did_remove_tag", &self.on_did_remove_tag.is_some())
            .field("on_did_change_text", &self.on_did_change_text.is_some())
            .field("on_did_begin_editing", &self.on_did_begin_editing.is_some())
            .field("on_did_end_editing", &self.on_did_end_editing.is_some())
            .field("on_should_return", &self.on_should_return.is_some())
            .field("on_verify_tag", &self.on_verify_tag.is_some())
            .field(
                "on_did_change_height_to",
                &self.on_did_change_height_to.is_some(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn debug_shows_which_channels_are_armed() {
        let hooks = Hooks {
            on_did_add_tag: Some(Box::new(|_| {})),
            ..Default::default()
        };
        let dump = format!("{hooks:?}");
        assert!(dump.contains("on_did_add_tag: true"));
        assert!(dump.contains("on_did_remove_tag: false"));
    }
}
