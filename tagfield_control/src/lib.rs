// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tagfield_control --heading-base-level=0

//! Tagfield Control: a headless, Kurbo-native tag input field.
//!
//! ## Overview
//!
//! This crate is the "tokens in a text box" control found in mail clients and
//! search bars, with the platform toolkit stripped away.
//! It owns the data model and the interaction rules; a host owns drawing and
//! real keyboard focus.
//! Feed keystrokes and taps in, read rectangles, colors, and text back out,
//! and subscribe to the events you care about.
//!
//! - Ordered, duplicate-free [`Tag`](crate::tag::Tag) collection.
//! - One [`Chip`](crate::chip::Chip) per tag, restyled and repositioned as the
//!   collection and style change.
//! - A single-line [`Editor`](crate::editor::Editor) for pending text, kept on
//!   the same row as the chips while it fits.
//! - Greedy line wrap via [`tagfield_wrap`], with the control's reported
//!   height tracking the wrapped extent.
//!
//! ## API overview
//!
//! - [`TagsField`](crate::field::TagsField): the composite control.
//! - [`Tag`](crate::tag::Tag): a committed text token.
//! - [`Chip`](crate::chip::Chip): display state for one tag.
//! - [`Editor`](crate::editor::Editor): the inline text field component.
//! - [`Hooks`](crate::events::Hooks): optional event channels.
//! - [`TextMeasure`](crate::measure::TextMeasure): host-provided text
//!   extents; [`MonoMeasure`](crate::measure::MonoMeasure) is the built-in
//!   approximation.
//!
//! Key operations:
//! - [`add_tag`](crate::field::TagsField::add_tag) / [`remove_tag_at`](crate::field::TagsField::remove_tag_at) for programmatic edits.
//! - [`insert_text`](crate::field::TagsField::insert_text), [`press_return`](crate::field::TagsField::press_return), and
//!   [`press_backspace`](crate::field::TagsField::press_backspace) for keystrokes.
//! - [`tap_chip`](crate::field::TagsField::tap_chip) / [`apply_chip_intent`](crate::field::TagsField::apply_chip_intent) for pointer input.
//! - [`height`](crate::field::TagsField::height), [`chip_rect`](crate::field::TagsField::chip_rect), and
//!   [`field_rect`](crate::field::TagsField::field_rect) for geometry readback.
//!
//! ## State machine
//!
//! Editor focus and chip selection are exclusive.
//! Selecting a chip ends editing; focusing the editor deselects every chip.
//! Backspace at an empty editor selects the last chip rather than deleting
//! it, so destroying a committed tag always takes a second, explicit step.
//! Read-only mode hides the editor, clears selection, and absorbs
//! interactive input while leaving programmatic mutation available.
//!
//! ## Layout
//!
//! Every mutation that can move geometry re-runs the wrap pass: chips flow
//! left to right, wrap when they would cross the right padding edge, and the
//! editor claims the remainder of the last row or wraps to its own slightly
//! indented row when that remainder is too small.
//! The reported height never drops below a floor that keeps the empty
//! control usable as a touch target.
//!
//! ## Events
//!
//! [`Hooks`](crate::events::Hooks) is a struct of optional `FnMut` channels
//! assigned directly, one per event: tag added/removed, text changed,
//! editing began/ended, height changed, plus two interrogative channels that
//! let the host veto a commit or opt into default return-key handling.
//!
//! ### Minimal usage
//!
//! ```
//! use tagfield_control::chip::ChipIntent;
//! use tagfield_control::field::TagsField;
//!
//! let mut field = TagsField::new(320.0);
//! field.add_tag("rust");
//! assert_eq!(field.height(), 45.0);
//!
//! // Type a second tag and commit it with the return key.
//! field.begin_editing();
//! field.insert_text("kurbo");
//! field.press_return();
//! assert_eq!(field.tags().len(), 2);
//!
//! // Backspace at an empty editor selects the last chip; nothing is deleted.
//! field.begin_editing();
//! field.press_backspace();
//! assert_eq!(field.selected_index(), Some(1));
//! assert_eq!(field.tags().len(), 2);
//!
//! // Committed tags leave through an explicit delete intent.
//! field.apply_chip_intent(1, ChipIntent::Delete { replacement: None });
//! assert_eq!(field.tags().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod chip;
pub mod editor;
pub mod events;
pub mod field;
pub mod measure;
pub mod style;
pub mod tag;
