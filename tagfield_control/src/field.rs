// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tags field: ordered tags, their chips, the editor, layout, and events.
//!
//! ## Ownership
//!
//! [`TagsField`] owns everything: the ordered tag collection, the chip per
//! tag at the same index, the editor, the layout configuration, and the
//! [`Hooks`] table. Hosts never mutate those parts directly; they drive the
//! control through its operations and read geometry and colors back out.
//!
//! ## State machine
//!
//! Three composable pieces of state: the [`EDITING`](FieldFlags::EDITING)
//! and [`READ_ONLY`](FieldFlags::READ_ONLY) flags plus the index of the
//! selected chip, if any. Editor focus and chip selection are exclusive:
//! selecting a chip ends editing, focusing the editor clears selection.
//!
//! ## Layout
//!
//! Every mutation that can move geometry re-runs the wrap pass
//! ([`tagfield_wrap::solver::solve`]) and fires
//! [`on_did_change_height_to`](Hooks::on_did_change_height_to) when the
//! content height changed. The reported height never drops below
//! [`MIN_REPORTED_HEIGHT`].

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use bitflags::bitflags;
use kurbo::{Insets, Rect, Size};
use tagfield_wrap::solver::solve;
use tagfield_wrap::types::{FieldMode, WrapMetrics};

use crate::chip::{Chip, ChipIntent};
use crate::editor::{Editor, KeyboardHint};
use crate::events::Hooks;
use crate::measure::{MonoMeasure, TextMeasure};
use crate::style::{Color, FieldStyle, Font};
use crate::tag::Tag;

/// Reported height never drops below this. Keeps the empty control at a
/// comfortable touch-target size.
pub const MIN_REPORTED_HEIGHT: f64 = 45.0;

bitflags! {
    /// Composable control state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// The editor holds keyboard focus.
        const EDITING   = 0b0000_0001;
        /// The control rejects interactive input and hides the editor.
        const READ_ONLY = 0b0000_0010;
    }
}

/// The composite tag-input control.
///
/// Headless: feed input events in ([`insert_text`](Self::insert_text),
/// [`press_backspace`](Self::press_backspace),
/// [`press_return`](Self::press_return), [`tap_chip`](Self::tap_chip)),
/// read rects, colors, and text back out, subscribe to [`Hooks`].
#[derive(Debug)]
pub struct TagsField {
    tags: Vec<Tag>,
    chips: Vec<Chip>,
    editor: Editor,
    /// Event subscriptions; assign channels directly.
    pub hooks: Hooks,
    style: FieldStyle,
    metrics: WrapMetrics,
    measure: Box<dyn TextMeasure>,
    width: f64,
    flags: FieldFlags,
    selected: Option<usize>,
    content_height: f64,
}

impl TagsField {
    /// A control `width` points wide with the default style and metrics.
    pub fn new(width: f64) -> Self {
        Self::with_style(width, FieldStyle::default())
    }

    /// A control with an explicit style.
    pub fn with_style(width: f64, style: FieldStyle) -> Self {
        let metrics = WrapMetrics::default();
        let mut editor = Editor::new();
        editor.set_text_color(style.field_text_color);
        let mut field = Self {
            tags: Vec::new(),
            chips: Vec::new(),
            editor,
            hooks: Hooks::default(),
            style,
            metrics,
            measure: Box::new(MonoMeasure),
            width,
            flags: FieldFlags::empty(),
            selected: None,
            content_height: metrics.row_height,
        };
        field.reposition();
        field
    }

    // --- tag collection ---

    /// Appends a tag unless an equal one already exists.
    ///
    /// On success the editor text clears,
    /// [`on_did_add_tag`](Hooks::on_did_add_tag) and then
    /// [`on_did_change_text`](Hooks::on_did_change_text) fire, and layout
    /// re-runs. A duplicate is a silent no-op. Returns whether it was added.
    pub fn add_tag(&mut self, tag: impl Into<Tag>) -> bool {
        let tag = tag.into();
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag.clone());
        self.chips.push(Chip::new(tag.text(), &self.style));
        self.editor.set_text("");
        if let Some(hook) = self.hooks.on_did_add_tag.as_mut() {
            hook(&tag);
        }
        self.fire_text_changed();
        self.reposition();
        true
    }

    /// Appends several tags in order, with the same duplicate rule.
    pub fn add_tags<I>(&mut self, tags: I)
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        for tag in tags {
            let _ = self.add_tag(tag);
        }
    }

    /// Removes the tag and chip at `index`.
    ///
    /// Out-of-range indices are absorbed. Fires
    /// [`on_did_remove_tag`](Hooks::on_did_remove_tag) and re-runs layout.
    /// Returns whether anything was removed.
    pub fn remove_tag_at(&mut self, index: usize) -> bool {
        if index >= self.tags.len() {
            return false;
        }
        let removed = self.tags.remove(index);
        self.chips.remove(index);
        self.selected = match self.selected {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other,
        };
        if let Some(hook) = self.hooks.on_did_remove_tag.as_mut() {
            hook(&removed);
        }
        self.reposition();
        true
    }

    /// Removes the tag equal to `tag`, if present.
    pub fn remove_tag(&mut self, tag: impl Into<Tag>) -> bool {
        let tag = tag.into();
        match self.tags.iter().position(|t| *t == tag) {
            Some(index) => self.remove_tag_at(index),
            None => false,
        }
    }

    /// Removes every tag, last to first, firing the removal hook per tag in
    /// that order.
    pub fn remove_all_tags(&mut self) {
        for index in (0..self.tags.len()).rev() {
            let _ = self.remove_tag_at(index);
        }
    }

    // --- commit path ---

    /// Commits the trimmed field text as a tag.
    ///
    /// Empty or whitespace-only text returns `None` and leaves the field
    /// untouched, as does a veto from
    /// [`on_verify_tag`](Hooks::on_verify_tag). A committed duplicate clears
    /// the field and returns the tag without growing the collection.
    pub fn accept_current_text_as_tag(&mut self) -> Option<Tag> {
        self.tokenize_field_text()
    }

    /// The return key: tokenize, then ask
    /// [`on_should_return`](Hooks::on_should_return) whether the platform's
    /// default return behavior should also run (`false` when unset).
    /// Ignored while not editing or read-only.
    pub fn press_return(&mut self) -> bool {
        if !self.interactive() {
            return false;
        }
        let _ = self.tokenize_field_text();
        match self.hooks.on_should_return.as_mut() {
            Some(hook) => hook(),
            None => false,
        }
    }

    fn tokenize_field_text(&mut self) -> Option<Tag> {
        let text = self.editor.text().trim().to_string();
        if text.is_empty() {
            return None;
        }
        let ok = match self.hooks.on_verify_tag.as_mut() {
            Some(hook) => hook(&text),
            None => true,
        };
        if !ok {
            return None;
        }
        let tag = Tag::new(text);
        let _ = self.add_tag(tag.clone());
        self.editor.set_text("");
        self.fire_text_changed();
        Some(tag)
    }

    // --- typed input ---

    /// Typed input into the editor, firing
    /// [`on_did_change_text`](Hooks::on_did_change_text). Absorbed while not
    /// editing or read-only.
    pub fn insert_text(&mut self, s: &str) {
        if !self.interactive() {
            return;
        }
        if self.editor.insert(s) {
            self.fire_text_changed();
        }
    }

    /// Sets the editor text programmatically, without a change signal, the
    /// way a platform text property behaves.
    pub fn set_text(&mut self, text: &str) {
        self.editor.set_text(text);
    }

    /// The backspace key, observed before the default edit.
    ///
    /// At an empty field this selects the last chip and moves focus off the
    /// editor instead of deleting anything; committed tags only leave
    /// through an explicit [`ChipIntent::Delete`]. With pending text the
    /// default edit applies. Absorbed while not editing or read-only.
    pub fn press_backspace(&mut self) {
        if !self.interactive() {
            return;
        }
        if self.editor.text().is_empty() {
            if !self.chips.is_empty() {
                self.select_chip(self.chips.len() - 1);
            }
            return;
        }
        if self.editor.delete_backward() {
            self.fire_text_changed();
        }
    }

    // --- chip interaction ---

    /// A tap on the chip at `index`. Out-of-range indices are absorbed.
    pub fn tap_chip(&mut self, index: usize) {
        if index >= self.chips.len() {
            return;
        }
        let intent = self.chips[index].handle_tap();
        self.apply_chip_intent(index, intent);
    }

    /// Applies a chip intent raised by the host.
    ///
    /// `Select` enforces the single-selection rule and moves focus to the
    /// chip (ignored when read-only). `Delete` focuses the editor first
    /// (firing [`on_did_begin_editing`](Hooks::on_did_begin_editing)), makes
    /// a non-empty replacement the editor text, then removes the tag. Out of
    /// range indices are absorbed.
    pub fn apply_chip_intent(&mut self, index: usize, intent: ChipIntent) {
        if index >= self.chips.len() {
            return;
        }
        match intent {
            ChipIntent::Select => self.select_chip(index),
            ChipIntent::Delete { replacement } => {
                self.begin_editing();
                let replacement = replacement.unwrap_or_default();
                if !replacement.is_empty() {
                    self.editor.set_text(&replacement);
                }
                let _ = self.remove_tag_at(index);
            }
        }
    }

    fn select_chip(&mut self, index: usize) {
        if self.flags.contains(FieldFlags::READ_ONLY) || index >= self.chips.len() {
            return;
        }
        for (i, chip) in self.chips.iter_mut().enumerate() {
            chip.set_selected(i == index);
        }
        self.selected = Some(index);
        // Selection bookkeeping first; the end-editing hook observes the
        // chip already selected.
        if self.flags.contains(FieldFlags::EDITING) {
            self.flags.remove(FieldFlags::EDITING);
            self.editor.set_focused(false);
            if let Some(hook) = self.hooks.on_did_end_editing.as_mut() {
                hook();
            }
        }
    }

    fn deselect_all_chips(&mut self) {
        for chip in &mut self.chips {
            chip.set_selected(false);
        }
        self.selected = None;
    }

    // --- focus ---

    /// Focuses the editor, firing
    /// [`on_did_begin_editing`](Hooks::on_did_begin_editing) on the
    /// transition, and clears any chip selection. Ignored when read-only.
    pub fn begin_editing(&mut self) {
        if self.flags.contains(FieldFlags::READ_ONLY) {
            return;
        }
        if !self.flags.contains(FieldFlags::EDITING) {
            self.flags.insert(FieldFlags::EDITING);
            self.editor.set_focused(true);
            if let Some(hook) = self.hooks.on_did_begin_editing.as_mut() {
                hook();
            }
        }
        self.deselect_all_chips();
    }

    /// Blurs the editor, firing
    /// [`on_did_end_editing`](Hooks::on_did_end_editing) on the transition.
    pub fn end_editing(&mut self) {
        if self.flags.contains(FieldFlags::EDITING) {
            self.flags.remove(FieldFlags::EDITING);
            self.editor.set_focused(false);
            if let Some(hook) = self.hooks.on_did_end_editing.as_mut() {
                hook();
            }
        }
    }

    // --- read-only ---

    /// Whether the control is read-only.
    pub fn is_read_only(&self) -> bool {
        self.flags.contains(FieldFlags::READ_ONLY)
    }

    /// Toggles read-only. `true` clears selection, ends editing, and hides
    /// the editor slot; `false` restores it. Both directions re-run layout.
    /// Programmatic mutation (`add_tag`, `remove_tag_at`, ...) stays
    /// available either way; read-only gates interaction.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.flags.set(FieldFlags::READ_ONLY, read_only);
        self.deselect_all_chips();
        self.editor.set_enabled(!read_only);
        if read_only {
            self.end_editing();
        }
        self.reposition();
    }

    // --- geometry ---

    /// Host-driven resize; re-runs layout.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
        self.reposition();
    }

    /// Current control width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The height hosts should give the control right now, including the
    /// [`MIN_REPORTED_HEIGHT`] floor.
    pub fn height(&self) -> f64 {
        self.content_height.max(MIN_REPORTED_HEIGHT)
    }

    /// Rect of chip `index` from the last layout pass.
    pub fn chip_rect(&self, index: usize) -> Option<Rect> {
        self.chips.get(index).map(Chip::rect)
    }

    /// Editor rect from the last layout pass; zero while read-only.
    pub fn field_rect(&self) -> Rect {
        self.editor.rect()
    }

    // --- style ---

    /// Current style.
    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    /// Replaces the whole style, restyles every chip and the editor, and
    /// re-runs layout (the font participates in fitted sizes).
    pub fn set_style(&mut self, style: FieldStyle) {
        self.style = style;
        self.editor.set_text_color(style.field_text_color);
        self.restyle_chips();
        self.reposition();
    }

    /// Sets the font and re-runs layout.
    pub fn set_font(&mut self, font: Font) {
        self.style.font = font;
        self.restyle_chips();
        self.reposition();
    }

    /// Chip background for unselected chips.
    pub fn set_tint_color(&mut self, color: Color) {
        self.style.tint_color = color;
        self.restyle_chips();
    }

    /// Chip label color for unselected chips.
    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
        self.restyle_chips();
    }

    /// Chip background for the selected chip.
    pub fn set_selected_color(&mut self, color: Color) {
        self.style.selected_color = color;
        self.restyle_chips();
    }

    /// Chip label color for the selected chip.
    pub fn set_selected_text_color(&mut self, color: Color) {
        self.style.selected_text_color = color;
        self.restyle_chips();
    }

    /// Editor text color; `None` inherits the host default.
    pub fn set_field_text_color(&mut self, color: Option<Color>) {
        self.style.field_text_color = color;
        self.editor.set_text_color(color);
    }

    fn restyle_chips(&mut self) {
        for chip in &mut self.chips {
            chip.restyle(&self.style);
        }
    }

    // --- layout configuration ---

    /// Current layout metrics.
    pub fn metrics(&self) -> &WrapMetrics {
        &self.metrics
    }

    /// Outer padding around the whole control; re-runs layout.
    pub fn set_padding(&mut self, padding: Insets) {
        self.metrics.padding = padding;
        self.reposition();
    }

    /// Horizontal gap between neighboring chips; re-runs layout.
    pub fn set_space_between_tags(&mut self, gap: f64) {
        self.metrics.item_gap = gap;
        self.reposition();
    }

    /// Smallest width the editor accepts before wrapping to its own row;
    /// re-runs layout.
    pub fn set_min_field_width(&mut self, width: f64) {
        self.metrics.min_field_width = width;
        self.reposition();
    }

    // --- editor passthrough ---

    /// Placeholder shown while the control is empty.
    pub fn placeholder(&self) -> &str {
        self.editor.placeholder()
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, text: &str) {
        self.editor.set_placeholder(text);
    }

    /// Whether a host should draw the placeholder right now: no tags and no
    /// pending text.
    pub fn placeholder_visible(&self) -> bool {
        self.tags.is_empty() && self.editor.text().is_empty()
    }

    /// Advisory keyboard type for the editor.
    pub fn keyboard_type(&self) -> KeyboardHint {
        self.editor.keyboard()
    }

    /// Sets the advisory keyboard type.
    pub fn set_keyboard_type(&mut self, keyboard: KeyboardHint) {
        self.editor.set_keyboard(keyboard);
    }

    // --- readers ---

    /// The committed tags, in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The chips, parallel to [`tags`](Self::tags): `chips()[i]` renders
    /// `tags()[i]`.
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Whether the editor holds keyboard focus.
    pub fn is_editing(&self) -> bool {
        self.flags.contains(FieldFlags::EDITING)
    }

    /// Pending, uncommitted editor text.
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Index of the selected chip, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The editor component: focus, traits, placeholder, rect.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Installs a different text measurer and re-runs layout.
    pub fn set_measure(&mut self, measure: Box<dyn TextMeasure>) {
        self.measure = measure;
        self.reposition();
    }

    // --- internals ---

    /// Keystrokes reach the editor only while it is focused and the control
    /// is not read-only.
    fn interactive(&self) -> bool {
        self.flags.contains(FieldFlags::EDITING) && !self.flags.contains(FieldFlags::READ_ONLY)
    }

    fn fire_text_changed(&mut self) {
        if let Some(hook) = self.hooks.on_did_change_text.as_mut() {
            hook(self.editor.text());
        }
    }

    fn content_width(&self) -> f64 {
        self.width - self.metrics.padding.x0 - self.metrics.padding.x1
    }

    fn field_mode(&self) -> FieldMode {
        if self.editor.enabled() {
            FieldMode::Inline
        } else {
            FieldMode::Hidden
        }
    }

    /// Re-runs the wrap pass and fires the height hook when the raw content
    /// height changed.
    fn reposition(&mut self) {
        let cap = self.content_width();
        let sizes: Vec<Size> = self
            .chips
            .iter()
            .map(|chip| chip.fit_to_width(cap, self.measure.as_ref()))
            .collect();
        let layout = solve(self.width, &self.metrics, &sizes, self.field_mode());
        for placement in &layout.placements {
            self.chips[placement.index].set_rect(placement.rect);
        }
        self.editor.set_rect(layout.field.rect);

        let old = self.content_height;
        self.content_height = layout.content_height;
        if old != self.content_height {
            let reported = self.height();
            if let Some(hook) = self.hooks.on_did_change_height_to.as_mut() {
                hook(reported);
            }
        }
    }
}
