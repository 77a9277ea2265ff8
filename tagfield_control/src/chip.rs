// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chip: a self-sizing, selectable unit rendering one tag.
//!
//! Chips are owned by the container, one per tag at the same index. They
//! size themselves from their label, report what a host should draw, and
//! surface interaction as [`ChipIntent`] values for the container to apply;
//! they never touch the collection themselves.

use alloc::string::String;
use core::time::Duration;
use kurbo::{Rect, Size};

use crate::measure::TextMeasure;
use crate::style::{Color, FieldStyle, Font};

/// Horizontal padding on each side of the chip label.
pub const CHIP_X_PAD: f64 = 6.0;
/// Vertical padding above and below the chip label.
pub const CHIP_Y_PAD: f64 = 6.0;

/// Length of the selection color swap, for hosts that animate it.
///
/// Purely cosmetic and best-effort: a rapid later state change simply
/// supersedes the visual end state, and a non-animated host ignores this
/// entirely.
pub const SELECTION_TRANSITION: Duration = Duration::from_millis(30);

/// What a chip asks its owner to do.
///
/// Applied through
/// [`TagsField::apply_chip_intent`](crate::field::TagsField::apply_chip_intent).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChipIntent {
    /// Become the selected chip. Idempotent when already selected.
    Select,
    /// Remove this chip's tag.
    Delete {
        /// Text handed back to the editor before removal, so a host can turn
        /// a committed tag back into editable text. Empty or `None` hands
        /// nothing back.
        replacement: Option<String>,
    },
}

/// The visual, selectable representation of one tag.
#[derive(Clone, Debug)]
pub struct Chip {
    display_text: String,
    selected: bool,
    font: Font,
    tint_color: Color,
    text_color: Color,
    selected_color: Color,
    selected_text_color: Color,
    rect: Rect,
}

impl Chip {
    /// Creates an unselected chip for `text`, styled from the container
    /// palette.
    pub fn new(text: impl Into<String>, style: &FieldStyle) -> Self {
        Self {
            display_text: text.into(),
            selected: false,
            font: style.font,
            tint_color: style.tint_color,
            text_color: style.text_color,
            selected_color: style.selected_color,
            selected_text_color: style.selected_text_color,
            rect: Rect::ZERO,
        }
    }

    /// The text the chip renders.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Whether this chip is the selected one.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Natural size: the label under the current font plus fixed padding.
    pub fn preferred_size(&self, measure: &dyn TextMeasure) -> Size {
        let label = measure.measure(&self.display_text, &self.font);
        Size::new(
            label.width + 2.0 * CHIP_X_PAD,
            label.height + 2.0 * CHIP_Y_PAD,
        )
    }

    /// Natural size with the width capped at `max_width`.
    ///
    /// The cap never touches the height: an over-wide chip is squeezed on
    /// width only.
    pub fn fit_to_width(&self, max_width: f64, measure: &dyn TextMeasure) -> Size {
        let natural = self.preferred_size(measure);
        if natural.width > max_width {
            Size::new(max_width, natural.height)
        } else {
            natural
        }
    }

    /// The background a host should draw right now.
    pub fn background(&self) -> Color {
        if self.selected {
            self.selected_color
        } else {
            self.tint_color
        }
    }

    /// The label color a host should draw right now.
    pub fn text_color(&self) -> Color {
        if self.selected {
            self.selected_text_color
        } else {
            self.text_color
        }
    }

    /// A tap always asks for selection, even when already selected.
    pub fn handle_tap(&self) -> ChipIntent {
        ChipIntent::Select
    }

    /// The rect assigned by the last layout pass.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Re-applies the container palette. A font change takes effect on the
    /// next layout pass, when sizes are recomputed.
    pub(crate) fn restyle(&mut self, style: &FieldStyle) {
        self.font = style.font;
        self.tint_color = style.tint_color;
        self.text_color = style.text_color;
        self.selected_color = style.selected_color;
        self.selected_text_color = style.selected_text_color;
    }

    /// Selection state is container bookkeeping; the container enforces the
    /// single-selection rule and moves focus.
    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FieldStyle;

    #[derive(Debug)]
    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        fn measure(&self, text: &str, _font: &Font) -> Size {
            Size::new(text.len() as f64, 13.0)
        }
    }

    #[test]
    fn preferred_size_adds_fixed_padding() {
        let chip = Chip::new("abcd", &FieldStyle::default());
        assert_eq!(chip.preferred_size(&FixedMeasure), Size::new(16.0, 25.0));
    }

    #[test]
    fn width_cap_leaves_height_natural() {
        let chip = Chip::new("a long tag label", &FieldStyle::default());
        assert_eq!(chip.fit_to_width(20.0, &FixedMeasure), Size::new(20.0, 25.0));
        assert_eq!(chip.fit_to_width(100.0, &FixedMeasure), Size::new(28.0, 25.0));
    }

    #[test]
    fn colors_swap_with_selection() {
        let style = FieldStyle::default();
        let mut chip = Chip::new("x", &style);
        assert_eq!(chip.background(), style.tint_color);
        assert_eq!(chip.text_color(), style.text_color);
        chip.set_selected(true);
        assert_eq!(chip.background(), style.selected_color);
        assert_eq!(chip.text_color(), style.selected_text_color);
    }

    #[test]
    fn tap_is_always_a_selection_request() {
        let mut chip = Chip::new("x", &FieldStyle::default());
        assert_eq!(chip.handle_tap(), ChipIntent::Select);
        chip.set_selected(true);
        assert_eq!(chip.handle_tap(), ChipIntent::Select);
    }
}
