// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering-free text measurement.
//!
//! The control never draws, but layout needs sizes. [`TextMeasure`] is the
//! seam to a host's real font metrics; [`MonoMeasure`] is the built-in
//! estimator used until a host plugs its own in.

use kurbo::Size;
use unicode_width::UnicodeWidthStr;

use crate::style::Font;

/// Measurement seam between the control and a host text stack.
///
/// Implementations must be pure: the same text and font always measure the
/// same size within one layout pass.
pub trait TextMeasure: core::fmt::Debug {
    /// Size of one line of `text` under `font`.
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Built-in estimator based on Unicode display width.
///
/// Width is 0.6 of the font size per column and line height 1.3 of the font
/// size, the usual monospace ratios. Wide (East Asian) characters count as
/// two columns. Good enough to drive layout in a headless setting; hosts
/// with font metrics implement [`TextMeasure`] themselves.
#[derive(Copy, Clone, Debug, Default)]
pub struct MonoMeasure;

impl TextMeasure for MonoMeasure {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let columns = text.width() as f64;
        Size::new(columns * font.size * 0.6, font.size * 1.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_counts_single_columns() {
        let size = MonoMeasure.measure("alpha", &Font { size: 10.0 });
        assert_eq!(size, Size::new(30.0, 13.0));
    }

    #[test]
    fn wide_characters_count_double() {
        let narrow = MonoMeasure.measure("ab", &Font::DEFAULT);
        let wide = MonoMeasure.measure("漢字", &Font::DEFAULT);
        assert_eq!(wide.width, narrow.width * 2.0);
    }

    #[test]
    fn empty_text_is_zero_wide_but_one_line_tall() {
        let size = MonoMeasure.measure("", &Font::DEFAULT);
        assert_eq!(size.width, 0.0);
        assert!(size.height > 0.0);
    }
}
