// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style state shared by the container, its chips, and the editor.
//!
//! The control styles top-down: a [`FieldStyle`] is handed to the container
//! on construction and re-applied to every chip whenever a style property
//! changes. There is no cascading or observation; restyling is an explicit
//! call.

/// An 8-bit-per-channel RGBA color.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Fully opaque color from red/green/blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// The default accent chips are filled with.
    pub const ACCENT: Self = Self::rgb(0, 122, 255);
}

/// Font parameters the measurement seam understands.
///
/// Rendering-free: only the size participates in estimation. Hosts with a
/// real text stack map this onto their own font handles and supply their own
/// [`TextMeasure`](crate::measure::TextMeasure).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f64,
}

impl Font {
    /// The control's default font.
    pub const DEFAULT: Self = Self { size: 14.0 };
}

impl Default for Font {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The control-wide palette and font.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldStyle {
    /// Font for chip labels and the editor.
    pub font: Font,
    /// Chip background when not selected.
    pub tint_color: Color,
    /// Chip label when not selected.
    pub text_color: Color,
    /// Chip background when selected.
    pub selected_color: Color,
    /// Chip label when selected.
    pub selected_text_color: Color,
    /// Editor text; `None` inherits the host default.
    pub field_text_color: Option<Color>,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            font: Font::DEFAULT,
            tint_color: Color::ACCENT,
            text_color: Color::WHITE,
            selected_color: Color::GRAY,
            selected_text_color: Color::BLACK,
            field_text_color: None,
        }
    }
}
