// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs and outputs of the wrap solver.
//!
//! ## Overview
//!
//! [`WrapMetrics`] describes the geometry knobs of a chip row: outer padding,
//! the fixed row height, gaps, and the trailing input-field slot parameters.
//! [`solve`](crate::solver::solve) consumes it together with pre-fitted item
//! sizes and produces a [`WrapLayout`]: one [`Placement`] per item, a
//! [`FieldSlot`] for the input field, and the resulting content height.

use alloc::vec::Vec;
use kurbo::{Insets, Rect};

/// Geometry configuration for one wrap pass.
///
/// All values are in points. The defaults reproduce the classic tag-input
/// look: 25-point rows with a 4-point gap, 2 points between chips, and a
/// 56-point minimum before the field wraps to its own row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WrapMetrics {
    /// Outer padding around the whole control (left, top, right, bottom).
    pub padding: Insets,
    /// Fixed height of every row; items are centered vertically within it.
    pub row_height: f64,
    /// Vertical gap between consecutive rows.
    pub row_gap: f64,
    /// Horizontal gap between neighboring items on a row.
    pub item_gap: f64,
    /// Fixed indent placed before the field slot. On a shared row the part
    /// already covered by `item_gap` is not applied twice.
    pub field_indent: f64,
    /// Smallest acceptable field width; below it the field wraps to a fresh
    /// row of its own.
    pub min_field_width: f64,
}

impl Default for WrapMetrics {
    fn default() -> Self {
        Self {
            padding: Insets::new(8.0, 10.0, 8.0, 10.0),
            row_height: 25.0,
            row_gap: 4.0,
            item_gap: 2.0,
            field_indent: 6.0,
            min_field_width: 56.0,
        }
    }
}

/// How the trailing field participates in the pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldMode {
    /// Lay the field out after the last item, wrapping it when too narrow.
    Inline,
    /// Zero-size the field and report it hidden (read-only controls).
    Hidden,
}

/// Where one item landed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Index of the item in the input slice.
    pub index: usize,
    /// Assigned rect, vertically centered within its row.
    pub rect: Rect,
    /// Zero-based row the item landed on.
    pub row: usize,
}

/// Where the field slot landed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldSlot {
    /// Assigned rect; [`Rect::ZERO`] when hidden.
    pub rect: Rect,
    /// Zero-based row of the slot. The wrap bookkeeping runs even in
    /// [`FieldMode::Hidden`], so hidden slots still report the row the
    /// field would have occupied.
    pub row: usize,
    /// Whether the slot was forced onto a fresh row by the width minimum.
    pub wrapped: bool,
    /// Whether the field should be shown at all.
    pub visible: bool,
}

/// Result of one wrap pass.
#[derive(Clone, Debug, PartialEq)]
pub struct WrapLayout {
    /// One placement per input item, in input order.
    pub placements: Vec<Placement>,
    /// The trailing field slot.
    pub field: FieldSlot,
    /// Number of rows used, counting a forced field row.
    pub rows: usize,
    /// Row span: `rows * row_height`, without the inter-row gaps. Kept
    /// separate because the content height takes the larger of this span
    /// and the field's bottom edge plus bottom padding.
    pub rows_height: f64,
    /// Raw content height of the pass. Callers apply any minimum-height
    /// floor of their own; the solver reports the true extent.
    pub content_height: f64,
}

impl WrapLayout {
    /// Placements that landed on `row`.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.row == row)
    }
}
