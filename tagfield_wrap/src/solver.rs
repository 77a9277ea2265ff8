// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The greedy wrap pass.
//!
//! ## Procedure
//!
//! Left to right, top to bottom, one pass, no backtracking:
//!
//! 1. The cursor starts at `(padding.left, padding.top)`; every line ends at
//!    `width - padding.right`.
//! 2. An item that would cross the line end wraps first: the cursor returns
//!    to `padding.left` and drops by `row_height + row_gap`. The item is
//!    placed centered vertically within its row and the cursor advances by
//!    the item width plus `item_gap`.
//! 3. After the last item the cursor indents by `field_indent` (less the
//!    `item_gap` already applied). If the remaining run is narrower than
//!    `min_field_width` the field wraps to a fresh row, indented by the
//!    full `field_indent`, and takes that row's remaining width.
//! 4. The raw content height is the larger of the row span and the field's
//!    bottom edge plus bottom padding.
//!
//! Callers fit item widths before the pass; the solver never shrinks an
//! item. A caller that caps items at the content width guarantees that a
//! lone over-wide item lands exactly on the line end instead of wrapping
//! forever.

use alloc::vec::Vec;
use kurbo::{Rect, Size};

use crate::types::{FieldMode, FieldSlot, Placement, WrapLayout, WrapMetrics};

/// Runs one wrap pass over pre-fitted item sizes.
///
/// `width` is the full control width; `items` are laid out in order. The
/// field-slot bookkeeping (including a forced wrap) runs in both
/// [`FieldMode`]s so that hiding the field does not change row accounting;
/// only the reported rect differs.
pub fn solve(width: f64, metrics: &WrapMetrics, items: &[Size], field: FieldMode) -> WrapLayout {
    let boundary = width - metrics.padding.x1;
    let mut x = metrics.padding.x0;
    let mut y = metrics.padding.y0;
    let mut rows = 1_usize;
    let mut rows_height = metrics.row_height;

    let mut placements = Vec::with_capacity(items.len());
    for (index, size) in items.iter().enumerate() {
        if x + size.width > boundary {
            x = metrics.padding.x0;
            y += metrics.row_height + metrics.row_gap;
            rows += 1;
            rows_height += metrics.row_height;
        }
        // Center the item vertically within the fixed-height row.
        let y0 = y + (metrics.row_height - size.height) / 2.0;
        placements.push(Placement {
            index,
            rect: Rect::new(x, y0, x + size.width, y0 + size.height),
            row: rows - 1,
        });
        x += size.width + metrics.item_gap;
    }

    // Indent the field slot; the gap after the last item already covers part
    // of it on a shared row.
    x += (metrics.field_indent - metrics.item_gap).max(0.0);
    let mut available = boundary - x;
    let mut wrapped = false;
    if available < metrics.min_field_width {
        wrapped = true;
        x = metrics.padding.x0 + metrics.field_indent;
        y += metrics.row_height + metrics.row_gap;
        rows += 1;
        rows_height += metrics.row_height;
        available = boundary - x;
    }

    let field = match field {
        FieldMode::Inline => FieldSlot {
            rect: Rect::new(x, y, x + available, y + metrics.row_height),
            row: rows - 1,
            wrapped,
            visible: true,
        },
        FieldMode::Hidden => FieldSlot {
            rect: Rect::ZERO,
            row: rows - 1,
            wrapped,
            visible: false,
        },
    };

    let field_bottom = if field.visible { field.rect.y1 } else { 0.0 };
    let content_height = rows_height.max(field_bottom + metrics.padding.y1);

    WrapLayout {
        placements,
        field,
        rows,
        rows_height,
        content_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;

    fn sizes(widths: &[f64]) -> Vec<Size> {
        widths.iter().map(|w| Size::new(*w, 25.0)).collect()
    }

    struct Rng(u64);

    impl Rng {
        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }

        fn next_f64(&mut self) -> f64 {
            let v = self.next_u64() >> 11;
            (v as f64) / ((1_u64 << 53) as f64)
        }
    }

    #[test]
    fn single_row_placement() {
        let layout = solve(
            300.0,
            &WrapMetrics::default(),
            &sizes(&[40.0, 50.0, 60.0]),
            FieldMode::Inline,
        );
        let origins: Vec<Point> = layout.placements.iter().map(|p| p.rect.origin()).collect();
        assert_eq!(
            origins,
            vec![
                Point::new(8.0, 10.0),
                Point::new(50.0, 10.0),
                Point::new(102.0, 10.0)
            ]
        );
        assert_eq!(layout.rows, 1);
        // Field sits after the last chip, indented by 6 - 2.
        assert_eq!(layout.field.rect, Rect::new(168.0, 10.0, 292.0, 35.0));
        assert!(!layout.field.wrapped);
        assert_eq!(layout.content_height, 45.0);
    }

    #[test]
    fn overflowing_item_wraps_to_a_fresh_row() {
        let layout = solve(
            300.0,
            &WrapMetrics::default(),
            &sizes(&[40.0, 50.0, 60.0, 250.0]),
            FieldMode::Inline,
        );
        let last = layout.placements[3];
        assert_eq!(last.rect.origin(), Point::new(8.0, 39.0));
        assert_eq!(last.row, 1);
        // Only 28 points remain after the wide chip, so the field wraps too.
        assert!(layout.field.wrapped);
        assert_eq!(layout.field.rect.origin(), Point::new(14.0, 68.0));
        assert_eq!(layout.rows, 3);
        assert_eq!(layout.rows_height, 75.0);
        assert_eq!(layout.content_height, 103.0);
    }

    #[test]
    fn lowered_minimum_keeps_the_field_on_the_chip_row() {
        let metrics = WrapMetrics {
            min_field_width: 20.0,
            ..Default::default()
        };
        let layout = solve(
            300.0,
            &metrics,
            &sizes(&[40.0, 50.0, 60.0, 250.0]),
            FieldMode::Inline,
        );
        assert!(!layout.field.wrapped);
        assert_eq!(layout.field.rect, Rect::new(264.0, 39.0, 292.0, 64.0));
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.content_height, 74.0);
    }

    #[test]
    fn exact_fit_lands_on_the_boundary_without_wrapping() {
        // 8 + 284 reaches the boundary exactly; the test is a strict greater-than.
        let layout = solve(
            300.0,
            &WrapMetrics::default(),
            &sizes(&[284.0]),
            FieldMode::Inline,
        );
        assert_eq!(layout.placements[0].row, 0);
        assert_eq!(layout.placements[0].rect.x1, 292.0);
    }

    #[test]
    fn empty_input_places_only_the_field() {
        let layout = solve(300.0, &WrapMetrics::default(), &[], FieldMode::Inline);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.field.rect, Rect::new(12.0, 10.0, 292.0, 35.0));
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.content_height, 45.0);
    }

    #[test]
    fn hidden_field_keeps_the_row_accounting() {
        // Width 70 leaves 50 points for the field, under the 56 minimum.
        let inline = solve(70.0, &WrapMetrics::default(), &[], FieldMode::Inline);
        assert!(inline.field.wrapped);
        assert_eq!(inline.rows, 2);
        assert_eq!(inline.content_height, 74.0);

        let hidden = solve(70.0, &WrapMetrics::default(), &[], FieldMode::Hidden);
        assert!(!hidden.field.visible);
        assert_eq!(hidden.field.rect, Rect::ZERO);
        // The phantom row still counts toward the span.
        assert!(hidden.field.wrapped);
        assert_eq!(hidden.rows, 2);
        assert_eq!(hidden.rows_height, 50.0);
        assert_eq!(hidden.content_height, 50.0);
    }

    #[test]
    fn short_items_center_within_the_row() {
        let layout = solve(
            300.0,
            &WrapMetrics::default(),
            &[Size::new(30.0, 15.0)],
            FieldMode::Inline,
        );
        assert_eq!(layout.placements[0].rect, Rect::new(8.0, 15.0, 38.0, 30.0));
    }

    #[test]
    fn rows_advance_by_height_plus_gap() {
        let layout = solve(
            300.0,
            &WrapMetrics::default(),
            &sizes(&[200.0, 200.0, 200.0]),
            FieldMode::Inline,
        );
        let ys: Vec<f64> = layout.placements.iter().map(|p| p.rect.y0).collect();
        assert_eq!(ys, vec![10.0, 39.0, 68.0]);
        let rows: Vec<usize> = layout.placements.iter().map(|p| p.row).collect();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn row_iterator_groups_by_row() {
        let layout = solve(
            300.0,
            &WrapMetrics::default(),
            &sizes(&[100.0, 100.0, 100.0]),
            FieldMode::Inline,
        );
        assert_eq!(layout.row(0).count(), 2);
        assert_eq!(layout.row(1).count(), 1);
        assert_eq!(layout.row(2).count(), 0);
    }

    #[test]
    fn random_runs_stay_in_bounds_without_overlap() {
        let metrics = WrapMetrics::default();
        let mut rng = Rng(0xDEAD_BEEF_CAFE_F00D);
        for &count in &[1_usize, 3, 7, 12, 24] {
            for _ in 0..40 {
                let width = 80.0 + rng.next_f64() * 400.0;
                let cap = width - metrics.padding.x0 - metrics.padding.x1;
                let items: Vec<Size> = (0..count)
                    .map(|_| Size::new((10.0 + rng.next_f64() * 120.0).min(cap), 25.0))
                    .collect();
                let layout = solve(width, &metrics, &items, FieldMode::Inline);

                let boundary = width - metrics.padding.x1;
                for placement in &layout.placements {
                    assert!(placement.rect.x0 >= metrics.padding.x0);
                    assert!(placement.rect.x1 <= boundary);
                    let row_top = metrics.padding.y0
                        + placement.row as f64 * (metrics.row_height + metrics.row_gap);
                    assert_eq!(placement.rect.y0, row_top);
                }
                for pair in layout.placements.windows(2) {
                    assert!(pair[1].row >= pair[0].row);
                    if pair[1].row == pair[0].row {
                        assert!(pair[1].rect.x0 >= pair[0].rect.x1);
                    }
                }
            }
        }
    }
}
