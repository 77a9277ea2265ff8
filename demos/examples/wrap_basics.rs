// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap solver basics.
//!
//! Solve the same chip run at two widths and print where everything lands.
//!
//! Run:
//! - `cargo run -p tagfield_demos --example wrap_basics`

use kurbo::Size;
use tagfield_wrap::solver::solve;
use tagfield_wrap::types::{FieldMode, WrapMetrics};

fn main() {
    let metrics = WrapMetrics::default();
    let chips = [
        Size::new(40.0, 25.0),
        Size::new(50.0, 25.0),
        Size::new(60.0, 25.0),
        Size::new(90.0, 25.0),
    ];

    // Wide enough for one row with the field inline at the end.
    let layout = solve(360.0, &metrics, &chips, FieldMode::Inline);
    println!("== 360 wide ==");
    for placement in &layout.placements {
        println!(
            "  chip {} row {} at {:?}",
            placement.index, placement.row, placement.rect
        );
    }
    println!(
        "  field row {} at {:?} (wrapped: {})",
        layout.field.row, layout.field.rect, layout.field.wrapped
    );
    println!("  rows {} content height {}", layout.rows, layout.content_height);
    assert!(!layout.field.wrapped, "the field should share the chip row");

    // Narrow: chips stack up and the remainder is too small for the field,
    // so it wraps to an indented row of its own.
    let layout = solve(120.0, &metrics, &chips, FieldMode::Inline);
    println!("== 120 wide ==");
    for placement in &layout.placements {
        println!(
            "  chip {} row {} at {:?}",
            placement.index, placement.row, placement.rect
        );
    }
    println!(
        "  field row {} at {:?} (wrapped: {})",
        layout.field.row, layout.field.rect, layout.field.wrapped
    );
    println!("  rows {} content height {}", layout.rows, layout.content_height);
    assert_eq!(layout.rows, 4, "three chip rows plus the wrapped field row");
}
