// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted editing session against the tags field.
//!
//! Wires every event channel to stdout, then drives the control the way a
//! host would: type, commit, select with backspace, delete, resize.
//!
//! Run:
//! - `cargo run -p tagfield_demos --example field_session`

use tagfield_control::chip::ChipIntent;
use tagfield_control::field::TagsField;

fn main() {
    let mut field = TagsField::new(260.0);
    field.hooks.on_did_add_tag = Some(Box::new(|tag| println!("  + added {:?}", tag.text())));
    field.hooks.on_did_remove_tag = Some(Box::new(|tag| println!("  - removed {:?}", tag.text())));
    field.hooks.on_did_change_text = Some(Box::new(|text| println!("  ~ text {text:?}")));
    field.hooks.on_did_begin_editing = Some(Box::new(|| println!("  > editing began")));
    field.hooks.on_did_end_editing = Some(Box::new(|| println!("  < editing ended")));
    field.hooks.on_did_change_height_to = Some(Box::new(|height| println!("  # height {height}")));
    field.hooks.on_verify_tag = Some(Box::new(|text| !text.contains(' ')));

    println!("== Seed ==");
    field.add_tags(["ui", "layout", "rust"]);

    println!("== Type and commit ==");
    field.begin_editing();
    field.insert_text("wrap");
    field.press_return();

    println!("== Verifier rejects spaces ==");
    field.insert_text("not a tag");
    field.press_return();
    println!("  pending text stays {:?}", field.text());
    field.set_text("");

    println!("== Backspace selects, delete intent removes ==");
    field.press_backspace();
    println!("  selected {:?}", field.selected_index());
    let last = field.tags().len() - 1;
    field.apply_chip_intent(last, ChipIntent::Delete { replacement: None });

    println!("== Narrow to force a wrap ==");
    field.set_width(150.0);
    for (index, tag) in field.tags().iter().enumerate() {
        println!("  {:?} at {:?}", tag.text(), field.chip_rect(index).unwrap());
    }
    println!("  field rect {:?}", field.field_rect());
    println!("  reported height {}", field.height());
}
