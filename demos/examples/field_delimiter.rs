// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comma as a commit delimiter.
//!
//! The control has no delimiter setting. A host implements one by
//! intercepting the delimiter keystroke and accepting the pending text
//! instead of inserting the character.
//!
//! Run:
//! - `cargo run -p tagfield_demos --example field_delimiter`

use tagfield_control::field::TagsField;
use tagfield_control::tag::Tag;

fn type_with_commas(field: &mut TagsField, input: &str) {
    for ch in input.chars() {
        if ch == ',' {
            let committed = field.accept_current_text_as_tag();
            println!("  ',' committed {:?}", committed.as_ref().map(Tag::text));
        } else {
            field.insert_text(&ch.to_string());
        }
    }
}

fn main() {
    let mut field = TagsField::new(320.0);
    field.begin_editing();

    type_with_commas(&mut field, "mail,chips , mail,  ,draft");

    let tags: Vec<&str> = field.tags().iter().map(Tag::text).collect();
    println!("tags: {tags:?}");
    println!("pending: {:?}", field.text());
    assert_eq!(
        tags,
        vec!["mail", "chips"],
        "blank and duplicate segments never grow the collection"
    );
}
