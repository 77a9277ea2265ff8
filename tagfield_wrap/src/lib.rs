// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tagfield_wrap --heading-base-level=0

//! Tagfield Wrap: a greedy line-wrap solver for chip rows with a trailing
//! input-field slot.
//!
//! ## Overview
//!
//! This crate computes where a run of variable-width, fixed-row-height items
//! ("chips") and one trailing text-entry slot land inside a width-bounded
//! container. It is the layout half of a tag-input control, split out so it
//! can be tested and benchmarked without any control state.
//!
//! The pass is deterministic and greedy: items flow left to right and wrap
//! to a fresh row the moment one would cross the line end. The field slot
//! follows the last item with a small indent and wraps to its own row when
//! the remaining run is narrower than a configured minimum.
//!
//! The solver does not measure text and does not shrink items. Callers fit
//! item widths first (typically capping them at the content width) and pass
//! plain [`kurbo::Size`] values.
//!
//! ## Inputs and outputs
//!
//! - [`WrapMetrics`](crate::types::WrapMetrics): padding, row height, gaps,
//!   field indent, and the field width minimum.
//! - [`FieldMode`](crate::types::FieldMode): whether the field is laid out
//!   inline or hidden (read-only controls hide it; row accounting still
//!   runs so toggling visibility never changes where items sit).
//! - [`WrapLayout`](crate::types::WrapLayout): per-item
//!   [`Placement`](crate::types::Placement) rects with row indices, the
//!   [`FieldSlot`](crate::types::FieldSlot), and the raw content height.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Size;
//! use tagfield_wrap::solver::solve;
//! use tagfield_wrap::types::{FieldMode, WrapMetrics};
//!
//! let metrics = WrapMetrics::default();
//! let chips = [Size::new(40.0, 25.0), Size::new(50.0, 25.0), Size::new(60.0, 25.0)];
//!
//! let layout = solve(300.0, &metrics, &chips, FieldMode::Inline);
//! assert_eq!(layout.rows, 1);
//! assert_eq!(layout.placements[2].rect.origin(), kurbo::Point::new(102.0, 10.0));
//!
//! // The field takes the rest of the row.
//! assert_eq!(layout.field.rect.width(), 124.0);
//! assert_eq!(layout.content_height, 45.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod solver;
pub mod types;
