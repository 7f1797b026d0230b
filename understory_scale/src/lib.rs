// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scale --heading-base-level=0

//! Understory Scale: tick-mark layout and value-to-fill mapping.
//!
//! This crate is the headless core of a "scale" slider: a row of evenly
//! spaced tick marks (major marks with optional minor marks between them)
//! over which a thumb selects an integer value. It answers three questions
//! that have to stay consistent with each other:
//!
//! - How many slots to draw, and which of them are major marks
//!   ([`ScaleGeometry::total_marks`], [`ScaleGeometry::is_major_mark`]).
//! - Where each slot sits for a given width
//!   ([`ScaleGeometry::pixel_offset`], [`ScaleGeometry::mark_rect`]).
//! - How much of the width is "filled" for a selected value, and how many
//!   marks that fill reaches ([`FillMapper::fill_width`],
//!   [`FillMapper::selected_mark_count`]).
//!
//! It does **not** draw, own a selected value, or handle input. Those live in
//! `understory_scale_control` and `understory_scale_overlay`.
//!
//! ## Layout
//!
//! With `n` major marks, `s` minor marks per gap and `b` buffer slots, the
//! scale has `n + (n - 1) * s` slots between the first and last major mark,
//! plus `b` runway slots at each end. Slots are spread evenly across the
//! width minus the left/right inset `mark_start_from`.
//!
//! ```rust
//! use understory_scale::{ScaleConfig, ScaleGeometry};
//!
//! let config = ScaleConfig::new()
//!     .with_mark_value_start(0)
//!     .with_mark_value_interval(10)
//!     .with_mark_count(11)
//!     .with_sub_mark_count(9);
//! let geometry = ScaleGeometry::new(config);
//!
//! assert_eq!(config.maximum_allowed_value(), 100);
//! assert_eq!(geometry.total_marks(), 101);
//! assert_eq!(geometry.distance_between_marks(300.0), 3.0);
//! assert!(geometry.is_major_mark(10));
//! assert!(!geometry.is_major_mark(11));
//!
//! let fill = geometry.fill_mapper();
//! assert_eq!(fill.fill_width(50, 300.0), 150.0);
//! assert_eq!(fill.fill_width(0, 300.0), 0.0);
//! ```
//!
//! ## Degenerate input
//!
//! Nothing here returns an error. A mark count of zero falls back to
//! [`DEFAULT_MARK_COUNT`], single-slot layouts and widths too small for the
//! insets collapse the spacing to zero, and no query produces NaN or infinity.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use `libm` for float functions in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ScaleConfig`] and
//!   [`MarkMetrics`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod fill;
mod geometry;

pub use config::{DEFAULT_MARK_COUNT, ScaleConfig};
pub use fill::{FillMapper, FillProgress};
pub use geometry::{MarkEdge, MarkKind, MarkMetrics, MarkSlot, ScaleGeometry, is_drawable};
