// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scale_control --heading-base-level=0

//! Understory Scale Control: a headless tick-mark slider.
//!
//! [`ScaleControl`] wraps the layout engine from `understory_scale` with the
//! state a slider needs:
//!
//! - A selected integer value, clamped into
//!   `[mark_value_start, maximum_allowed_value]` after every mutation.
//! - A drag state machine ([`drag`]) fed by a continuous value stream from
//!   the host, ending in an inside/outside release.
//! - Listener hooks for [`ScaleEvent`]s and a coalescing redraw flag.
//! - Mark drawing through the [`ScalePainter`] seam, with optional emphasis
//!   of the marks the selection has reached.
//!
//! The control assumes no UI framework. The host routes pointer input into
//! [`ScaleControl::drag_value_changed`] (or
//! [`ScaleControl::drag_to_offset`]) and the `end_drag_*` methods, polls
//! [`ScaleControl::take_redraw`], and paints with its own renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_scale::ScaleConfig;
//! use understory_scale_control::{PaintRecorder, ScaleControl, ScaleEvent};
//!
//! let config = ScaleConfig::new()
//!     .with_mark_value_start(0)
//!     .with_mark_value_interval(10)
//!     .with_mark_count(11)
//!     .with_sub_mark_count(9);
//! let mut control = ScaleControl::new(config);
//! assert_eq!(control.selected_value(), 50);
//!
//! control.add_listener(|event| {
//!     if let ScaleEvent::ValueChanged(value) = event {
//!         assert!((0..=100).contains(value));
//!     }
//! });
//!
//! control.drag_value_changed(72.4);
//! control.drag_value_changed(180.0);
//! control.end_drag_inside();
//! assert_eq!(control.selected_value(), 100);
//!
//! if control.take_redraw() {
//!     let mut painter = PaintRecorder::new();
//!     control.draw(Size::new(300.0, 40.0), &mut painter);
//!     assert_eq!(painter.fills().count(), 202);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod control;
pub mod drag;
mod paint;
mod style;

pub use control::{ListenerId, ScaleControl, ScaleEvent};
pub use drag::{DragPhase, DragRelease};
pub use paint::{PaintOp, PaintRecorder, ScalePainter};
pub use style::MarkStyle;
