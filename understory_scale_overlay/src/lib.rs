// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scale_overlay --heading-base-level=0

//! Understory Scale Overlay: gradient fill and thumb state for scale controls.
//!
//! [`GradientOverlay`] composes a `ScaleControl` from
//! `understory_scale_control` with:
//!
//! - A background panel beneath everything (optional).
//! - A gradient layer from the left edge to the control's fill width, removed
//!   whenever the fill is empty.
//! - A [`ThumbImage`] that switches from its initial to its active image the
//!   first time the user drags the value.
//!
//! The overlay holds the control rather than extending it, so the value and
//! layout logic stay testable on their own.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_scale::ScaleConfig;
//! use understory_scale_control::{PaintRecorder, ScaleControl};
//! use understory_scale_overlay::{GradientOverlay, ThumbImage};
//!
//! let control = ScaleControl::new(ScaleConfig::new());
//! let mut overlay = GradientOverlay::new(control, ThumbImage::new("thumb", "thumb-active"));
//! overlay.set_size(Size::new(200.0, 32.0));
//!
//! overlay.drag_value_changed(80.0);
//! overlay.end_drag_inside();
//! assert_eq!(*overlay.thumb().current(), "thumb-active");
//!
//! let layer = overlay.layer().expect("non-zero fill has a layer");
//! assert_eq!(layer.rect.width(), 160.0);
//!
//! let mut painter = PaintRecorder::new();
//! overlay.draw(&mut painter);
//! assert_eq!(painter.gradients().count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod overlay;
mod style;
mod thumb;

pub use overlay::{GradientLayer, GradientOverlay, OverlayPainter};
pub use style::OverlayStyle;
pub use thumb::ThumbImage;
