// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-to-width mapping for the filled part of a scale.
//!
//! A selected value falls into one of three regimes:
//!
//! - `0`: nothing is filled.
//! - `(0, mark_value_start]`: the value sits in the runway before the first
//!   major mark and the fill interpolates linearly across
//!   [`ScaleGeometry::width_up_to_first_mark`].
//! - `(mark_value_start, maximum_allowed_value]`: the fill covers the runway
//!   and interpolates linearly across the span of major marks.
//!
//! Both the continuous fill width and the discrete number of emphasized marks
//! are derived from the same [`FillProgress`], so the two never disagree about
//! where a regime boundary lies.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::geometry::ScaleGeometry;

/// Position of a value within the fill regimes.
///
/// The payload of [`Buffer`](Self::Buffer) and [`Range`](Self::Range) is the
/// proportion covered within that regime, in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillProgress {
    /// No fill.
    Empty,
    /// Inside the runway before the first major mark.
    Buffer(f64),
    /// Inside the span of major marks.
    Range(f64),
}

/// Maps selected values to fill widths over a [`ScaleGeometry`].
#[derive(Clone, Copy, Debug)]
pub struct FillMapper<'a> {
    geometry: &'a ScaleGeometry,
}

impl<'a> FillMapper<'a> {
    /// Creates a mapper over `geometry`.
    #[must_use]
    pub fn new(geometry: &'a ScaleGeometry) -> Self {
        Self { geometry }
    }

    /// The geometry this mapper reads.
    #[must_use]
    pub fn geometry(&self) -> &'a ScaleGeometry {
        self.geometry
    }

    /// Classifies `value` into a fill regime.
    ///
    /// Values above `maximum_allowed_value` cannot be selected on a control;
    /// they trip a debug assertion and otherwise saturate to a full fill.
    #[must_use]
    pub fn progress(&self, value: i64) -> FillProgress {
        let config = self.geometry.config();
        let start = config.mark_value_start();
        let max = config.maximum_allowed_value();
        if value <= 0 {
            return FillProgress::Empty;
        }
        if value <= start {
            // `start > 0` here since `value > 0`.
            return FillProgress::Buffer(value as f64 / start as f64);
        }
        debug_assert!(
            value <= max,
            "value {value} is above the maximum allowed value {max}"
        );
        if value >= max {
            return FillProgress::Range(1.0);
        }
        FillProgress::Range((value - start) as f64 / (max - start) as f64)
    }

    /// Width in pixels of the filled region for `value` on a control
    /// `total_width` pixels wide.
    #[must_use]
    pub fn fill_width(&self, value: i64, total_width: f64) -> f64 {
        let distance = self.geometry.distance_between_marks(total_width);
        let first = self.geometry.width_up_to_first_mark(distance);
        match self.progress(value) {
            FillProgress::Empty => 0.0,
            FillProgress::Buffer(t) => first * t,
            FillProgress::Range(t) => first + self.mark_span_slots() * distance * t,
        }
    }

    /// Number of slots, counted from the left, that the fill for `value`
    /// reaches.
    ///
    /// This is the discrete counterpart of [`fill_width`](Self::fill_width):
    /// the runway accounts for `sub_mark_buffer_count + 1` slots (up to and
    /// including the first major mark), and the span of major marks for the
    /// rest.
    #[must_use]
    pub fn selected_mark_count(&self, value: i64) -> u32 {
        let lead = self
            .geometry
            .config()
            .sub_mark_buffer_count()
            .saturating_add(1);
        match self.progress(value) {
            FillProgress::Empty => 0,
            FillProgress::Buffer(t) => round_to_count(t * f64::from(lead)),
            FillProgress::Range(t) => {
                lead.saturating_add(round_to_count(t * self.mark_span_slots()))
            }
        }
    }

    /// The value whose fill ends closest to `x` on a control `total_width`
    /// pixels wide, clamped into the selectable range.
    ///
    /// Positions inside the runway select the first major mark's value.
    #[must_use]
    pub fn value_at_width(&self, x: f64, total_width: f64) -> i64 {
        let config = self.geometry.config();
        let start = config.mark_value_start();
        let max = config.maximum_allowed_value();
        let distance = self.geometry.distance_between_marks(total_width);
        let span = self.mark_span_slots() * distance;
        if !x.is_finite() || span <= 0.0 {
            return start;
        }
        let first = self.geometry.width_up_to_first_mark(distance);
        let t = ((x - first) / span).clamp(0.0, 1.0);
        let steps = (t * (max - start) as f64).round();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "steps lies in [0, max - start] and the result is clamped"
        )]
        let value = start.saturating_add(steps as i64);
        config.clamp_value(value)
    }

    fn mark_span_slots(&self) -> f64 {
        f64::from(self.geometry.total_marks_excluding_buffer() - 1)
    }
}

fn round_to_count(slots: f64) -> u32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "slot counts are bounded by total_marks, a u32"
    )]
    {
        slots.round().max(0.0) as u32
    }
}
