// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::config::ScaleConfig;
use crate::fill::FillMapper;

/// Classification of a mark slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A primary tick at a configured value interval.
    Major,
    /// Any slot that is not major: ticks between major marks and the leading
    /// buffer. Trailing buffer slots keep the major period, so one lands on a
    /// major position whenever the buffer is at least `sub_mark_count + 1`
    /// slots long.
    Minor,
}

/// Which edge of the control a mark hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MarkEdge {
    /// Marks start at the top edge and extend downward.
    #[default]
    Top,
    /// Marks start at the bottom edge and extend upward.
    Bottom,
}

/// Pixel sizes of major and minor marks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarkMetrics {
    /// Width of a major mark.
    pub mark_width: f64,
    /// Height of a major mark.
    pub mark_height: f64,
    /// Width of a minor mark.
    pub sub_mark_width: f64,
    /// Height of a minor mark.
    pub sub_mark_height: f64,
}

impl Default for MarkMetrics {
    fn default() -> Self {
        Self {
            mark_width: 2.0,
            mark_height: 20.0,
            sub_mark_width: 1.0,
            sub_mark_height: 10.0,
        }
    }
}

impl MarkMetrics {
    /// Size of a mark of the given kind.
    #[must_use]
    pub fn size(&self, kind: MarkKind) -> Size {
        match kind {
            MarkKind::Major => Size::new(self.mark_width, self.mark_height),
            MarkKind::Minor => Size::new(self.sub_mark_width, self.sub_mark_height),
        }
    }
}

/// One drawable slot as produced by [`ScaleGeometry::marks`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkSlot {
    /// Slot index, left to right, in `0..total_marks()`.
    pub index: u32,
    /// Major or minor.
    pub kind: MarkKind,
    /// Left edge of the mark in pixels (already centred on the slot).
    pub offset: f64,
}

/// Mark layout engine.
///
/// Pure computation over a [`ScaleConfig`] and [`MarkMetrics`]: slot counts,
/// major/minor classification, and pixel offsets for a given width. It holds
/// no state beyond its configuration.
///
/// Layout left to right is: `sub_mark_buffer_count` buffer slots, the major
/// marks with `sub_mark_count` minor slots in every gap, then another
/// `sub_mark_buffer_count` buffer slots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleGeometry {
    config: ScaleConfig,
    metrics: MarkMetrics,
}

impl ScaleGeometry {
    /// Creates a geometry over `config` with default mark metrics.
    #[must_use]
    pub fn new(config: ScaleConfig) -> Self {
        Self {
            config,
            metrics: MarkMetrics::default(),
        }
    }

    /// Returns this geometry with the given mark metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: MarkMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// The value/layout configuration.
    #[must_use]
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect on the next layout query.
    pub fn set_config(&mut self, config: ScaleConfig) {
        self.config = config;
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut ScaleConfig {
        &mut self.config
    }

    /// The mark metrics.
    #[must_use]
    pub fn metrics(&self) -> &MarkMetrics {
        &self.metrics
    }

    /// Replaces the mark metrics.
    pub fn set_metrics(&mut self, metrics: MarkMetrics) {
        self.metrics = metrics;
    }

    /// A value-to-width mapper over this geometry.
    #[must_use]
    pub fn fill_mapper(&self) -> FillMapper<'_> {
        FillMapper::new(self)
    }

    /// Number of slots between (and including) the first and last major mark.
    ///
    /// Each of the `n - 1` gaps between major marks receives
    /// `sub_mark_count` minor slots.
    #[must_use]
    pub fn total_marks_excluding_buffer(&self) -> u32 {
        let n = self.config.effective_mark_count();
        let sub = self.config.sub_mark_count();
        if sub > 0 {
            n.saturating_add((n - 1).saturating_mul(sub))
        } else {
            n
        }
    }

    /// Number of drawable slots, buffers at both ends included.
    #[must_use]
    pub fn total_marks(&self) -> u32 {
        self.total_marks_excluding_buffer()
            .saturating_add(self.config.sub_mark_buffer_count().saturating_mul(2))
    }

    /// Pixel distance between the centres of adjacent slots.
    ///
    /// Returns `0.0` for single-slot layouts and for widths that leave no room
    /// after the insets; the single slot then sits at `mark_start_from`.
    #[must_use]
    pub fn distance_between_marks(&self, total_width: f64) -> f64 {
        let total = self.total_marks();
        if total <= 1 {
            return 0.0;
        }
        let usable = total_width - 2.0 * self.config.mark_start_from();
        if !usable.is_finite() || usable <= 0.0 {
            return 0.0;
        }
        usable / f64::from(total - 1)
    }

    /// Returns `true` if slot `index` holds a major mark.
    ///
    /// Leading buffer slots are never major. From the first major mark on,
    /// every `sub_mark_count + 1`-th slot is, trailing buffer included.
    #[must_use]
    pub fn is_major_mark(&self, index: u32) -> bool {
        let buffer = self.config.sub_mark_buffer_count();
        if index < buffer {
            return false;
        }
        let period = self.config.sub_mark_count().saturating_add(1);
        (index - buffer) % period == 0
    }

    /// Classification of slot `index`.
    #[must_use]
    pub fn mark_kind(&self, index: u32) -> MarkKind {
        if self.is_major_mark(index) {
            MarkKind::Major
        } else {
            MarkKind::Minor
        }
    }

    /// Width of the mark drawn in slot `index`.
    #[must_use]
    pub fn slot_width(&self, index: u32) -> f64 {
        self.metrics.size(self.mark_kind(index)).width
    }

    /// Centre line of slot `index`, in pixels from the left edge.
    #[must_use]
    pub fn nominal_position(&self, index: u32, total_width: f64) -> f64 {
        f64::from(index) * self.distance_between_marks(total_width) + self.config.mark_start_from()
    }

    /// Left edge of the mark in slot `index`; marks are centred on their
    /// nominal position.
    #[must_use]
    pub fn pixel_offset(&self, index: u32, total_width: f64) -> f64 {
        self.nominal_position(index, total_width) - self.slot_width(index) / 2.0
    }

    /// Width from the left edge up to the first major mark.
    ///
    /// With a buffer this is `(sub_mark_buffer_count + 1)` slot distances;
    /// without one it is the left inset.
    #[must_use]
    pub fn width_up_to_first_mark(&self, distance_between_marks: f64) -> f64 {
        let buffer = self.config.sub_mark_buffer_count();
        if buffer > 0 {
            f64::from(buffer.saturating_add(1)) * distance_between_marks
        } else {
            self.config.mark_start_from()
        }
    }

    /// Iterates every drawable slot for a control `total_width` pixels wide.
    pub fn marks(&self, total_width: f64) -> impl Iterator<Item = MarkSlot> + '_ {
        let distance = self.distance_between_marks(total_width);
        let inset = self.config.mark_start_from();
        (0..self.total_marks()).map(move |index| {
            let kind = self.mark_kind(index);
            let offset =
                f64::from(index) * distance + inset - self.metrics.size(kind).width / 2.0;
            MarkSlot {
                index,
                kind,
                offset,
            }
        })
    }

    /// Rectangle of the mark in slot `index` for a control of `size`, hanging
    /// from `edge`.
    ///
    /// Returns `None` for indices past the last slot or for a size with no
    /// drawable area.
    #[must_use]
    pub fn mark_rect(&self, index: u32, size: Size, edge: MarkEdge) -> Option<Rect> {
        if index >= self.total_marks() || !is_drawable(size) {
            return None;
        }
        let mark = self.metrics.size(self.mark_kind(index));
        let x = self.pixel_offset(index, size.width);
        let y = match edge {
            MarkEdge::Top => 0.0,
            MarkEdge::Bottom => size.height - mark.height,
        };
        Some(Rect::new(x, y, x + mark.width, y + mark.height))
    }
}

/// Returns `true` if `size` has a finite, positive area.
#[must_use]
pub fn is_drawable(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    fn geometry(start: i64, interval: i64, count: u32, sub: u32, buffer: u32) -> ScaleGeometry {
        ScaleGeometry::new(
            ScaleConfig::new()
                .with_mark_value_start(start)
                .with_mark_value_interval(interval)
                .with_mark_count(count)
                .with_sub_mark_count(sub)
                .with_sub_mark_buffer_count(buffer),
        )
    }

    #[test]
    fn counts_without_sub_marks() {
        let g = geometry(0, 10, 5, 0, 0);
        assert_eq!(g.total_marks_excluding_buffer(), 5);
        assert_eq!(g.total_marks(), 5);
    }

    #[test]
    fn counts_with_sub_marks_and_buffer() {
        let g = geometry(0, 10, 11, 9, 0);
        assert_eq!(g.total_marks_excluding_buffer(), 101);
        assert_eq!(g.total_marks(), 101);

        let g = geometry(0, 10, 3, 4, 2);
        assert_eq!(g.total_marks_excluding_buffer(), 11);
        assert_eq!(g.total_marks(), 15);
    }

    #[test]
    fn default_mark_count_applies_to_layout() {
        let g = geometry(0, 10, 0, 0, 0);
        assert_eq!(g.total_marks(), 10);
    }

    #[test]
    fn distance_divides_usable_width() {
        let g = geometry(0, 10, 11, 9, 0);
        assert_eq!(g.distance_between_marks(300.0), 3.0);

        let inset = ScaleGeometry::new(ScaleConfig::new().with_mark_start_from(10.0));
        // 11 majors + 10 gaps * 4 minors = 51 slots.
        assert_eq!(inset.distance_between_marks(220.0), 4.0);
    }

    #[test]
    fn single_mark_layout_has_no_spacing() {
        let g = geometry(5, 10, 1, 3, 0);
        assert_eq!(g.total_marks(), 1);
        assert_eq!(g.distance_between_marks(300.0), 0.0);
        assert_eq!(g.nominal_position(0, 300.0), 0.0);
        assert!(g.is_major_mark(0));
    }

    #[test]
    fn degenerate_widths_do_not_produce_nan() {
        let g = ScaleGeometry::new(ScaleConfig::new().with_mark_start_from(50.0));
        for width in [0.0, 40.0, 100.0, -10.0, f64::NAN, f64::INFINITY] {
            let d = g.distance_between_marks(width);
            assert_eq!(d, 0.0, "width {width} should collapse the layout");
        }
    }

    #[test]
    fn major_marks_follow_period_after_buffer() {
        let g = geometry(0, 10, 3, 2, 2);
        let kinds: Vec<bool> = (0..g.total_marks()).map(|i| g.is_major_mark(i)).collect();
        assert_eq!(
            kinds,
            [
                false, false, // leading buffer
                true, false, false, true, false, false, true, // marks
                false, false, // trailing buffer
            ]
        );
    }

    #[test]
    fn long_trailing_buffer_repeats_major_period() {
        let g = geometry(0, 10, 2, 1, 2);
        let kinds: Vec<bool> = (0..g.total_marks()).map(|i| g.is_major_mark(i)).collect();
        assert_eq!(kinds, [false, false, true, false, true, false, true]);
        assert_eq!(g.mark_kind(6), MarkKind::Major);
    }

    #[test]
    fn pixel_offset_centres_marks() {
        let g = geometry(0, 10, 3, 1, 0).with_metrics(MarkMetrics {
            mark_width: 4.0,
            mark_height: 20.0,
            sub_mark_width: 2.0,
            sub_mark_height: 10.0,
        });
        // Five slots across 100px: 25px apart.
        assert_eq!(g.pixel_offset(0, 100.0), -2.0);
        assert_eq!(g.pixel_offset(1, 100.0), 24.0);
        assert_eq!(g.pixel_offset(4, 100.0), 98.0);
    }

    #[test]
    fn width_up_to_first_mark_covers_buffer_plus_one_slot() {
        let g = geometry(0, 10, 3, 1, 2);
        assert_eq!(g.width_up_to_first_mark(5.0), 15.0);

        let g = ScaleGeometry::new(ScaleConfig::new().with_mark_start_from(7.0));
        assert_eq!(g.width_up_to_first_mark(5.0), 7.0);
    }

    #[test]
    fn marks_iterator_matches_point_queries() {
        let g = geometry(0, 5, 4, 2, 1);
        let slots: Vec<MarkSlot> = g.marks(240.0).collect();
        assert_eq!(slots.len(), g.total_marks() as usize);
        for slot in slots {
            assert_eq!(slot.kind, g.mark_kind(slot.index));
            assert_eq!(slot.offset, g.pixel_offset(slot.index, 240.0));
        }
    }

    #[test]
    fn mark_rect_hangs_from_requested_edge() {
        let g = geometry(0, 10, 2, 0, 0);
        let size = Size::new(100.0, 30.0);
        assert_eq!(
            g.mark_rect(1, size, MarkEdge::Top),
            Some(Rect::new(99.0, 0.0, 101.0, 20.0))
        );
        assert_eq!(
            g.mark_rect(1, size, MarkEdge::Bottom),
            Some(Rect::new(99.0, 10.0, 101.0, 30.0))
        );
        assert_eq!(g.mark_rect(2, size, MarkEdge::Top), None);
        assert_eq!(g.mark_rect(0, Size::ZERO, MarkEdge::Top), None);
    }
}
