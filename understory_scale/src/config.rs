// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Number of major marks used when a configuration asks for zero.
pub const DEFAULT_MARK_COUNT: u32 = 10;

/// Value and layout parameters of a tick-mark scale.
///
/// Fields are private so that every read goes through a normalizing getter:
/// a configuration that was deserialized or assembled with out-of-range
/// numbers still yields a drawable scale. Nothing here ever reports an error.
///
/// The selected value of a control built on this configuration always lies in
/// `[mark_value_start(), maximum_allowed_value()]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScaleConfig {
    mark_value_start: i64,
    mark_value_interval: i64,
    mark_count: u32,
    sub_mark_count: u32,
    sub_mark_buffer_count: u32,
    mark_start_from: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            mark_value_start: 0,
            mark_value_interval: 10,
            mark_count: 11,
            sub_mark_count: 4,
            sub_mark_buffer_count: 0,
            mark_start_from: 0.0,
        }
    }
}

impl ScaleConfig {
    /// Creates a configuration with the default layout.
    ///
    /// The default is eleven major marks from `0` to `100` with four sub-marks
    /// between each pair and no buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this configuration with the given first major mark value.
    #[must_use]
    pub fn with_mark_value_start(mut self, start: i64) -> Self {
        self.set_mark_value_start(start);
        self
    }

    /// Returns this configuration with the given value delta between major marks.
    #[must_use]
    pub fn with_mark_value_interval(mut self, interval: i64) -> Self {
        self.set_mark_value_interval(interval);
        self
    }

    /// Returns this configuration with the given number of major marks.
    #[must_use]
    pub fn with_mark_count(mut self, count: u32) -> Self {
        self.set_mark_count(count);
        self
    }

    /// Returns this configuration with the given number of sub-marks per gap.
    #[must_use]
    pub fn with_sub_mark_count(mut self, count: u32) -> Self {
        self.set_sub_mark_count(count);
        self
    }

    /// Returns this configuration with the given number of buffer slots per end.
    #[must_use]
    pub fn with_sub_mark_buffer_count(mut self, count: u32) -> Self {
        self.set_sub_mark_buffer_count(count);
        self
    }

    /// Returns this configuration with the given left inset, in pixels.
    #[must_use]
    pub fn with_mark_start_from(mut self, inset: f64) -> Self {
        self.set_mark_start_from(inset);
        self
    }

    /// Value of the first major mark. Never negative.
    #[must_use]
    pub fn mark_value_start(&self) -> i64 {
        self.mark_value_start.max(0)
    }

    /// Sets the value of the first major mark; negative values become `0`.
    pub fn set_mark_value_start(&mut self, start: i64) {
        self.mark_value_start = start.max(0);
    }

    /// Value delta between consecutive major marks. Always at least `1`.
    #[must_use]
    pub fn mark_value_interval(&self) -> i64 {
        self.mark_value_interval.max(1)
    }

    /// Sets the value delta between major marks; values below `1` become `1`.
    pub fn set_mark_value_interval(&mut self, interval: i64) {
        self.mark_value_interval = interval.max(1);
    }

    /// The configured number of major marks, as stored.
    ///
    /// This may be `0`; layout code should use
    /// [`effective_mark_count`](Self::effective_mark_count).
    #[must_use]
    pub fn mark_count(&self) -> u32 {
        self.mark_count
    }

    /// Sets the number of major marks. `0` selects [`DEFAULT_MARK_COUNT`].
    pub fn set_mark_count(&mut self, count: u32) {
        self.mark_count = count;
    }

    /// Number of major marks used for layout: the configured count, or
    /// [`DEFAULT_MARK_COUNT`] if it is zero.
    #[must_use]
    pub fn effective_mark_count(&self) -> u32 {
        if self.mark_count == 0 {
            DEFAULT_MARK_COUNT
        } else {
            self.mark_count
        }
    }

    /// Number of minor marks inserted between each pair of major marks.
    #[must_use]
    pub fn sub_mark_count(&self) -> u32 {
        self.sub_mark_count
    }

    /// Sets the number of minor marks between each pair of major marks.
    pub fn set_sub_mark_count(&mut self, count: u32) {
        self.sub_mark_count = count;
    }

    /// Number of minor slots reserved before the first and after the last
    /// major mark.
    #[must_use]
    pub fn sub_mark_buffer_count(&self) -> u32 {
        self.sub_mark_buffer_count
    }

    /// Sets the number of buffer slots at each end of the scale.
    pub fn set_sub_mark_buffer_count(&mut self, count: u32) {
        self.sub_mark_buffer_count = count;
    }

    /// Left inset of the first slot, in pixels. Never negative or NaN.
    #[must_use]
    pub fn mark_start_from(&self) -> f64 {
        if self.mark_start_from.is_finite() && self.mark_start_from > 0.0 {
            self.mark_start_from
        } else {
            0.0
        }
    }

    /// Sets the left inset in pixels; negative or non-finite input becomes `0`.
    pub fn set_mark_start_from(&mut self, inset: f64) {
        self.mark_start_from = if inset.is_finite() { inset.max(0.0) } else { 0.0 };
    }

    /// The largest value the scale can select:
    /// `start + (mark_count - 1) * interval`, saturating on overflow.
    #[must_use]
    pub fn maximum_allowed_value(&self) -> i64 {
        let gaps = i64::from(self.effective_mark_count() - 1);
        self.mark_value_start()
            .saturating_add(gaps.saturating_mul(self.mark_value_interval()))
    }

    /// Clamps `value` into `[mark_value_start(), maximum_allowed_value()]`.
    #[must_use]
    pub fn clamp_value(&self, value: i64) -> i64 {
        value.clamp(self.mark_value_start(), self.maximum_allowed_value())
    }

    /// The value a freshly created control selects: the midpoint of the
    /// allowed range, rounded toward the start.
    #[must_use]
    pub fn midpoint_value(&self) -> i64 {
        let start = self.mark_value_start();
        start + (self.maximum_allowed_value() - start) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mark_count_falls_back_to_default() {
        let config = ScaleConfig::new().with_mark_count(0);
        assert_eq!(config.mark_count(), 0);
        assert_eq!(config.effective_mark_count(), DEFAULT_MARK_COUNT);
        assert_eq!(config.maximum_allowed_value(), 90);
    }

    #[test]
    fn setters_normalize_invalid_input() {
        let config = ScaleConfig::new()
            .with_mark_value_start(-5)
            .with_mark_value_interval(0)
            .with_mark_start_from(f64::NAN);
        assert_eq!(config.mark_value_start(), 0);
        assert_eq!(config.mark_value_interval(), 1);
        assert_eq!(config.mark_start_from(), 0.0);

        let config = ScaleConfig::new().with_mark_start_from(-3.0);
        assert_eq!(config.mark_start_from(), 0.0);
    }

    #[test]
    fn maximum_allowed_value_follows_interval() {
        let config = ScaleConfig::new()
            .with_mark_value_start(0)
            .with_mark_value_interval(10)
            .with_mark_count(11);
        assert_eq!(config.maximum_allowed_value(), 100);

        let config = config.with_mark_value_start(20).with_mark_count(1);
        assert_eq!(config.maximum_allowed_value(), 20);
    }

    #[test]
    fn maximum_allowed_value_saturates() {
        let config = ScaleConfig::new()
            .with_mark_value_start(i64::MAX - 1)
            .with_mark_value_interval(i64::MAX)
            .with_mark_count(u32::MAX);
        assert_eq!(config.maximum_allowed_value(), i64::MAX);
    }

    #[test]
    fn clamp_value_snaps_to_nearest_bound() {
        let config = ScaleConfig::new().with_mark_value_start(10);
        assert_eq!(config.maximum_allowed_value(), 110);
        assert_eq!(config.clamp_value(-40), 10);
        assert_eq!(config.clamp_value(500), 110);
        assert_eq!(config.clamp_value(55), 55);
    }

    #[test]
    fn midpoint_rounds_toward_start() {
        assert_eq!(ScaleConfig::new().midpoint_value(), 50);
        let config = ScaleConfig::new()
            .with_mark_value_start(3)
            .with_mark_value_interval(1)
            .with_mark_count(4);
        assert_eq!(config.midpoint_value(), 4);
    }
}
