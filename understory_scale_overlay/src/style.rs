// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::{Color, ColorStop, ColorStops};

/// Appearance of a [`GradientOverlay`](crate::GradientOverlay).
#[derive(Clone, Debug)]
pub struct OverlayStyle {
    /// Gradient stops across the filled part of the control.
    ///
    /// The gradient is stretched over the fill, so the last stop always sits
    /// at the fill's right edge.
    pub stops: ColorStops,
    /// Color of the panel drawn beneath the gradient, if any.
    pub background: Option<Color>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_colors(&[
            Color::from_rgb8(0x4f, 0xc3, 0xf7),
            Color::from_rgb8(0x1e, 0x88, 0xe5),
        ])
        .with_background(Color::from_rgb8(0xee, 0xee, 0xee))
    }
}

impl OverlayStyle {
    /// A style with `colors` spread evenly from left to right and no
    /// background panel.
    ///
    /// A single color produces a solid fill; no colors produce an empty stop
    /// list.
    #[must_use]
    pub fn from_colors(colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops: Vec<ColorStop> = colors
            .iter()
            .enumerate()
            .map(|(i, color)| ColorStop::from((i as f32 / last, *color)))
            .collect();
        Self {
            stops: ColorStops::from(stops.as_slice()),
            background: None,
        }
    }

    /// Returns this style with a background panel in `color`.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}
