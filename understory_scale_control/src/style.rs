// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use understory_scale::MarkKind;

/// Colors and edge placement for drawn marks.
#[derive(Clone, Copy, Debug)]
pub struct MarkStyle {
    /// Color of major marks.
    pub mark_color: Color,
    /// Color of minor marks.
    pub sub_mark_color: Color,
    /// Emphasis color for marks the fill has reached, if emphasis is enabled.
    pub selected_color: Option<Color>,
    /// Draw marks hanging from the top edge.
    pub draw_top: bool,
    /// Draw marks standing on the bottom edge.
    pub draw_bottom: bool,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self {
            mark_color: Color::from_rgb8(0x33, 0x33, 0x33),
            sub_mark_color: Color::from_rgb8(0x99, 0x99, 0x99),
            selected_color: None,
            draw_top: true,
            draw_bottom: true,
        }
    }
}

impl MarkStyle {
    /// Returns this style with emphasis for selected marks in `color`.
    #[must_use]
    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.selected_color = Some(color);
        self
    }

    /// Returns this style with the given edge flags.
    #[must_use]
    pub fn with_edges(mut self, top: bool, bottom: bool) -> Self {
        self.draw_top = top;
        self.draw_bottom = bottom;
        self
    }

    /// Color for a mark of `kind`, emphasized if `selected` and emphasis is on.
    #[must_use]
    pub fn color_for(&self, kind: MarkKind, selected: bool) -> Color {
        match (self.selected_color, selected) {
            (Some(emphasis), true) => emphasis,
            _ => match kind {
                MarkKind::Major => self.mark_color,
                MarkKind::Minor => self.sub_mark_color,
            },
        }
    }
}
