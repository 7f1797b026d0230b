// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use peniko::{Gradient, GradientKind, LinearGradientPosition};
use understory_scale::is_drawable;
use understory_scale_control::{PaintRecorder, ScaleControl, ScalePainter};

use crate::style::OverlayStyle;
use crate::thumb::ThumbImage;

/// Host drawing service for overlays: solid fills plus gradient fills.
pub trait OverlayPainter: ScalePainter {
    /// Fill `rect` with `gradient`, which is positioned in the same
    /// coordinate space as `rect`.
    fn fill_gradient(&mut self, rect: Rect, gradient: &Gradient);
}

impl OverlayPainter for PaintRecorder {
    fn fill_gradient(&mut self, rect: Rect, gradient: &Gradient) {
        self.push_gradient(rect, gradient);
    }
}

/// The gradient layer currently shown by an overlay.
#[derive(Clone, Debug)]
pub struct GradientLayer {
    /// Filled region, from the control's left edge to the fill width.
    pub rect: Rect,
    /// Brush for the region.
    pub gradient: Gradient,
}

/// A [`ScaleControl`] with a gradient fill up to the selected value.
///
/// The overlay owns its control. Every [`refresh`](Self::refresh) (and so
/// every [`draw`](Self::draw)) recomputes the gradient layer from the
/// control's current value and the overlay's size: a zero fill width removes
/// the layer, anything else recreates it at the new width.
///
/// Input can go through the forwarding methods here or straight to
/// [`control_mut`](Self::control_mut). The thumb follows the control's drag
/// revision either way, so only user drags activate it; programmatic sets
/// and configuration changes leave it alone.
#[derive(Debug)]
pub struct GradientOverlay<I> {
    control: ScaleControl,
    style: OverlayStyle,
    size: Size,
    layer: Option<GradientLayer>,
    thumb: ThumbImage<I>,
    seen_drag_revision: u64,
}

impl<I> GradientOverlay<I> {
    /// Creates an overlay around `control` with the default style and an
    /// empty size.
    pub fn new(control: ScaleControl, thumb: ThumbImage<I>) -> Self {
        let seen_drag_revision = control.drag_revision();
        Self {
            control,
            style: OverlayStyle::default(),
            size: Size::ZERO,
            layer: None,
            thumb,
            seen_drag_revision,
        }
    }

    /// Returns this overlay with `style`.
    #[must_use]
    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    /// The wrapped control.
    pub fn control(&self) -> &ScaleControl {
        &self.control
    }

    /// Mutable access to the wrapped control.
    pub fn control_mut(&mut self) -> &mut ScaleControl {
        &mut self.control
    }

    /// The overlay style.
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Replaces the style and requests a redraw.
    pub fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
        self.control.request_redraw();
        self.refresh();
    }

    /// The overlay's size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resizes the overlay, requesting a redraw if the size changed.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.control.request_redraw();
        self.refresh();
    }

    /// The gradient layer, if the fill is currently non-empty.
    pub fn layer(&self) -> Option<&GradientLayer> {
        self.layer.as_ref()
    }

    /// The background panel rectangle, if a background color is set and the
    /// overlay has a drawable size.
    pub fn background_rect(&self) -> Option<Rect> {
        (self.style.background.is_some() && is_drawable(self.size)).then(|| self.size.to_rect())
    }

    /// Thumb image state.
    pub fn thumb(&self) -> &ThumbImage<I> {
        &self.thumb
    }

    /// Horizontal centre of the thumb: the end of the fill.
    pub fn thumb_center_x(&self) -> f64 {
        self.control.fill_width(self.size.width)
    }

    /// Selects `value` on the control and refreshes the layer.
    pub fn set_selected_value(&mut self, value: i64) -> bool {
        let changed = self.control.set_selected_value(value);
        self.refresh();
        changed
    }

    /// Forwards a drag value to the control and refreshes the layer.
    pub fn drag_value_changed(&mut self, reported: f64) -> bool {
        let changed = self.control.drag_value_changed(reported);
        self.refresh();
        changed
    }

    /// Forwards a drag position to the control and refreshes the layer.
    pub fn drag_to_offset(&mut self, x: f64) -> bool {
        let changed = self.control.drag_to_offset(x, self.size.width);
        self.refresh();
        changed
    }

    /// Ends a drag inside the control.
    pub fn end_drag_inside(&mut self) -> bool {
        self.control.end_drag_inside()
    }

    /// Ends a drag outside the control.
    pub fn end_drag_outside(&mut self) -> bool {
        self.control.end_drag_outside()
    }

    /// Recomputes the thumb state and the gradient layer.
    pub fn refresh(&mut self) {
        let revision = self.control.drag_revision();
        if revision != self.seen_drag_revision {
            self.seen_drag_revision = revision;
            if self.thumb.activate() {
                tracing::trace!("scale thumb activated");
            }
        }

        let width = if is_drawable(self.size) {
            self.control.fill_width(self.size.width)
        } else {
            0.0
        };
        if width <= 0.0 {
            if self.layer.take().is_some() {
                tracing::debug!("scale gradient layer removed");
            }
            return;
        }

        if self.layer.is_none() {
            tracing::debug!(width, "scale gradient layer created");
        }
        let gradient = Gradient {
            kind: GradientKind::Linear(LinearGradientPosition::new((0.0, 0.0), (width, 0.0))),
            stops: self.style.stops.clone(),
            ..Gradient::default()
        };
        self.layer = Some(GradientLayer {
            rect: Rect::new(0.0, 0.0, width, self.size.height),
            gradient,
        });
    }

    /// Refreshes, then paints the background panel, the gradient layer and
    /// the control's marks, in that order.
    pub fn draw(&mut self, painter: &mut impl OverlayPainter) {
        self.refresh();
        if let (Some(color), Some(rect)) = (self.style.background, self.background_rect()) {
            painter.fill_rect(rect, color);
        }
        if let Some(layer) = &self.layer {
            painter.fill_gradient(layer.rect, &layer.gradient);
        }
        self.control.draw(self.size, painter);
    }
}
