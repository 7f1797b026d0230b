// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Size;
use understory_scale::{
    FillMapper, MarkEdge, MarkMetrics, ScaleConfig, ScaleGeometry, is_drawable,
};

use crate::drag::{DragPhase, DragRelease, ValueDrag};
use crate::paint::ScalePainter;
use crate::style::MarkStyle;

/// Notification produced by a [`ScaleControl`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleEvent {
    /// The selected value changed by programmatic set or by re-clamping after
    /// a configuration change, or a drag update was applied. Drag updates
    /// report even when they round to the current value.
    ValueChanged(i64),
    /// A drag ended with the pointer inside the control.
    TouchUpInside(i64),
    /// A drag ended with the pointer outside the control.
    TouchUpOutside(i64),
    /// The scale configuration, metrics, or style changed.
    ConfigurationChanged,
}

/// Handle returned by [`ScaleControl::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(&ScaleEvent)>;

/// A tick-mark scale with a draggable selected value.
///
/// The control owns its [`ScaleGeometry`] and the selected value, which is
/// kept in `[mark_value_start, maximum_allowed_value]` across every mutation.
/// It never draws on its own: mutations request a redraw that the host picks
/// up through [`take_redraw`](Self::take_redraw), then calls
/// [`draw`](Self::draw) with its painter.
pub struct ScaleControl {
    geometry: ScaleGeometry,
    style: MarkStyle,
    value: i64,
    drag: ValueDrag,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u32,
    needs_redraw: bool,
    value_revision: u64,
    drag_revision: u64,
}

impl fmt::Debug for ScaleControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleControl")
            .field("geometry", &self.geometry)
            .field("style", &self.style)
            .field("value", &self.value)
            .field("drag", &self.drag)
            .field("listeners", &self.listeners.len())
            .field("next_listener", &self.next_listener)
            .field("needs_redraw", &self.needs_redraw)
            .field("value_revision", &self.value_revision)
            .field("drag_revision", &self.drag_revision)
            .finish()
    }
}

impl Default for ScaleControl {
    fn default() -> Self {
        Self::new(ScaleConfig::default())
    }
}

impl ScaleControl {
    /// Creates a control over `config`, selecting the midpoint of its range.
    #[must_use]
    pub fn new(config: ScaleConfig) -> Self {
        Self {
            geometry: ScaleGeometry::new(config),
            style: MarkStyle::default(),
            value: config.midpoint_value(),
            drag: ValueDrag::default(),
            listeners: Vec::new(),
            next_listener: 0,
            needs_redraw: true,
            value_revision: 0,
            drag_revision: 0,
        }
    }

    /// Returns this control with the given mark metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: MarkMetrics) -> Self {
        self.geometry.set_metrics(metrics);
        self
    }

    /// Returns this control with the given mark style.
    #[must_use]
    pub fn with_style(mut self, style: MarkStyle) -> Self {
        self.style = style;
        self
    }

    /// The layout engine.
    #[must_use]
    pub fn geometry(&self) -> &ScaleGeometry {
        &self.geometry
    }

    /// The value/layout configuration.
    #[must_use]
    pub fn config(&self) -> &ScaleConfig {
        self.geometry.config()
    }

    /// The mark style.
    #[must_use]
    pub fn style(&self) -> &MarkStyle {
        &self.style
    }

    /// A fill mapper over the current geometry.
    #[must_use]
    pub fn fill_mapper(&self) -> FillMapper<'_> {
        self.geometry.fill_mapper()
    }

    /// Replaces the configuration.
    ///
    /// The selected value is re-clamped into the new range, a redraw is
    /// requested and [`ScaleEvent::ConfigurationChanged`] is emitted.
    pub fn set_config(&mut self, config: ScaleConfig) {
        self.update_config(|current| *current = config);
    }

    /// Edits the configuration in place; see [`set_config`](Self::set_config).
    ///
    /// ```
    /// use understory_scale_control::ScaleControl;
    ///
    /// let mut control = ScaleControl::default();
    /// control.set_selected_value(90);
    /// control.update_config(|config| config.set_mark_count(5));
    /// assert_eq!(control.maximum_value(), 40);
    /// assert_eq!(control.selected_value(), 40);
    /// ```
    pub fn update_config(&mut self, edit: impl FnOnce(&mut ScaleConfig)) {
        edit(self.geometry.config_mut());
        let config = *self.geometry.config();
        tracing::debug!(
            start = config.mark_value_start(),
            interval = config.mark_value_interval(),
            marks = config.effective_mark_count(),
            sub_marks = config.sub_mark_count(),
            buffer = config.sub_mark_buffer_count(),
            "scale configuration changed"
        );
        self.emit(ScaleEvent::ConfigurationChanged);
        self.apply_value(self.value, false);
        self.needs_redraw = true;
    }

    /// Replaces the mark metrics and requests a redraw.
    pub fn set_metrics(&mut self, metrics: MarkMetrics) {
        self.geometry.set_metrics(metrics);
        self.needs_redraw = true;
        self.emit(ScaleEvent::ConfigurationChanged);
    }

    /// Replaces the mark style and requests a redraw.
    pub fn set_style(&mut self, style: MarkStyle) {
        self.style = style;
        self.needs_redraw = true;
        self.emit(ScaleEvent::ConfigurationChanged);
    }

    /// Smallest selectable value.
    #[must_use]
    pub fn minimum_value(&self) -> i64 {
        self.config().mark_value_start()
    }

    /// Largest selectable value.
    #[must_use]
    pub fn maximum_value(&self) -> i64 {
        self.config().maximum_allowed_value()
    }

    /// The selected value.
    #[must_use]
    pub fn selected_value(&self) -> i64 {
        self.value
    }

    /// Selects `value`, clamped into the allowed range.
    ///
    /// Returns `true` if the selection changed, in which case a redraw is
    /// requested and [`ScaleEvent::ValueChanged`] is emitted.
    pub fn set_selected_value(&mut self, value: i64) -> bool {
        self.apply_value(value, false)
    }

    /// Number of times the selected value has changed.
    #[must_use]
    pub fn value_revision(&self) -> u64 {
        self.value_revision
    }

    /// Number of drag updates accepted so far, whether or not they moved the
    /// value. Programmatic sets and re-clamping leave it alone.
    #[must_use]
    pub fn drag_revision(&self) -> u64 {
        self.drag_revision
    }

    /// Width of the filled region for the selected value on a control
    /// `total_width` pixels wide.
    #[must_use]
    pub fn fill_width(&self, total_width: f64) -> f64 {
        self.fill_mapper().fill_width(self.value, total_width)
    }

    /// Number of slots, from the left, drawn in the emphasis color.
    ///
    /// Always `0` when the style has no emphasis color.
    #[must_use]
    pub fn selected_mark_count(&self) -> u32 {
        if self.style.selected_color.is_none() {
            return 0;
        }
        self.fill_mapper().selected_mark_count(self.value)
    }

    /// Returns `true` if a redraw has been requested since the last
    /// [`take_redraw`](Self::take_redraw).
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Requests a redraw; repeated requests coalesce.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Clears and returns the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Registers a listener for every subsequent [`ScaleEvent`].
    pub fn add_listener(&mut self, listener: impl FnMut(&ScaleEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Current interaction phase.
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Begins a drag from the selected value.
    ///
    /// Calling this while already dragging restarts the drag from the
    /// current value.
    pub fn begin_drag(&mut self) {
        tracing::trace!(value = self.value, "scale drag started");
        self.drag.start(self.value);
    }

    /// Feeds a value reported by the host during a drag.
    ///
    /// The value is rounded and clamped. Every accepted update requests a
    /// redraw and emits [`ScaleEvent::ValueChanged`], even when it rounds to
    /// the current value. An update while idle begins a drag implicitly;
    /// non-finite values are dropped. Returns `true` if the selection changed.
    pub fn drag_value_changed(&mut self, reported: f64) -> bool {
        if !reported.is_finite() {
            tracing::warn!(reported, "dropping non-finite drag value");
            return false;
        }
        if !self.drag.is_dragging() {
            self.begin_drag();
        }
        if let Some(delta) = self.drag.update(reported) {
            tracing::trace!(reported, delta, "scale drag update");
        }
        self.drag_revision += 1;
        let lo = self.minimum_value() as f64;
        let hi = self.maximum_value() as f64;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the rounded value is clamped into the i64 selectable range"
        )]
        let value = reported.round().clamp(lo, hi) as i64;
        self.apply_value(value, true)
    }

    /// Feeds a pointer position, in pixels from the control's left edge, on a
    /// control `total_width` pixels wide.
    ///
    /// For hosts that report positions rather than values.
    pub fn drag_to_offset(&mut self, x: f64, total_width: f64) -> bool {
        if !x.is_finite() {
            tracing::warn!(x, "dropping non-finite drag position");
            return false;
        }
        let value = self.fill_mapper().value_at_width(x, total_width);
        self.drag_value_changed(value as f64)
    }

    /// Ends a drag with the pointer inside the control.
    ///
    /// Emits [`ScaleEvent::TouchUpInside`]; returns `false` (and emits
    /// nothing) if no drag was active.
    pub fn end_drag_inside(&mut self) -> bool {
        self.end_drag(DragRelease::Inside)
    }

    /// Ends a drag with the pointer outside the control.
    ///
    /// Emits [`ScaleEvent::TouchUpOutside`]; returns `false` (and emits
    /// nothing) if no drag was active.
    pub fn end_drag_outside(&mut self) -> bool {
        self.end_drag(DragRelease::Outside)
    }

    /// Ends a drag, reporting where it was released.
    pub fn end_drag(&mut self, release: DragRelease) -> bool {
        let Some(start) = self.drag.end() else {
            return false;
        };
        let inside = release == DragRelease::Inside;
        tracing::trace!(from = start, to = self.value, inside, "scale drag ended");
        let event = match release {
            DragRelease::Inside => ScaleEvent::TouchUpInside(self.value),
            DragRelease::Outside => ScaleEvent::TouchUpOutside(self.value),
        };
        self.emit(event);
        true
    }

    /// Draws every mark slot for a control of `size` into `painter`.
    ///
    /// Issues one [`ScalePainter::fill_rect`] per slot and enabled edge, left
    /// to right, top edge first. Sizes without a drawable area draw nothing.
    pub fn draw(&self, size: Size, painter: &mut impl ScalePainter) {
        if !is_drawable(size) {
            return;
        }
        let selected = self.selected_mark_count();
        let edges = [
            (self.style.draw_top, MarkEdge::Top),
            (self.style.draw_bottom, MarkEdge::Bottom),
        ];
        for slot in self.geometry.marks(size.width) {
            let color = self.style.color_for(slot.kind, slot.index < selected);
            for (_, edge) in edges.iter().filter(|(enabled, _)| *enabled) {
                if let Some(rect) = self.geometry.mark_rect(slot.index, size, *edge) {
                    painter.fill_rect(rect, color);
                }
            }
        }
    }

    /// Clamps and stores `value`. Unchanged values are only announced when
    /// `always_notify` is set.
    fn apply_value(&mut self, value: i64, always_notify: bool) -> bool {
        let clamped = self.config().clamp_value(value);
        let changed = clamped != self.value;
        if !changed && !always_notify {
            return false;
        }
        if changed {
            tracing::trace!(from = self.value, to = clamped, "scale value changed");
            self.value = clamped;
            self.value_revision += 1;
        }
        self.needs_redraw = true;
        self.emit(ScaleEvent::ValueChanged(clamped));
        changed
    }

    fn emit(&mut self, event: ScaleEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}
