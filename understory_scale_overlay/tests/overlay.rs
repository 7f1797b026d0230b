// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_scale_overlay` crate.
//!
//! These check how the gradient layer follows the control through value
//! changes, resizes and configuration edits.

use kurbo::{Rect, Size};
use peniko::Color;
use understory_scale::ScaleConfig;
use understory_scale_control::{PaintOp, PaintRecorder, ScaleControl, ScaleEvent};
use understory_scale_overlay::{GradientOverlay, OverlayStyle, ThumbImage};

fn buffered_overlay() -> GradientOverlay<u32> {
    let config = ScaleConfig::new()
        .with_mark_value_start(10)
        .with_mark_value_interval(10)
        .with_mark_count(5)
        .with_sub_mark_count(1)
        .with_sub_mark_buffer_count(2);
    let mut overlay = GradientOverlay::new(ScaleControl::new(config), ThumbImage::new(1, 2));
    // 13 slots, 12 gaps of 20px.
    overlay.set_size(Size::new(240.0, 30.0));
    overlay
}

#[test]
fn value_at_start_fills_runway() {
    let mut overlay = buffered_overlay();
    overlay.set_selected_value(10);
    let layer = overlay.layer().expect("runway fill is non-empty");
    // Two buffer slots plus one slot up to the first major mark.
    assert_eq!(layer.rect, Rect::new(0.0, 0.0, 60.0, 30.0));
}

#[test]
fn resize_rescales_layer() {
    let mut overlay = buffered_overlay();
    overlay.set_selected_value(50);
    let before = overlay.layer().map(|l| l.rect.width());

    overlay.control_mut().take_redraw();
    overlay.set_size(Size::new(480.0, 30.0));
    let after = overlay.layer().map(|l| l.rect.width());

    assert!(overlay.control().needs_redraw());
    assert_eq!(before.map(|w| w * 2.0), after);
}

#[test]
fn config_edit_is_picked_up_on_draw() {
    let mut overlay = buffered_overlay();
    overlay.set_selected_value(50);
    overlay
        .control_mut()
        .update_config(|config| config.set_mark_value_start(0));

    let mut painter = PaintRecorder::new();
    overlay.draw(&mut painter);
    let (rect, _) = painter.gradients().next().expect("gradient drawn");
    let expected = overlay.control().fill_width(240.0);
    assert_eq!(rect.width(), expected);
}

#[test]
fn background_is_optional() {
    let style = OverlayStyle::from_colors(&[Color::from_rgb8(0xff, 0, 0)]);
    let mut overlay = buffered_overlay().with_style(style);
    let mut painter = PaintRecorder::new();
    overlay.draw(&mut painter);

    assert!(overlay.background_rect().is_none());
    assert!(matches!(painter.ops.first(), Some(PaintOp::FillGradient { .. })));
}

#[test]
fn overlay_forwards_commit_events() {
    let mut overlay = buffered_overlay();
    let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&log);
    overlay
        .control_mut()
        .add_listener(move |event| sink.borrow_mut().push(*event));

    overlay.drag_to_offset(240.0);
    overlay.end_drag_outside();

    assert_eq!(
        *log.borrow(),
        [ScaleEvent::ValueChanged(50), ScaleEvent::TouchUpOutside(50)]
    );
    assert_eq!(*overlay.thumb().current(), 2);
}
