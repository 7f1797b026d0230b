// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing seam between a scale and its host renderer.

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::{Color, Gradient};

/// Host-side drawing service.
///
/// A control only ever asks for filled rectangles; the host maps them onto
/// whatever renderer it uses.
pub trait ScalePainter {
    /// Fill `rect` with a solid `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A recorded paint call.
#[derive(Clone, Debug)]
pub enum PaintOp {
    /// A solid rectangle fill.
    FillRect {
        /// Rectangle in control-local coordinates.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A gradient rectangle fill.
    FillGradient {
        /// Rectangle in control-local coordinates.
        rect: Rect,
        /// Gradient brush, positioned in control-local coordinates.
        gradient: Gradient,
    },
}

/// A painter that records every call, for tests and for hosts that replay
/// paint lists later.
#[derive(Clone, Debug, Default)]
pub struct PaintRecorder {
    /// Recorded calls, in order.
    pub ops: Vec<PaintOp>,
}

impl PaintRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Iterates the solid fills.
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::FillRect { rect, color } => Some((*rect, *color)),
            PaintOp::FillGradient { .. } => None,
        })
    }

    /// Iterates the gradient fills.
    pub fn gradients(&self) -> impl Iterator<Item = (Rect, &Gradient)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::FillGradient { rect, gradient } => Some((*rect, gradient)),
            PaintOp::FillRect { .. } => None,
        })
    }

    /// Records a gradient fill.
    ///
    /// Gradient layers are drawn by overlays rather than by the control
    /// itself, so this is not part of [`ScalePainter`].
    pub fn push_gradient(&mut self, rect: Rect, gradient: &Gradient) {
        self.ops.push(PaintOp::FillGradient {
            rect,
            gradient: gradient.clone(),
        });
    }
}

impl ScalePainter for PaintRecorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect { rect, color });
    }
}
