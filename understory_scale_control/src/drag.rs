// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value drag tracking: follow a continuous value stream reported by the host.
//!
//! ## Usage
//!
//! 1) Start a drag with [`ValueDrag::start`], passing the value selected at
//!    that moment.
//! 2) On each host update, call [`ValueDrag::update`] with the reported
//!    (unrounded) value to get the change since the previous report.
//! 3) End the drag with [`ValueDrag::end`], which yields the starting value.
//!
//! ## Minimal example
//!
//! ```
//! use understory_scale_control::drag::{DragPhase, ValueDrag};
//!
//! let mut drag = ValueDrag::default();
//! assert_eq!(drag.phase(), DragPhase::Idle);
//!
//! drag.start(40);
//! assert_eq!(drag.phase(), DragPhase::Dragging);
//!
//! assert_eq!(drag.update(43.5), Some(3.5));
//! assert_eq!(drag.update(41.0), Some(-2.5));
//!
//! assert_eq!(drag.end(), Some(40));
//! assert_eq!(drag.phase(), DragPhase::Idle);
//! ```

/// Interaction phase of a scale control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// The host is streaming values.
    Dragging,
}

/// Where the pointer was when a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragRelease {
    /// Released within the control's bounds; usually confirms the gesture.
    Inside,
    /// Released outside the control's bounds; hosts may treat this as cancel.
    Outside,
}

/// Tracks a drag over the value axis.
#[derive(Debug, Clone, Default, Copy)]
pub struct ValueDrag {
    /// Selected value when the drag started.
    pub start_value: Option<i64>,
    /// Last value reported by the host during the drag.
    pub last_reported: Option<f64>,
}

impl ValueDrag {
    /// Start tracking a new drag from `value`.
    pub fn start(&mut self, value: i64) {
        self.start_value = Some(value);
        self.last_reported = None;
    }

    /// Record a reported value, returning its change since the last report.
    ///
    /// The first report of a drag has nothing to compare against and is
    /// measured from the starting value. Returns `None` when idle.
    pub fn update(&mut self, reported: f64) -> Option<f64> {
        let start = self.start_value?;
        let previous = self.last_reported.unwrap_or(start as f64);
        self.last_reported = Some(reported);
        Some(reported - previous)
    }

    /// End the current drag and reset state, returning the starting value.
    pub fn end(&mut self) -> Option<i64> {
        self.last_reported = None;
        self.start_value.take()
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_value.is_some()
    }

    /// Current interaction phase.
    pub fn phase(&self) -> DragPhase {
        if self.is_dragging() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }
}
