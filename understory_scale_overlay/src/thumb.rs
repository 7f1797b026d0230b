// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thumb image state: an initial image that switches, once, to an active one.
///
/// `I` is whatever handle the host uses for images. The switch happens the
/// first time the user drags the value and is never undone.
#[derive(Clone, Debug)]
pub struct ThumbImage<I> {
    initial: I,
    active: I,
    activated: bool,
}

impl<I> ThumbImage<I> {
    /// Creates a thumb showing `initial` until first activated.
    pub fn new(initial: I, active: I) -> Self {
        Self {
            initial,
            active,
            activated: false,
        }
    }

    /// The image to draw now.
    pub fn current(&self) -> &I {
        if self.activated {
            &self.active
        } else {
            &self.initial
        }
    }

    /// Returns `true` once the thumb has switched to its active image.
    pub fn is_active(&self) -> bool {
        self.activated
    }

    /// Switches to the active image. Returns `true` if this call flipped it.
    pub fn activate(&mut self) -> bool {
        !core::mem::replace(&mut self.activated, true)
    }
}
