// SPDX-License-Identifier: MPL-2.0
//! Frame-to-frame transition of the toast card.

use super::spring::Spring;
use iced::Rectangle;
use std::time::Duration;

/// An in-flight move of a rectangle from `from` to `to` along a spring curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: Rectangle,
    to: Rectangle,
    spring: Spring,
    elapsed: Duration,
}

impl Transition {
    #[must_use]
    pub fn new(from: Rectangle, to: Rectangle, spring: Spring) -> Self {
        Self {
            from,
            to,
            spring,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the clock by `dt`. Returns `true` once the transition has
    /// reached its destination.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.is_finished()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.spring.is_finished(self.elapsed)
    }

    /// Changes the destination without restarting the clock.
    pub fn retarget(&mut self, to: Rectangle) {
        self.to = to;
    }

    #[must_use]
    pub fn destination(&self) -> Rectangle {
        self.to
    }

    /// Current rectangle. Exactly the destination once finished.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        if self.is_finished() {
            return self.to;
        }
        let t = self.spring.progress(self.elapsed) as f32;
        lerp_rect(self.from, self.to, t)
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (b - a).mul_add(t, a)
}

fn lerp_rect(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    Rectangle {
        x: lerp(from.x, to.x, t),
        y: lerp(from.y, to.y, t),
        width: lerp(from.width, to.width, t),
        height: lerp(from.height, to.height, t),
    }
}
