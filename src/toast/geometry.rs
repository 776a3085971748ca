// SPDX-License-Identifier: MPL-2.0
//! Toast card geometry.
//!
//! Both rectangles share the same horizontal placement: centered in the
//! screen bounds and as wide as the measured text plus padding. They differ
//! only in `y`. The resting rectangle sits a fixed distance from the chosen
//! edge; the start rectangle is fully outside the visible area on that edge.

use super::request::Position;
use crate::config::LayoutConfig;
use iced::{Rectangle, Size};

/// Form factor of the device, used only to pick the maximum text width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Handheld,
    Tablet,
}

impl DeviceClass {
    /// Maximum width of the wrapped toast text for this form factor.
    #[must_use]
    pub fn max_text_width(self, layout: &LayoutConfig) -> f32 {
        match self {
            DeviceClass::Handheld => layout.max_width_handheld,
            DeviceClass::Tablet => layout.max_width_tablet,
        }
    }
}

/// Screen geometry the toast is laid out against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Size of the screen (or window) the toast floats over.
    pub bounds: Size,
    /// Height of the status bar covering the top of the screen.
    pub status_bar_height: f32,
    pub device_class: DeviceClass,
}

impl Environment {
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            status_bar_height: 0.0,
            device_class: DeviceClass::default(),
        }
    }

    #[must_use]
    pub fn status_bar_height(mut self, height: f32) -> Self {
        self.status_bar_height = height.max(0.0);
        self
    }

    #[must_use]
    pub fn device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = device_class;
        self
    }
}

/// Computed start and resting rectangles for one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub start: Rectangle,
    pub resting: Rectangle,
}

impl Placement {
    /// Lays out a card holding text of `text_size` at `position`.
    #[must_use]
    pub fn compute(
        text_size: Size,
        position: Position,
        environment: &Environment,
        layout: &LayoutConfig,
    ) -> Self {
        let padding = layout.inner_padding;
        let card = Size::new(
            text_size.width + padding * 2.0,
            text_size.height + padding * 2.0,
        );
        let bounds = environment.bounds;

        let (start_y, resting_y) = match position {
            Position::Top => (
                -card.height - environment.status_bar_height,
                layout.edge_distance,
            ),
            Position::Bottom => (
                bounds.height,
                bounds.height - layout.edge_distance - card.height,
            ),
        };

        Self {
            start: rect_at(card, bounds, start_y),
            resting: rect_at(card, bounds, resting_y),
        }
    }
}

fn rect_at(card: Size, bounds: Size, y: f32) -> Rectangle {
    Rectangle {
        x: (bounds.width - card.width) / 2.0,
        y,
        width: card.width,
        height: card.height,
    }
}

/// Returns `frame` shrunk by `padding` on every side.
#[must_use]
pub fn inset(frame: Rectangle, padding: f32) -> Rectangle {
    Rectangle {
        x: frame.x + padding,
        y: frame.y + padding,
        width: (frame.width - padding * 2.0).max(0.0),
        height: (frame.height - padding * 2.0).max(0.0),
    }
}

/// Part of `frame` inside `bounds` anchored at the origin, if any.
#[must_use]
pub fn visible_part(frame: Rectangle, bounds: Size) -> Option<Rectangle> {
    frame.intersection(&Rectangle::with_size(bounds))
}
