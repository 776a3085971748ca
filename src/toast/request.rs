// SPDX-License-Identifier: MPL-2.0
//! Toast requests.
//!
//! A [`Toast`] is the immutable description handed to a display surface:
//! what to say, which edge to slide in from, how long to stay, and how it
//! looks. Every field except the message is optional and is resolved to a
//! default when the surface is built.

use iced::{Color, Font};
use std::time::Duration;

/// Display duration meaning "stay until tapped or dismissed explicitly".
pub const NO_POP_TIME: Duration = Duration::ZERO;

/// Default card background: black at 70% opacity.
pub const DEFAULT_BACKGROUND: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);

/// Default text color.
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;

/// Default text size in logical pixels.
pub const DEFAULT_FONT_SIZE: f32 = 19.0;

/// Screen edge the toast slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Slides down from the top of the screen.
    Top,
    /// Slides up from the bottom of the screen.
    #[default]
    Bottom,
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            other => Err(format!("invalid toast position: {}", other)),
        }
    }
}

/// Typeface and size used for the toast text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastFont {
    pub face: Font,
    pub size: f32,
}

impl ToastFont {
    #[must_use]
    pub fn new(face: Font, size: f32) -> Self {
        Self { face, size }
    }
}

impl Default for ToastFont {
    fn default() -> Self {
        Self {
            face: Font::DEFAULT,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// A request to show a toast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toast {
    message: String,
    position: Option<Position>,
    duration: Option<Duration>,
    dismiss_on_tap: Option<bool>,
    background: Option<Color>,
    text_color: Option<Color>,
    font: Option<ToastFont>,
}

impl Toast {
    /// Creates a request with only a message; everything else uses defaults.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets how long the toast stays visible. [`NO_POP_TIME`] keeps it on
    /// screen until it is tapped.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Requests tap-to-dismiss. Ignored for [`NO_POP_TIME`] toasts, which are
    /// always dismissable by tap.
    #[must_use]
    pub fn dismiss_on_tap(mut self, dismiss_on_tap: bool) -> Self {
        self.dismiss_on_tap = Some(dismiss_on_tap);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    #[must_use]
    pub fn font(mut self, font: ToastFont) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn requested_position(&self) -> Option<Position> {
        self.position
    }

    #[must_use]
    pub fn requested_duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn requested_dismiss_on_tap(&self) -> Option<bool> {
        self.dismiss_on_tap
    }

    #[must_use]
    pub fn requested_background(&self) -> Option<Color> {
        self.background
    }

    #[must_use]
    pub fn requested_text_color(&self) -> Option<Color> {
        self.text_color
    }

    #[must_use]
    pub fn requested_font(&self) -> Option<ToastFont> {
        self.font
    }

    /// Effective edge, defaulting to the bottom.
    #[must_use]
    pub fn resolved_position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    /// Effective display duration, defaulting to [`NO_POP_TIME`].
    #[must_use]
    pub fn resolved_duration(&self) -> Duration {
        self.duration.unwrap_or(NO_POP_TIME)
    }

    /// Effective tap behavior.
    ///
    /// A toast without a display duration could never leave the screen on
    /// its own, so tap-to-dismiss is forced on for it regardless of what the
    /// caller asked for.
    #[must_use]
    pub fn resolved_dismiss_on_tap(&self) -> bool {
        if self.resolved_duration() == NO_POP_TIME {
            true
        } else {
            self.dismiss_on_tap.unwrap_or(false)
        }
    }
}
