// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast;
use crate::toast::{DeviceClass, Position};
use iced::Size;
use std::time::{Duration, Instant};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded toast message (tap on the card).
    Toast(toast::Message),
    /// Queue a toast that leaves after the given time.
    ShowTimed(Duration),
    /// Queue a toast that stays until tapped.
    ShowSticky,
    /// Queue a toast with a long, wrapping message.
    ShowLong,
    /// Flip between top and bottom placement for new toasts.
    TogglePosition,
    /// Dismiss the toast on screen.
    DismissCurrent,
    /// The window was resized.
    Resized(Size),
    /// Periodic tick driving animations and the display timer.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Edge new toasts slide in from.
    pub position: Option<Position>,
    /// Form factor used to pick the maximum text width.
    pub device_class: DeviceClass,
    /// Optional config directory override (for toast.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
