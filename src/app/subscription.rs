// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Frame interval while a toast is animating or its timer is running.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates a periodic tick subscription while the toast queue has work to do.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Forwards window resizes so toasts can be laid out again.
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::Resized(size))
}
