// SPDX-License-Identifier: MPL-2.0
//! Slide-in toast overlay.
//!
//! A toast is a short, non-modal message that slides in from the top or
//! bottom edge, stays for a while (or until tapped), then slides back out
//! and hands focus back to whatever was active before it.
//!
//! # Components
//!
//! - [`request`] - Immutable `Toast` request and `Position`
//! - [`geometry`] - Screen environment and start/resting rectangles
//! - [`measure`] - Text measurement seam
//! - [`spring`] - Fixed-duration spring curve
//! - [`transition`] - Animated move between two rectangles
//! - [`surface`] - `ToastSurface` state machine
//! - [`queue`] - `ToastQueue` showing one toast at a time with a display timer
//! - [`view`] - Iced rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{Environment, Position, Toast, ToastQueue};
//! use std::time::Duration;
//!
//! let mut queue = ToastQueue::new(host, Environment::new(window_size), config);
//! queue.push(Toast::new("Saved").position(Position::Top).duration(Duration::from_secs(2)));
//!
//! // In update(): forward ticks and taps
//! queue.handle_message(&message);
//!
//! // In view(): stack the overlay above the content
//! let overlay = toast::view::view_overlay(&queue).map(Message::Toast);
//! ```

pub mod geometry;
pub mod measure;
pub mod queue;
pub mod request;
pub mod spring;
pub mod surface;
pub mod transition;
pub mod view;

pub use geometry::{DeviceClass, Environment, Placement};
pub use measure::{ApproximateMeasure, ParagraphMeasure, TextMeasure};
pub use queue::{Message, ToastQueue};
pub use request::{Position, Toast, ToastFont, NO_POP_TIME};
pub use surface::{ActiveContext, Appearance, Phase, ToastSurface};
