// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient slide-in toast messages over an Iced
//! application.
//!
//! Toasts slide in from the top or bottom edge on a spring curve, stay for a
//! configurable time or until tapped, then slide out and give focus back to
//! the previously active context.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
