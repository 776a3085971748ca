// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Padding, edge distance and maximum text widths
//! - **Animation**: Spring timing used by the entrance and exit transitions

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Padding between the card edge and its text, on every side.
pub const DEFAULT_INNER_PADDING: f32 = 10.0;

/// Minimum allowed inner padding.
pub const MIN_INNER_PADDING: f32 = 0.0;

/// Maximum allowed inner padding.
pub const MAX_INNER_PADDING: f32 = 64.0;

/// Vertical distance between the resting card and the chosen screen edge.
pub const DEFAULT_EDGE_DISTANCE: f32 = 100.0;

/// Corner radius of the toast card.
pub const DEFAULT_CORNER_RADIUS: f32 = 5.0;

/// Maximum text width on handheld form factors.
pub const DEFAULT_MAX_WIDTH_HANDHELD: f32 = 300.0;

/// Maximum text width on tablet form factors.
pub const DEFAULT_MAX_WIDTH_TABLET: f32 = 500.0;

/// Smallest text width a layout may be configured with.
pub const MIN_MAX_WIDTH: f32 = 40.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the entrance and exit animations (in seconds).
pub const DEFAULT_ANIMATION_DURATION_SECS: f64 = 0.5;

/// Minimum animation duration (in seconds).
pub const MIN_ANIMATION_DURATION_SECS: f64 = 0.01;

/// Maximum animation duration (in seconds).
pub const MAX_ANIMATION_DURATION_SECS: f64 = 5.0;

/// Spring damping ratio. Values below 1.0 overshoot the target.
pub const DEFAULT_DAMPING_RATIO: f64 = 0.7;

/// Minimum damping ratio (an undamped spring would never settle).
pub const MIN_DAMPING_RATIO: f64 = 0.05;

/// Maximum damping ratio.
pub const MAX_DAMPING_RATIO: f64 = 4.0;

/// Initial spring velocity, in full travel distances per second.
pub const DEFAULT_INITIAL_VELOCITY: f64 = 0.5;

/// Bound on the magnitude of the initial spring velocity.
pub const MAX_INITIAL_VELOCITY: f64 = 50.0;
