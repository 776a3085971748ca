// SPDX-License-Identifier: MPL-2.0
//! Static toast configuration, loaded from and saved to a `toast.toml` file.
//!
//! # Configuration Sections
//!
//! - `[layout]` - Card padding, distance from the screen edge, text widths
//! - `[animation]` - Spring duration, damping ratio and initial velocity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set the `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the entrance animation down
//! config.animation.duration_secs = 1.0;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";

/// Directory name appended to the platform config directory.
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Geometry of the toast card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Padding between the card edge and its text.
    pub inner_padding: f32,

    /// Distance between the resting card and the chosen screen edge.
    pub edge_distance: f32,

    /// Corner radius of the card.
    pub corner_radius: f32,

    /// Maximum text width on handheld form factors.
    pub max_width_handheld: f32,

    /// Maximum text width on tablet form factors.
    pub max_width_tablet: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inner_padding: DEFAULT_INNER_PADDING,
            edge_distance: DEFAULT_EDGE_DISTANCE,
            corner_radius: DEFAULT_CORNER_RADIUS,
            max_width_handheld: DEFAULT_MAX_WIDTH_HANDHELD,
            max_width_tablet: DEFAULT_MAX_WIDTH_TABLET,
        }
    }
}

/// Spring parameters shared by the entrance and exit transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Fixed duration of each transition, in seconds.
    pub duration_secs: f64,

    /// Damping ratio of the spring (1.0 = critically damped).
    pub damping_ratio: f64,

    /// Velocity at the start of the transition, in travel distances per second.
    pub initial_velocity: f64,
}

impl AnimationConfig {
    /// Returns the transition duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_secs)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_ANIMATION_DURATION_SECS,
            damping_ratio: DEFAULT_DAMPING_RATIO,
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast configuration with logical sections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Returns a copy with every value clamped into its supported range, so a
    /// hand-edited file cannot produce negative padding or a spring that never
    /// settles. Non-finite values fall back to their defaults.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let layout = &self.layout;
        let animation = &self.animation;

        Self {
            layout: LayoutConfig {
                inner_padding: clamp_f32(
                    layout.inner_padding,
                    MIN_INNER_PADDING,
                    MAX_INNER_PADDING,
                    DEFAULT_INNER_PADDING,
                ),
                edge_distance: finite_or(layout.edge_distance, DEFAULT_EDGE_DISTANCE).max(0.0),
                corner_radius: finite_or(layout.corner_radius, DEFAULT_CORNER_RADIUS).max(0.0),
                max_width_handheld: finite_or(
                    layout.max_width_handheld,
                    DEFAULT_MAX_WIDTH_HANDHELD,
                )
                .max(MIN_MAX_WIDTH),
                max_width_tablet: finite_or(layout.max_width_tablet, DEFAULT_MAX_WIDTH_TABLET)
                    .max(MIN_MAX_WIDTH),
            },
            animation: AnimationConfig {
                duration_secs: clamp_f64(
                    animation.duration_secs,
                    MIN_ANIMATION_DURATION_SECS,
                    MAX_ANIMATION_DURATION_SECS,
                    DEFAULT_ANIMATION_DURATION_SECS,
                ),
                damping_ratio: clamp_f64(
                    animation.damping_ratio,
                    MIN_DAMPING_RATIO,
                    MAX_DAMPING_RATIO,
                    DEFAULT_DAMPING_RATIO,
                ),
                initial_velocity: clamp_f64(
                    animation.initial_velocity,
                    -MAX_INITIAL_VELOCITY,
                    MAX_INITIAL_VELOCITY,
                    DEFAULT_INITIAL_VELOCITY,
                ),
            },
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn clamp_f32(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    finite_or(value, fallback).clamp(min, max)
}

fn clamp_f64(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring an explicit override first, then
/// the environment variable, then the platform default.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!("falling back to default toast config: {}", err);
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
