// SPDX-License-Identifier: MPL-2.0
//! Spring curve for the entrance and exit transitions.
//!
//! Progress follows the step response of a damped harmonic oscillator that
//! starts at 0 with a configurable initial velocity and settles at 1:
//! ```text
//! x''(t) + 2ζω₀x'(t) + ω₀²x(t) = ω₀²,   x(0) = 0,   x'(0) = v₀
//! ```
//!
//! Unlike a free-running spring, the curve has a fixed duration. The natural
//! frequency ω₀ is chosen so the motion has visually settled by then, and
//! progress is pinned to exactly 1.0 from the duration onwards.

use crate::config::{AnimationConfig, MAX_DAMPING_RATIO, MIN_DAMPING_RATIO};
use std::time::Duration;

/// Decay exponent reached at the end of the duration (e^-6.6 ≈ 0.14%).
const SETTLE_FACTOR: f64 = 6.6;

/// Tolerance used to treat a damping ratio as critical.
const CRITICAL_EPSILON: f64 = 1e-3;

/// Spring timing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    duration: Duration,
    damping_ratio: f64,
    initial_velocity: f64,
    omega_0: f64,
}

impl Spring {
    /// Creates a spring that settles within `duration`.
    #[must_use]
    pub fn new(duration: Duration, damping_ratio: f64, initial_velocity: f64) -> Self {
        let zeta = damping_ratio.clamp(MIN_DAMPING_RATIO, MAX_DAMPING_RATIO);
        let secs = duration.as_secs_f64().max(f64::EPSILON);

        // Slowest decay rate of the response, per unit of ω₀.
        let decay = if zeta < 1.0 {
            zeta
        } else {
            zeta - zeta.mul_add(zeta, -1.0).sqrt()
        };
        let omega_0 = SETTLE_FACTOR / (secs * decay);

        Self {
            duration,
            damping_ratio: zeta,
            initial_velocity,
            omega_0,
        }
    }

    /// Creates a spring from the `[animation]` configuration section.
    #[must_use]
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(
            config.duration(),
            config.damping_ratio,
            config.initial_velocity,
        )
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Progress at `elapsed`. Starts at 0.0, may overshoot 1.0 when the
    /// spring is underdamped, and is exactly 1.0 once the duration is over.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration {
            return 1.0;
        }

        let t = elapsed.as_secs_f64();
        let omega_0 = self.omega_0;
        let zeta = self.damping_ratio;
        let v0 = self.initial_velocity;

        let remaining = if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            Self::critically_damped(t, omega_0, v0)
        } else if zeta < 1.0 {
            Self::underdamped(t, omega_0, zeta, v0)
        } else {
            Self::overdamped(t, omega_0, zeta, v0)
        };

        1.0 - remaining
    }

    /// Whether the curve has reached its end at `elapsed`.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    // The helpers below return the remaining distance y(t) = 1 - x(t),
    // with y(0) = 1 and y'(0) = -v₀.

    fn underdamped(t: f64, omega_0: f64, zeta: f64, v0: f64) -> f64 {
        let omega_d = omega_0 * zeta.mul_add(-zeta, 1.0).sqrt();
        let decay = (-zeta * omega_0 * t).exp();
        let sin_coeff = zeta.mul_add(omega_0, -v0) / omega_d;

        decay * sin_coeff.mul_add((omega_d * t).sin(), (omega_d * t).cos())
    }

    fn critically_damped(t: f64, omega_0: f64, v0: f64) -> f64 {
        let decay = (-omega_0 * t).exp();
        decay * (omega_0 - v0).mul_add(t, 1.0)
    }

    fn overdamped(t: f64, omega_0: f64, zeta: f64, v0: f64) -> f64 {
        let root = zeta.mul_add(zeta, -1.0).sqrt();
        let r1 = -omega_0 * (zeta - root);
        let r2 = -omega_0 * (zeta + root);
        let c1 = (v0 + r2) / (r2 - r1);
        let c2 = 1.0 - c1;

        c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}
