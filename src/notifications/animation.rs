// SPDX-License-Identifier: MPL-2.0
//! Time-based animation curves.
//!
//! Everything here is a pure function of elapsed time so toast views can be
//! sampled at any instant without keeping per-frame state.

use std::time::Duration;

/// Amplitude below which a spring counts as settled.
const REST_THRESHOLD: f32 = 0.001;

/// Linear interpolation between `from` and `to`.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`.
///
/// A zero duration is complete immediately.
#[must_use]
pub fn fraction(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Quadratic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Timed tween: eased progress of `elapsed` through `duration`.
#[must_use]
pub fn timing(elapsed: Duration, duration: Duration) -> f32 {
    ease_in_out_quad(fraction(elapsed, duration))
}

/// Damped harmonic oscillator with unit mass, released at rest.
///
/// [`Spring::progress`] goes from `0.0` towards `1.0`; underdamped springs
/// overshoot before settling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub damping: f32,
    pub stiffness: f32,
}

impl Spring {
    #[must_use]
    pub const fn new(damping: f32, stiffness: f32) -> Self {
        Self { damping, stiffness }
    }

    fn natural_frequency(self) -> f32 {
        self.stiffness.sqrt()
    }

    fn damping_ratio(self) -> f32 {
        self.damping / (2.0 * self.natural_frequency())
    }

    /// Progress towards the target after `elapsed`.
    #[must_use]
    pub fn progress(self, elapsed: Duration) -> f32 {
        let t = elapsed.as_secs_f32();
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();

        // Remaining displacement, 1.0 at t = 0 with zero initial velocity.
        let displacement = if (zeta - 1.0).abs() < f32::EPSILON {
            (-omega * t).exp() * (1.0 + omega * t)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            (-zeta * omega * t).exp()
                * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        };

        1.0 - displacement
    }

    /// Time after which the remaining motion is imperceptible.
    #[must_use]
    pub fn settle_time(self) -> Duration {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        let decay = if zeta < 1.0 {
            zeta * omega
        } else {
            // Slowest root dominates once overdamped.
            omega * (zeta - (zeta * zeta - 1.0).max(0.0).sqrt())
        };
        if decay <= 0.0 {
            return Duration::MAX;
        }
        Duration::from_secs_f32((1.0 / REST_THRESHOLD).ln() / decay)
    }
}
