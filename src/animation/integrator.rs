//! Capped linear integration.
//!
//! The integrator is a pure function of `(initial, target, fraction, cap)`.
//! Calling it twice with the same inputs yields the same output, which is what
//! makes replaying a recorded command stream deterministic.

use super::values::Interpolatable;

/// Clamps a raw progress fraction into `[0, cap]`.
#[inline]
#[must_use]
pub fn clamp_progress(fraction: f32, cap: f32) -> f32 {
    fraction.min(cap).max(0.0)
}

/// Returns `initial + min(fraction, cap) * (target - initial)`.
#[inline]
#[must_use]
pub fn step<T: Interpolatable>(initial: T, target: T, fraction: f32, cap: f32) -> T {
    T::interpolate_linear(initial, target, clamp_progress(fraction, cap))
}
