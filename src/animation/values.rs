use glam::Vec3;

pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

/// Interpolation record of one animated quantity.
///
/// `current` always sits on the segment `initial -> target`. `initial` only
/// moves in [`retarget`](Self::retarget), when a new leg starts, so issuing a
/// command mid-flight never makes `current` jump.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Animated<T> {
    pub initial: T,
    pub current: T,
    pub target: T,
}

pub type AnimatedVector = Animated<Vec3>;

impl<T: Interpolatable> Animated<T> {
    /// All three values set to `value`.
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self {
            initial: value,
            current: value,
            target: value,
        }
    }

    /// Starts a new leg from wherever the quantity currently is.
    pub fn retarget(&mut self, target: T) {
        self.initial = self.current;
        self.target = target;
    }

    /// Recomputes `current` for a clamped progress fraction.
    pub fn advance(&mut self, fraction: f32, cap: f32) {
        self.current = super::integrator::step(self.initial, self.target, fraction, cap);
    }
}
