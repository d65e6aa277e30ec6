use glam::Vec3;

use super::clock::{AnimationClock, Timeline};
use super::values::AnimatedVector;
use crate::scene::pose::Pose;
use crate::settings::{GravitySettings, PacingSettings};

/// The three animated quantities of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Euler angles (x = pitch, y = yaw, z = roll), radians.
    pub rotation: AnimatedVector,
    pub translation: AnimatedVector,
    pub gravity: AnimatedVector,
}

impl AnimationState {
    /// Rest state with the first gravity leg already aimed at `pull`.
    #[must_use]
    pub fn new(gravity: &GravitySettings) -> Self {
        let mut state = Self {
            rotation: AnimatedVector::settled(Vec3::ZERO),
            translation: AnimatedVector::settled(Vec3::ZERO),
            gravity: AnimatedVector::settled(Vec3::ZERO),
        };
        if gravity.enabled {
            state.gravity.target = gravity.pull;
        }
        state
    }

    /// Starts a new motion leg for rotation and translation together.
    ///
    /// Both quantities share the motion timeline, so both re-anchor their
    /// `initial` on the current value even if only one target changed.
    pub fn start_motion_leg(&mut self, rotation_target: Vec3, translation_target: Vec3) {
        self.rotation.retarget(rotation_target);
        self.translation.retarget(translation_target);
    }

    /// Recomputes every `current` value from the clock.
    ///
    /// Rotation and translation share the motion timeline. Every gravity leg
    /// that has run its full duration rolls over into the next one, and the
    /// time past its end carries into that next leg.
    pub fn integrate(
        &mut self,
        clock: &mut AnimationClock,
        pacing: &PacingSettings,
        gravity: &GravitySettings,
    ) {
        let motion = clock.fraction(Timeline::Motion, pacing.motion.duration);
        self.rotation.advance(motion, pacing.motion.cap);
        self.translation.advance(motion, pacing.motion.cap);

        if !gravity.enabled {
            return;
        }
        let duration = pacing.gravity.duration;
        let mut fall = clock.fraction(Timeline::Gravity, duration);
        while fall >= 1.0 {
            self.gravity.advance(fall, pacing.gravity.cap);
            let next = self.gravity.target + gravity.pull;
            self.gravity.retarget(next);
            clock.rewind(Timeline::Gravity, duration);
            fall = clock.fraction(Timeline::Gravity, duration);
            log::trace!("Gravity leg rolled over, offset target {next}");
        }
        self.gravity.advance(fall, pacing.gravity.cap);
    }

    /// Snapshot of the current values for composition.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            rotation: self.rotation.current,
            translation: self.translation.current,
            gravity_offset: self.gravity.current,
        }
    }
}
