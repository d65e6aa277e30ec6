use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::command::{Axis, LanderCommand};
use crate::animation::AnimationState;
use crate::scene::pose::euler_to_quat;
use crate::settings::{ControlSettings, ThrustFrame};

/// Accumulated per-axis speeds.
///
/// Speeds only change when a command fires (or on restart); they are added
/// on top of the current value every time a new leg starts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeedState {
    /// Radians per leg about x (pitch), y (yaw) and z (roll).
    pub rotation: Vec3,
    /// World units per leg along the thrust heading.
    pub translation: f32,
}

/// Redirects rotate commands from one axis to another.
///
/// While the current rotation about `from` exceeds `threshold` in magnitude,
/// a rotate command aimed at `from` drives `to` instead. Pitching past a
/// steep angle and turning further into a roll is the typical use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisCoupling {
    pub from: Axis,
    pub to: Axis,
    /// Radians.
    pub threshold: f32,
}

/// Folds discrete commands into [`SpeedState`] and retargets the animation.
#[derive(Debug, Clone)]
pub struct CommandAccumulator {
    speed: SpeedState,
    rotation_power: f32,
    thrust_power: f32,
    thrust_frame: ThrustFrame,
    couplings: Vec<AxisCoupling>,
}

impl CommandAccumulator {
    #[must_use]
    pub fn new(settings: &ControlSettings) -> Self {
        Self {
            speed: SpeedState::default(),
            rotation_power: settings.rotation_power,
            thrust_power: settings.thrust_power,
            thrust_frame: settings.thrust_frame,
            couplings: settings.couplings.clone(),
        }
    }

    #[inline]
    #[must_use]
    pub fn speed(&self) -> SpeedState {
        self.speed
    }

    /// Drops all accumulated speed.
    pub fn reset(&mut self) {
        self.speed = SpeedState::default();
    }

    /// Applies one command and starts a new motion leg.
    ///
    /// The caller owns the clock and must reset the motion timeline.
    pub fn apply(&mut self, command: LanderCommand, state: &mut AnimationState) {
        if let Some((axis, sign)) = command.rotation_axis() {
            self.apply_rotate(axis, sign, state);
        } else if let Some(sign) = command.thrust_sign() {
            self.apply_thrust(sign, state);
        }
    }

    fn apply_rotate(&mut self, axis: Axis, sign: f32, state: &mut AnimationState) {
        let axis = self.coupled_axis(axis, state.rotation.current);
        self.speed.rotation[axis.index()] += sign * self.rotation_power;

        let target = state.rotation.current + self.speed.rotation;
        state.start_motion_leg(target, state.translation.target);
        log::debug!(
            "Rotate {axis:?} by {}: speed {} -> target {target}",
            sign * self.rotation_power,
            self.speed.rotation
        );
    }

    fn apply_thrust(&mut self, sign: f32, state: &mut AnimationState) {
        self.speed.translation += sign * self.thrust_power;

        let heading = self.heading(state.rotation.current);
        let target = state.translation.current + heading * self.speed.translation;
        state.start_motion_leg(state.rotation.target, target);
        log::debug!(
            "Thrust speed {} along {heading} -> target {target}",
            self.speed.translation
        );
    }

    /// Resolves the first coupling rule whose threshold is exceeded.
    fn coupled_axis(&self, axis: Axis, rotation: Vec3) -> Axis {
        self.couplings
            .iter()
            .find(|c| c.from == axis && rotation[axis.index()].abs() > c.threshold)
            .map_or(axis, |c| c.to)
    }

    fn heading(&self, rotation: Vec3) -> Vec3 {
        match self.thrust_frame {
            ThrustFrame::Nose => euler_to_quat(rotation) * Vec3::Z,
            ThrustFrame::World => Vec3::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GravitySettings;

    fn state() -> AnimationState {
        AnimationState::new(&GravitySettings::default())
    }

    #[test]
    fn repeated_rotate_accumulates_speed_into_target() {
        let mut acc = CommandAccumulator::new(&ControlSettings::default());
        let mut state = state();

        acc.apply(LanderCommand::RotateLeft, &mut state);
        acc.apply(LanderCommand::RotateLeft, &mut state);

        assert!((acc.speed().rotation.y - 0.02).abs() < 1e-6);
        assert!((state.rotation.target.y - 0.02).abs() < 1e-6);
        assert_eq!(state.rotation.initial, Vec3::ZERO);
    }

    #[test]
    fn coupling_redirects_pitch_into_roll_past_threshold() {
        let settings = ControlSettings {
            couplings: vec![AxisCoupling {
                from: Axis::X,
                to: Axis::Z,
                threshold: 0.5,
            }],
            ..Default::default()
        };
        let mut acc = CommandAccumulator::new(&settings);
        let mut state = state();

        acc.apply(LanderCommand::RotateDown, &mut state);
        assert!(acc.speed().rotation.x > 0.0);
        assert_eq!(acc.speed().rotation.z, 0.0);

        state.rotation.current.x = 0.6;
        acc.apply(LanderCommand::RotateDown, &mut state);
        assert!((acc.speed().rotation.z - 0.01).abs() < 1e-6);
        assert!((acc.speed().rotation.x - 0.01).abs() < 1e-6);
    }

    #[test]
    fn world_thrust_ignores_orientation() {
        let settings = ControlSettings {
            thrust_frame: ThrustFrame::World,
            ..Default::default()
        };
        let mut acc = CommandAccumulator::new(&settings);
        let mut state = state();
        state.rotation.current.y = 1.0;

        acc.apply(LanderCommand::ThrustForward, &mut state);
        assert!((state.translation.target - Vec3::new(0.0, 0.0, 0.5)).length() < 1e-6);
    }
}
