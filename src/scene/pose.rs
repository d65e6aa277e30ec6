use glam::{Affine3A, EulerRot, Quat, Vec3};

use super::mesh::Anchor;

/// Euler angles (x = pitch, y = yaw, z = roll) to a quaternion.
///
/// Roll is applied first, then pitch, then yaw.
#[inline]
#[must_use]
pub fn euler_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::YXZ, euler.y, euler.x, euler.z)
}

/// Composed vehicle state for one frame. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub rotation: Vec3,
    pub translation: Vec3,
    pub gravity_offset: Vec3,
}

impl Pose {
    /// Rotation first, then translation, then the gravity offset.
    ///
    /// The vehicle turns about its own origin and is only then moved, so a
    /// nose-relative thrust vector lands where the nose points.
    #[must_use]
    pub fn world_matrix(&self) -> Affine3A {
        Affine3A::from_translation(self.gravity_offset)
            * Affine3A::from_translation(self.translation)
            * Affine3A::from_quat(euler_to_quat(self.rotation))
    }

    /// Composed position of the vehicle origin.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.translation + self.gravity_offset
    }

    /// World transform for a mesh with the given anchor.
    #[must_use]
    pub fn world_transform(&self, anchor: Anchor) -> Affine3A {
        match anchor {
            Anchor::Vehicle => self.world_matrix(),
            Anchor::World => Affine3A::IDENTITY,
        }
    }
}
