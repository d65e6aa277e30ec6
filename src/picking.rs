//! Ray Picking
//!
//! Resolves a screen point to the nearest mesh under it. The camera turns the
//! point into a world-space [`Ray`]; [`RayPicker`] then slab-tests every
//! mesh's world-space bounds and keeps the closest hit.

use glam::Vec3;

use crate::scene::{BoundingBox, MeshHandle, MeshRegistry, Pose};

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Normalizes `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Entry distance into `aabb`, or `None` when the box is missed or lies
    /// entirely behind the origin. A ray starting inside the box hits at 0.
    ///
    /// An axis the ray runs parallel to is a containment check on the origin,
    /// so a ray grazing a face along that axis still hits.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &BoundingBox) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let direction = self.direction[axis];
            let (min, max) = (aabb.min[axis], aabb.max[axis]);

            if direction.abs() <= f32::EPSILON {
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let inv = direction.recip();
            let (t1, t2) = ((min - origin) * inv, (max - origin) * inv);
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        }

        if t_max >= t_min && t_max >= 0.0 {
            Some(t_min.max(0.0))
        } else {
            None
        }
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub handle: MeshHandle,
    /// Distance along the ray to the entry point.
    pub distance: f32,
}

/// Nearest-hit picking over a [`MeshRegistry`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RayPicker;

impl RayPicker {
    /// Returns the mesh whose world bounds the ray enters first.
    #[must_use]
    pub fn pick(ray: &Ray, meshes: &MeshRegistry, pose: &Pose) -> Option<PickHit> {
        let mut closest: Option<PickHit> = None;

        for (handle, mesh) in meshes.iter() {
            let bounds = mesh.bounds.transform(&pose.world_transform(mesh.anchor));
            let Some(t) = ray.intersect_aabb(&bounds) else {
                continue;
            };
            if closest.is_none_or(|hit| t < hit.distance) {
                closest = Some(PickHit {
                    handle,
                    distance: t,
                });
            }
        }

        closest
    }
}
