use glam::{Mat4, UVec2, Vec2, Vec3};

use crate::picking::Ray;

/// Perspective camera driven by position, look-at target and up vector.
///
/// Matrices are cached and rebuilt whenever a setter changes an input.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    look_at: Vec3,
    up: Vec3,

    // === Projection ===
    /// Vertical field of view in radians.
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    viewport: UVec2,

    // Cached matrices, rebuilt by the setters
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_projection_matrix: Mat4,
}

impl Camera {
    /// `fov` is in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            position: Vec3::new(0.0, 0.0, -1.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            viewport: UVec2::ZERO,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
        };
        cam.update_view_matrix();
        cam.update_projection_matrix();
        cam
    }

    // ========================================================================
    // Setters
    // ========================================================================

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view_matrix();
    }

    pub fn set_look_at(&mut self, target: Vec3) {
        self.look_at = target;
        self.update_view_matrix();
    }

    pub fn set_up_vector(&mut self, up: Vec3) {
        self.up = up;
        self.update_view_matrix();
    }

    /// `fov` is in radians.
    pub fn set_projection(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        self.fov = fov;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        self.update_projection_matrix();
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = UVec2::new(width, height);
    }

    // ========================================================================
    // Getters
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    #[inline]
    #[must_use]
    pub fn up_vector(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view in radians.
    #[inline]
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    #[must_use]
    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    #[inline]
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.view_projection_matrix
    }

    // ========================================================================
    // Picking
    // ========================================================================

    /// World-space ray through a pixel, from the near plane towards the far
    /// plane. `None` until a viewport has been set.
    #[must_use]
    pub fn world_ray(&self, x: i32, y: i32) -> Option<Ray> {
        if self.viewport.x == 0 || self.viewport.y == 0 {
            return None;
        }
        let size = self.viewport.as_vec2();
        let pixel = Vec2::new(x as f32, y as f32) + 0.5;
        let ndc = Vec2::new(2.0 * pixel.x / size.x - 1.0, 1.0 - 2.0 * pixel.y / size.y);

        let inverse = self.view_projection_matrix.inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        Some(Ray::new(near, far - near))
    }

    // ========================================================================
    // Matrix cache
    // ========================================================================

    fn update_view_matrix(&mut self) {
        let forward = self.look_at - self.position;
        // Degenerate basis: keep the last valid view.
        if forward.cross(self.up).length_squared() < 1e-8 {
            return;
        }
        self.view_matrix = Mat4::look_at_rh(self.position, self.look_at, self.up);
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    fn update_projection_matrix(&mut self) {
        // glam's perspective_rh maps depth to [0, 1]
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }
}
