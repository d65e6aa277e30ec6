use glam::Vec3;

use super::camera::Camera;
use crate::settings::CameraSettings;

/// Orientation class of the viewport, chosen from its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLayout {
    /// aspect >= 1
    Landscape,
    /// aspect < 1 (portrait or snapped view)
    Portrait,
}

impl ViewLayout {
    #[must_use]
    pub fn from_aspect(aspect: f32) -> Self {
        if aspect < 1.0 {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// Keeps the camera trained on the vehicle.
#[derive(Debug, Clone)]
pub struct CameraFollower {
    settings: CameraSettings,
}

impl CameraFollower {
    #[must_use]
    pub fn new(settings: CameraSettings) -> Self {
        Self { settings }
    }

    /// Places the camera at the base offset from `target` and aims it there.
    pub fn follow(&self, camera: &mut Camera, target: Vec3) {
        camera.set_position(self.settings.base_offset + target);
        camera.set_look_at(target);
    }

    /// Window-size-dependent camera setup.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; callers must not forward a
    /// minimized viewport.
    pub fn on_resize(&self, camera: &mut Camera, width: u32, height: u32) -> ViewLayout {
        assert!(
            width > 0 && height > 0,
            "viewport must be non-empty, got {width}x{height}"
        );
        let aspect = width as f32 / height as f32;
        let layout = ViewLayout::from_aspect(aspect);

        let (fov, up) = match layout {
            ViewLayout::Portrait => (self.settings.portrait_fov, self.settings.portrait_up),
            ViewLayout::Landscape => (self.settings.landscape_fov, self.settings.landscape_up),
        };

        camera.set_viewport(width, height);
        camera.set_up_vector(up);
        camera.set_projection(
            fov.to_radians(),
            aspect,
            self.settings.near,
            self.settings.far,
        );
        log::info!("Viewport {width}x{height} ({layout:?}), fov {fov} deg");
        layout
    }
}
