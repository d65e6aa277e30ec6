//! Simulation Settings
//!
//! Every tunable of the lander lives here: command step sizes, the pacing of
//! the motion and gravity timelines, axis coupling rules, the camera rig and
//! the mesh assets loaded at startup.
//!
//! Settings are plain data with `serde` support so a host can ship them as a
//! JSON file. Every field has a default, so a partial file only overrides what
//! it names.
//!
//! ```rust,ignore
//! use lander::LanderSettings;
//!
//! let settings = LanderSettings::from_json_str(r#"{
//!     "pacing": { "motion": { "duration": 0.25, "cap": 0.4 } }
//! }"#)?;
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::control::AxisCoupling;
use crate::errors::{LanderError, Result};

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

/// Duration and progress cap of one animation timeline.
///
/// A cap below `1.0` means a single leg never reaches its target; the
/// quantity only closes the gap as fast as new commands push the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pacing {
    /// Seconds for the progress fraction to go from 0 to 1.
    pub duration: f32,
    /// Upper clamp applied to the progress fraction.
    pub cap: f32,
}

impl Pacing {
    #[must_use]
    pub const fn new(duration: f32, cap: f32) -> Self {
        Self { duration, cap }
    }

    /// Fast, partial approach used for rotation and translation.
    pub const MOTION: Self = Self::new(0.5, 0.4);

    /// Slow, full approach used for the gravity pull.
    pub const GRAVITY: Self = Self::new(2.0, 1.0);

    fn validate(&self, label: &str) -> Result<()> {
        if !(self.duration > 0.0) {
            return Err(LanderError::InvalidSettings(format!(
                "{label} duration must be positive, got {}",
                self.duration
            )));
        }
        if !(self.cap > 0.0 && self.cap <= 1.0) {
            return Err(LanderError::InvalidSettings(format!(
                "{label} cap must be in (0, 1], got {}",
                self.cap
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingSettings {
    pub motion: Pacing,
    pub gravity: Pacing,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            motion: Pacing::MOTION,
            gravity: Pacing::GRAVITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// Frame in which thrust is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThrustFrame {
    /// Thrust pushes along the vehicle's nose (local +Z rotated by the
    /// current orientation).
    #[default]
    Nose,
    /// Thrust pushes along world +Z regardless of orientation.
    World,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Speed step added per rotate command, in radians per leg.
    pub rotation_power: f32,
    /// Speed step added per thrust command, in world units per leg.
    pub thrust_power: f32,
    pub thrust_frame: ThrustFrame,
    /// Rotate commands are redirected between axes by these rules.
    pub couplings: Vec<AxisCoupling>,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            rotation_power: 0.01,
            thrust_power: 0.5,
            thrust_frame: ThrustFrame::Nose,
            couplings: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Gravity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravitySettings {
    pub enabled: bool,
    /// Offset added to the gravity target every completed gravity leg.
    pub pull: Vec3,
}

impl Default for GravitySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            pull: Vec3::new(0.0, -0.5, 0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Camera position relative to the vehicle translation.
    pub base_offset: Vec3,
    /// Vertical field of view in degrees for aspect >= 1.
    pub landscape_fov: f32,
    /// Vertical field of view in degrees for aspect < 1 (portrait / snap).
    pub portrait_fov: f32,
    pub landscape_up: Vec3,
    pub portrait_up: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            base_offset: Vec3::new(0.0, 10.0, -25.0),
            landscape_fov: 70.0,
            portrait_fov: 120.0,
            landscape_up: Vec3::Y,
            portrait_up: Vec3::X,
            near: 1.0,
            far: 1000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// LanderSettings
// ---------------------------------------------------------------------------

/// Top-level configuration of a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanderSettings {
    pub controls: ControlSettings,
    pub pacing: PacingSettings,
    pub gravity: GravitySettings,
    pub camera: CameraSettings,
    /// Asset names handed to the mesh source on initialize.
    pub mesh_assets: Vec<String>,
}

impl Default for LanderSettings {
    fn default() -> Self {
        Self {
            controls: ControlSettings::default(),
            pacing: PacingSettings::default(),
            gravity: GravitySettings::default(),
            camera: CameraSettings::default(),
            mesh_assets: vec!["Moon.cmo".to_string()],
        }
    }
}

impl LanderSettings {
    /// Parses and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a JSON settings file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        log::info!("Loaded lander settings from {}", path.display());
        Ok(settings)
    }

    /// Checks the preconditions the per-frame core relies on.
    pub fn validate(&self) -> Result<()> {
        self.pacing.motion.validate("motion")?;
        self.pacing.gravity.validate("gravity")?;

        let cam = &self.camera;
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(LanderError::InvalidSettings(format!(
                "camera planes must satisfy 0 < near < far, got near={} far={}",
                cam.near, cam.far
            )));
        }
        for fov in [cam.landscape_fov, cam.portrait_fov] {
            if !(fov > 0.0 && fov < 180.0) {
                return Err(LanderError::InvalidSettings(format!(
                    "field of view must be in (0, 180) degrees, got {fov}"
                )));
            }
        }
        for coupling in &self.controls.couplings {
            if coupling.from == coupling.to {
                return Err(LanderError::InvalidSettings(format!(
                    "axis coupling must join two different axes, got {:?}",
                    coupling.from
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(LanderSettings::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings =
            LanderSettings::from_json_str(r#"{ "controls": { "thrust_power": 2.0 } }"#).unwrap();
        assert_eq!(settings.controls.thrust_power, 2.0);
        assert_eq!(settings.controls.rotation_power, 0.01);
        assert_eq!(settings.pacing, PacingSettings::default());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = LanderSettings::from_json_str(
            r#"{ "pacing": { "motion": { "duration": 0.0, "cap": 0.4 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LanderError::InvalidSettings(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = LanderSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LanderError::JsonError(_)));
    }
}
