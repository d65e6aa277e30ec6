#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Lander: discrete rotate / thrust commands turned into smooth vehicle
//! motion, a gravity pull, a follow camera, and screen-space picking.

pub mod animation;
pub mod assets;
pub mod control;
pub mod errors;
pub mod picking;
pub mod render;
pub mod scene;
pub mod settings;
pub mod shell;
pub mod simulation;
pub mod utils;

pub use animation::{Animated, AnimationClock, AnimationState, Timeline};
pub use assets::{ManifestSource, MeshSource};
pub use control::{Axis, AxisCoupling, CommandAccumulator, LanderCommand, SpeedState};
pub use errors::{LanderError, Result};
pub use picking::{PickHit, Ray, RayPicker};
pub use render::{DrawList, MeshRenderer};
pub use scene::{Anchor, BoundingBox, Camera, CameraFollower, Mesh, MeshHandle, MeshRegistry, Pose};
pub use settings::{LanderSettings, Pacing, ThrustFrame};
pub use shell::{HostShell, Key, KeyBindings, MenuAction, ShellEvent};
pub use simulation::Simulation;
pub use utils::FrameClock;
