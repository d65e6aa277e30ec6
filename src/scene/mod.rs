//! Scene Module
//!
//! What the renderer and the picker look at:
//! - [`Pose`]: the composed vehicle transform for one frame
//! - [`Mesh`] / [`MeshRegistry`]: named renderables owned by value
//! - [`Camera`]: perspective camera with a cached view-projection
//! - [`CameraFollower`]: keeps the camera on the vehicle and reacts to resizes

pub mod camera;
pub mod follower;
pub mod mesh;
pub mod pose;

pub use camera::Camera;
pub use follower::{CameraFollower, ViewLayout};
pub use mesh::{Anchor, BoundingBox, Mesh, MeshHandle, MeshRegistry};
pub use pose::{Pose, euler_to_quat};
