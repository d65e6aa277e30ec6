//! Mesh Assets
//!
//! The simulation does not parse model files. At startup it asks a
//! [`MeshSource`] for the meshes stored under each configured asset name and
//! takes ownership of what comes back.
//!
//! [`ManifestSource`] is the stock source: a JSON document mapping asset names
//! to the meshes they contain.
//!
//! ```json
//! {
//!     "Moon.cmo": [
//!         { "name": "Moon", "bounds": { "min": [-50, -2, -50], "max": [50, 0, 50] }, "anchor": "World" },
//!         { "name": "Lander", "bounds": { "min": [-1, -1, -1], "max": [1, 1, 1] } }
//!     ]
//! }
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::errors::{LanderError, Result};
use crate::scene::Mesh;

/// Loads named mesh assets.
pub trait MeshSource {
    /// All meshes stored under `asset`.
    fn load(&mut self, asset: &str) -> Result<Vec<Mesh>>;
}

/// In-memory manifest of asset name to meshes.
#[derive(Debug, Default, Clone)]
pub struct ManifestSource {
    assets: FxHashMap<String, Vec<Mesh>>,
}

impl ManifestSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let assets: FxHashMap<String, Vec<Mesh>> = serde_json::from_str(json)?;
        Ok(Self { assets })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Registers (or replaces) the meshes of one asset.
    pub fn insert(&mut self, asset: impl Into<String>, meshes: Vec<Mesh>) -> &mut Self {
        self.assets.insert(asset.into(), meshes);
        self
    }
}

impl MeshSource for ManifestSource {
    fn load(&mut self, asset: &str) -> Result<Vec<Mesh>> {
        self.assets
            .get(asset)
            .cloned()
            .ok_or_else(|| LanderError::AssetNotFound(asset.to_string()))
    }
}
