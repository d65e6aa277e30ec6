//! Draw submission seam.
//!
//! The simulation owns no GPU state. Each frame it hands every mesh and its
//! composed world transform to a [`MeshRenderer`] supplied by the host.

use glam::Affine3A;

use crate::scene::{Mesh, MeshHandle};

pub trait MeshRenderer {
    fn draw(&mut self, handle: MeshHandle, mesh: &Mesh, world: &Affine3A);
}

/// Records draw calls instead of issuing them. Used by headless hosts.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub handle: MeshHandle,
    pub name: String,
    pub world: Affine3A,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl MeshRenderer for DrawList {
    fn draw(&mut self, handle: MeshHandle, mesh: &Mesh, world: &Affine3A) {
        self.calls.push(DrawCall {
            handle,
            name: mesh.name.clone(),
            world: *world,
        });
    }
}
