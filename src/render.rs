// render.rs - Renderer seam and per-frame output encoding
//
// Frame buffer layout (f32, handed to the host each frame):
//   0..3     camera position
//   3..6     camera look target
//   6        camera aspect
//   7        particle cloud Y rotation
//   8        scene clock
//   9        panel count N
//   10..     N x (position xyz, rotation xyz)

use crate::error::RenderError;
use crate::scene::{Camera, Scene};

pub const HEADER_LEN: usize = 10;
pub const PANEL_STRIDE: usize = 6;

/// The scene-graph collaborator. `prepare` receives the static content
/// (textures, particles, lights) once; `draw` runs every frame.
pub trait Renderer {
    fn prepare(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError>;
    fn draw(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError>;
}

pub struct Encoder {
    out: Vec<f32>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    pub fn encode(&mut self, scene: &Scene, camera: &Camera) -> &[f32] {
        self.out.clear();
        self.out.reserve(HEADER_LEN + scene.panel_count() * PANEL_STRIDE);

        let target = camera.target();
        self.out.extend([
            camera.position.x as f32,
            camera.position.y as f32,
            camera.position.z as f32,
            target.x as f32,
            target.y as f32,
            target.z as f32,
            camera.aspect as f32,
            scene.particles.rotation_y as f32,
            scene.time as f32,
            scene.panel_count() as f32,
        ]);

        for panel in &scene.panels {
            let t = &panel.transform;
            self.out.extend([
                t.position.x as f32,
                t.position.y as f32,
                t.position.z as f32,
                t.rotation.x as f32,
                t.rotation.y as f32,
                t.rotation.z as f32,
            ]);
        }

        &self.out
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
