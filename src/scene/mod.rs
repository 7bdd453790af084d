// scene/ - Scene graph for the backdrop
//
// Plain data, no rendering: the renderer reads it, the simulation writes
// panel transforms, the camera and the cloud rotation.
//
// Panel motion parameters live in their own table, parallel to `panels`,
// so the transforms a renderer sees carry no simulation bookkeeping.

mod builder;
mod camera;

pub use builder::SceneBuilder;
pub use camera::Camera;

use glam::{DVec2, DVec3, Vec3};

use crate::config::{PanelStyle, ParticleConfig};
use crate::palette::{PanelEntry, Rgb};
use crate::texture::PanelTexture;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: DVec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: DVec3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelMotion {
    pub velocity: DVec3,
    /// Rotation speed around X and Y.
    pub spin: DVec2,
    pub float_phase: f64,
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub entry: PanelEntry,
    pub texture: PanelTexture,
    pub transform: Transform,
}

#[derive(Clone, Debug)]
pub struct ParticleCloud {
    positions: Vec<Vec3>,
    /// Whole-cloud rotation around Y.
    pub rotation_y: f64,
    pub style: ParticleConfig,
}

impl ParticleCloud {
    pub fn new(positions: Vec<Vec3>, style: ParticleConfig) -> Self {
        Self { positions, rotation_y: 0.0, style }
    }

    /// Point positions, fixed once the cloud exists.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient { color: Rgb, intensity: f32 },
    Point { color: Rgb, intensity: f32, position: DVec3 },
}

pub fn default_lights() -> Vec<Light> {
    vec![
        Light::Ambient { color: Rgb::from_hex(0x9bb0d8), intensity: 0.5 },
        Light::Point {
            color: Rgb::from_hex(0x6c7fd8),
            intensity: 0.8,
            position: DVec3::new(15.0, 15.0, 15.0),
        },
        Light::Point {
            color: Rgb::from_hex(0x7f95d1),
            intensity: 0.6,
            position: DVec3::new(-15.0, -15.0, 10.0),
        },
    ]
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub panels: Vec<Panel>,
    /// Indexed like `panels`.
    pub motion: Vec<PanelMotion>,
    pub particles: ParticleCloud,
    pub lights: Vec<Light>,
    pub panel_style: PanelStyle,
    pub clear_color: Rgb,
    /// Logical clock, advanced by the simulation.
    pub time: f64,
}

impl Scene {
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}
