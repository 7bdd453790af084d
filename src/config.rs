// config.rs - Tuning constants for the backdrop scene
//
// Everything is in scene units (the camera starts 30 units from the origin)
// and per-frame increments at the reference refresh rate.

use glam::DVec3;

use crate::palette::Rgb;

// Panel placement
pub const RING_RADIUS: f64 = 25.0;
pub const DEPTH_JITTER: f64 = 10.0;      // z in [-5, 5]

// Panel motion (full widths of the uniform ranges, centered on zero)
pub const DRIFT_XY: f64 = 0.01;
pub const DRIFT_Z: f64 = 0.005;
pub const SPIN: f64 = 0.005;
pub const FLOAT_AMPLITUDE: f64 = 0.01;
pub const FLOAT_RATE: f64 = 0.5;
pub const BOUNDS: DVec3 = DVec3::new(30.0, 20.0, 15.0);

// Particle cloud
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 80.0;   // cube of half-width 40
pub const PARTICLE_SPIN: f64 = 0.0003;

// Pointer + camera
pub const POINTER_SMOOTHING: f64 = 0.05;
pub const CAMERA_FOLLOW: f64 = 0.03;
pub const CAMERA_DRIFT: f64 = 3.0;
pub const CAMERA_DISTANCE: f64 = 30.0;

// Clock
pub const TIME_STEP: f64 = 0.01;
pub const REFERENCE_HZ: f64 = 60.0;
pub const MAX_CATCH_UP: f64 = 4.0;

// Textures
pub const TEXTURE_SIZE: u32 = 512;
pub const TEXTURE_CORNER_RADIUS: f32 = 60.0;
pub const TEXTURE_FADE_ALPHA: u8 = 0xcc;

/// How the clock advances between host callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeStep {
    /// One logical frame per callback, whatever the display refresh rate.
    Fixed,
    /// Frames derived from the host timestamp delta against `reference_hz`,
    /// capped at `max_catch_up` frames per callback.
    WallClock { reference_hz: f64, max_catch_up: f64 },
}

impl TimeStep {
    pub fn wall_clock() -> Self {
        TimeStep::WallClock { reference_hz: REFERENCE_HZ, max_catch_up: MAX_CATCH_UP }
    }
}

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub distance: f64,
    pub follow: f64,
    pub drift: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: CAMERA_DISTANCE,
            follow: CAMERA_FOLLOW,
            drift: CAMERA_DRIFT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleConfig {
    pub count: usize,
    pub spread: f32,
    pub spin: f64,
    pub point_size: f32,
    pub color: Rgb,
    pub opacity: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spread: PARTICLE_SPREAD,
            spin: PARTICLE_SPIN,
            point_size: 0.12,
            color: Rgb::from_hex(0x9bb0d8),
            opacity: 0.5,
        }
    }
}

/// Material hints for the panel boxes, passed through to the renderer.
#[derive(Clone, Debug)]
pub struct PanelStyle {
    pub size: DVec3,
    pub shininess: f32,
    pub specular: Rgb,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            size: DVec3::new(5.0, 5.0, 0.8),
            shininess: 50.0,
            specular: Rgb::from_hex(0x6c7fd8),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub ring_radius: f64,
    pub depth_jitter: f64,
    pub drift_xy: f64,
    pub drift_z: f64,
    pub spin: f64,
    pub float_amplitude: f64,
    pub float_rate: f64,
    pub bounds: DVec3,
    pub pointer_smoothing: f64,
    pub time_step: TimeStep,
    pub clear_color: Rgb,
    pub texture_size: u32,
    pub panel: PanelStyle,
    pub camera: CameraConfig,
    pub particles: ParticleConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ring_radius: RING_RADIUS,
            depth_jitter: DEPTH_JITTER,
            drift_xy: DRIFT_XY,
            drift_z: DRIFT_Z,
            spin: SPIN,
            float_amplitude: FLOAT_AMPLITUDE,
            float_rate: FLOAT_RATE,
            bounds: BOUNDS,
            pointer_smoothing: POINTER_SMOOTHING,
            time_step: TimeStep::Fixed,
            clear_color: Rgb::from_hex(0x1a1d29),
            texture_size: TEXTURE_SIZE,
            panel: PanelStyle::default(),
            camera: CameraConfig::default(),
            particles: ParticleConfig::default(),
        }
    }
}
