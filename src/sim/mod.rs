// sim/ - Backdrop simulation
//
// `Simulation` holds all per-frame state (scene, camera, pointer, clock) and
// advances it headlessly. `Controller` adds the renderer and the start/stop
// lifecycle on top.

mod controller;
mod motion;
mod pointer;

pub use controller::{Controller, LoopState};
pub use motion::{advance_panel, reflect};
pub use pointer::PointerTracker;

use glam::{DVec2, DVec3};

use crate::config::{SceneConfig, TimeStep, TIME_STEP};
use crate::palette::PanelEntry;
use crate::rng::Rng;
use crate::scene::{Camera, Scene, SceneBuilder};
use pointer::compound;

pub struct Simulation {
    config: SceneConfig,
    scene: Scene,
    camera: Camera,
    pointer: PointerTracker,

    // Viewport in device pixels
    w: u32,
    h: u32,

    frames: u64,
    last_timestamp: Option<f64>,
}

impl Simulation {
    pub fn new(config: SceneConfig, seed: u32, w: u32, h: u32) -> Self {
        let scene = SceneBuilder::new(&config).build(&mut Rng::new(seed));
        Self::from_scene(config, scene, w, h)
    }

    pub fn with_entries(config: SceneConfig, entries: &[PanelEntry], seed: u32, w: u32, h: u32) -> Self {
        let scene = SceneBuilder::new(&config)
            .with_entries(entries)
            .build(&mut Rng::new(seed));
        Self::from_scene(config, scene, w, h)
    }

    pub fn from_scene(config: SceneConfig, scene: Scene, w: u32, h: u32) -> Self {
        let camera = Camera::new(&config.camera, w, h);
        let pointer = PointerTracker::new(config.pointer_smoothing);
        Self {
            config,
            scene,
            camera,
            pointer,
            w,
            h,
            frames: 0,
            last_timestamp: None,
        }
    }

    /// One host callback. `timestamp` is the host clock in milliseconds;
    /// it only matters for `TimeStep::WallClock`.
    pub fn frame(&mut self, timestamp: Option<f64>) {
        let frames = self.frames_elapsed(timestamp);
        self.step(frames);
    }

    /// One reference frame.
    pub fn tick(&mut self) {
        self.step(1.0);
    }

    /// Advance by `frames` reference frames (1.0 = one fixed step).
    pub fn step(&mut self, frames: f64) {
        let cfg = &self.config;

        self.scene.time += TIME_STEP * frames;
        let time = self.scene.time;
        self.pointer.step(frames);

        for (panel, motion) in self.scene.panels.iter_mut().zip(self.scene.motion.iter_mut()) {
            advance_panel(
                &mut panel.transform,
                motion,
                time,
                frames,
                cfg.float_rate,
                cfg.float_amplitude,
                cfg.bounds,
            );
        }

        self.scene.particles.rotation_y += cfg.particles.spin * frames;

        let goal = self.pointer.smoothed() * cfg.camera.drift;
        let k = compound(cfg.camera.follow, frames);
        let cam = &mut self.camera;
        cam.position.x += (goal.x - cam.position.x) * k;
        cam.position.y += (goal.y - cam.position.y) * k;
        cam.look_at(DVec3::ZERO);

        self.frames += 1;
    }

    fn frames_elapsed(&mut self, timestamp: Option<f64>) -> f64 {
        match self.config.time_step {
            TimeStep::Fixed => 1.0,
            TimeStep::WallClock { reference_hz, max_catch_up } => {
                let Some(now) = timestamp else { return 1.0 };
                let frames = match self.last_timestamp {
                    Some(prev) => ((now - prev) / 1000.0 * reference_hz).clamp(0.0, max_catch_up),
                    None => 1.0,
                };
                self.last_timestamp = Some(now);
                frames
            }
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.move_to_pixel(x, y, self.w, self.h);
    }

    pub fn aim_pointer(&mut self, target: DVec2) {
        self.pointer.aim(target);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.camera.set_viewport(w, h);
    }

    /// Forget the previous host timestamp, so a resumed loop does not
    /// treat the pause as elapsed time.
    pub fn reset_clock(&mut self) {
        self.last_timestamp = None;
    }

    // Accessors
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn pointer(&self) -> &PointerTracker { &self.pointer }
    pub fn time(&self) -> f64 { self.scene.time }
    pub fn frame_count(&self) -> u64 { self.frames }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}
