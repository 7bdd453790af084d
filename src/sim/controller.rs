// controller.rs - Simulation + renderer + lifecycle
//
//   Idle --start--> Running <--pause/resume--> Paused
//     any --stop--> Stopped (terminal)
//
// Without a renderer the controller never leaves Idle, so the host never
// schedules a frame. Draw failures while running are logged and the
// simulation keeps going.

use glam::DVec2;

use super::Simulation;
use crate::render::Renderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Paused,
    Stopped,
}

pub struct Controller<R: Renderer> {
    sim: Simulation,
    renderer: Option<R>,
    state: LoopState,
    draw_failing: bool,
    draws: u64,
}

impl<R: Renderer> Controller<R> {
    /// Hand the built scene to the renderer. A renderer that cannot take it
    /// is dropped and the controller stays inert.
    pub fn new(sim: Simulation, renderer: Option<R>) -> Self {
        let renderer = renderer.and_then(|mut r| match r.prepare(sim.scene(), sim.camera()) {
            Ok(()) => Some(r),
            Err(e) => {
                log::warn!("{e}; background animation disabled");
                None
            }
        });

        Self { sim, renderer, state: LoopState::Idle, draw_failing: false, draws: 0 }
    }

    pub fn is_available(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn start(&mut self) -> bool {
        match self.state {
            LoopState::Idle if self.renderer.is_some() => {
                self.state = LoopState::Running;
                log::info!("backdrop animation started");
                true
            }
            LoopState::Idle => {
                log::warn!("rendering unavailable; backdrop animation not started");
                false
            }
            LoopState::Running | LoopState::Paused => true,
            LoopState::Stopped => false,
        }
    }

    pub fn pause(&mut self) {
        if self.state == LoopState::Running {
            self.state = LoopState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == LoopState::Paused {
            self.sim.reset_clock();
            self.state = LoopState::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            log::info!("backdrop animation stopped after {} frames", self.sim.frame_count());
        }
        self.state = LoopState::Stopped;
    }

    /// One display refresh. Returns whether the host should call again.
    pub fn frame(&mut self, timestamp: Option<f64>) -> bool {
        match self.state {
            LoopState::Running => {
                self.sim.frame(timestamp);
                self.draw();
                true
            }
            LoopState::Paused => true,
            LoopState::Idle | LoopState::Stopped => false,
        }
    }

    /// Advance exactly `n` frames, drawing each, regardless of lifecycle.
    pub fn run_for(&mut self, n: usize) {
        for _ in 0..n {
            self.sim.tick();
            self.draw();
        }
    }

    fn draw(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else { return };
        match renderer.draw(self.sim.scene(), self.sim.camera()) {
            Ok(()) => {
                if self.draw_failing {
                    log::info!("rendering recovered");
                }
                self.draw_failing = false;
                self.draws += 1;
            }
            Err(e) => {
                if !self.draw_failing {
                    log::warn!("{e}; continuing without drawing");
                }
                self.draw_failing = true;
            }
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.sim.pointer_move(x, y);
    }

    pub fn aim_pointer(&mut self, target: DVec2) {
        self.sim.aim_pointer(target);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        log::debug!("resize to {w}x{h}");
        self.sim.resize(w, h);
        if let Some(renderer) = self.renderer.as_mut() {
            if let Err(e) = renderer.resize(w, h) {
                log::warn!("{e}");
            }
        }
    }

    pub fn state(&self) -> LoopState { self.state }
    pub fn simulation(&self) -> &Simulation { &self.sim }
    pub fn renderer(&self) -> Option<&R> { self.renderer.as_ref() }
    pub fn draw_count(&self) -> u64 { self.draws }
}
