// ============================================================================
// BACKDROP ENGINE - Drifting technology panels over a particle field
// ============================================================================
//
// Headless core (scene, sim, texture, render seam) plus a wasm facade that
// forwards each frame to a JavaScript scene host.

pub mod config;
pub mod error;
pub mod palette;
pub mod render;
pub mod rng;
pub mod scene;
pub mod sim;
pub mod texture;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{SceneConfig, TimeStep};
pub use error::RenderError;
pub use palette::{PanelEntry, Rgb, DEFAULT_PANELS};
pub use render::{Encoder, Renderer};
pub use rng::Rng;
pub use scene::{Camera, Panel, PanelMotion, ParticleCloud, Scene, SceneBuilder, Transform};
pub use sim::{Controller, LoopState, PointerTracker, Simulation};
