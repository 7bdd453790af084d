// builder.rs - One-shot scene construction
//
// Panels go on a ring in the XY plane, evenly spaced by table index, with a
// random depth and tilt. Motion parameters are drawn independently per panel.

use std::f64::consts::{PI, TAU};

use glam::{DVec2, DVec3, Vec3};

use super::{default_lights, Panel, PanelMotion, ParticleCloud, Scene, Transform};
use crate::config::SceneConfig;
use crate::palette::{PanelEntry, DEFAULT_PANELS};
use crate::rng::Rng;
use crate::texture;

pub struct SceneBuilder<'a> {
    config: &'a SceneConfig,
    entries: &'a [PanelEntry],
}

impl<'a> SceneBuilder<'a> {
    pub fn new(config: &'a SceneConfig) -> Self {
        Self { config, entries: DEFAULT_PANELS }
    }

    pub fn with_entries(mut self, entries: &'a [PanelEntry]) -> Self {
        self.entries = entries;
        self
    }

    pub fn build(&self, rng: &mut Rng) -> Scene {
        let n = self.entries.len();
        let mut panels = Vec::with_capacity(n);
        let mut motion = Vec::with_capacity(n);

        for (i, entry) in self.entries.iter().enumerate() {
            let (transform, params) = self.place(i, n, rng);
            panels.push(Panel {
                entry: *entry,
                texture: texture::generate(entry, self.config.texture_size),
                transform,
            });
            motion.push(params);
        }

        let particles = self.particles(rng);

        log::info!(
            "scene built: {} panels, {} particles",
            panels.len(),
            particles.len()
        );

        Scene {
            panels,
            motion,
            particles,
            lights: default_lights(),
            panel_style: self.config.panel.clone(),
            clear_color: self.config.clear_color,
            time: 0.0,
        }
    }

    /// Ring slot i of n, plus freshly drawn motion parameters.
    fn place(&self, i: usize, n: usize, rng: &mut Rng) -> (Transform, PanelMotion) {
        let cfg = self.config;
        let angle = TAU * i as f64 / n as f64;

        let position = DVec3::new(
            angle.cos() * cfg.ring_radius,
            angle.sin() * cfg.ring_radius,
            rng.centered(cfg.depth_jitter),
        );
        let rotation = DVec3::new(rng.range(0.0, PI), rng.range(0.0, PI), 0.0);

        let motion = PanelMotion {
            velocity: DVec3::new(
                rng.centered(cfg.drift_xy),
                rng.centered(cfg.drift_xy),
                rng.centered(cfg.drift_z),
            ),
            spin: DVec2::new(rng.centered(cfg.spin), rng.centered(cfg.spin)),
            float_phase: rng.range(0.0, TAU),
        };

        (Transform { position, rotation }, motion)
    }

    fn particles(&self, rng: &mut Rng) -> ParticleCloud {
        let style = self.config.particles.clone();
        let spread = style.spread as f64;
        let positions = (0..style.count)
            .map(|_| {
                Vec3::new(
                    rng.centered(spread) as f32,
                    rng.centered(spread) as f32,
                    rng.centered(spread) as f32,
                )
            })
            .collect();
        ParticleCloud::new(positions, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Light;

    fn build(seed: u32) -> Scene {
        // small cards keep the texture pass cheap
        let config = SceneConfig { texture_size: 64, ..SceneConfig::default() };
        SceneBuilder::new(&config).build(&mut Rng::new(seed))
    }

    #[test]
    fn panels_sit_on_the_ring() {
        let scene = build(1);
        assert_eq!(scene.panels.len(), 6);
        assert_eq!(scene.motion.len(), 6);
        for (i, panel) in scene.panels.iter().enumerate() {
            let angle = TAU * i as f64 / 6.0;
            let p = panel.transform.position;
            assert!((p.x - 25.0 * angle.cos()).abs() < 1e-9, "panel {i} x");
            assert!((p.y - 25.0 * angle.sin()).abs() < 1e-9, "panel {i} y");
            assert!((-5.0..=5.0).contains(&p.z));
        }
    }

    #[test]
    fn random_draws_stay_in_range() {
        for seed in 1..20 {
            let scene = build(seed);
            for (panel, m) in scene.panels.iter().zip(&scene.motion) {
                let r = panel.transform.rotation;
                assert!((0.0..=PI).contains(&r.x) && (0.0..=PI).contains(&r.y));
                assert_eq!(r.z, 0.0);
                assert!(m.velocity.x.abs() <= 0.005 && m.velocity.y.abs() <= 0.005);
                assert!(m.velocity.z.abs() <= 0.0025);
                assert!(m.spin.x.abs() <= 0.0025 && m.spin.y.abs() <= 0.0025);
                assert!((0.0..=TAU).contains(&m.float_phase));
            }
            for p in scene.particles.positions() {
                assert!(p.x.abs() <= 40.0 && p.y.abs() <= 40.0 && p.z.abs() <= 40.0);
            }
        }
    }

    #[test]
    fn lights_and_particles() {
        let scene = build(3);
        assert_eq!(scene.particles.len(), 200);
        assert_eq!(scene.particles.rotation_y, 0.0);
        assert_eq!(scene.lights.len(), 3);
        let ambient = scene
            .lights
            .iter()
            .filter(|l| matches!(l, Light::Ambient { .. }))
            .count();
        assert_eq!(ambient, 1);
    }

    #[test]
    fn custom_table_sets_panel_count() {
        let config = SceneConfig::default();
        let entries = [
            PanelEntry::new("Rust", "Rust", 0xdea584),
            PanelEntry::new("Go", "Go", 0x00add8),
        ];
        let scene = SceneBuilder::new(&config)
            .with_entries(&entries)
            .build(&mut Rng::new(9));
        assert_eq!(scene.panels.len(), 2);
        assert!((scene.panels[1].transform.position.x + 25.0).abs() < 1e-9);
    }

    #[test]
    fn textures_do_not_depend_on_seed() {
        let a = build(11);
        let b = build(12);
        for (pa, pb) in a.panels.iter().zip(&b.panels) {
            assert_eq!(pa.texture, pb.texture);
        }
    }
}
