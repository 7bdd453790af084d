// motion.rs - Per-panel drift, bob, bounce and spin

use glam::DVec3;

use crate::scene::{PanelMotion, Transform};

/// Advance one panel by `frames` reference frames at clock `time`.
pub fn advance_panel(
    t: &mut Transform,
    m: &mut PanelMotion,
    time: f64,
    frames: f64,
    float_rate: f64,
    float_amplitude: f64,
    bounds: DVec3,
) {
    // Y is driven by the bob only; its velocity is still reflected below
    t.position.y += (time * float_rate + m.float_phase).sin() * float_amplitude * frames;
    t.position.x += m.velocity.x * frames;
    t.position.z += m.velocity.z * frames;

    m.velocity.x = reflect(t.position.x, m.velocity.x, bounds.x);
    m.velocity.y = reflect(t.position.y, m.velocity.y, bounds.y);
    m.velocity.z = reflect(t.position.z, m.velocity.z, bounds.z);

    t.rotation.x += m.spin.x * frames;
    t.rotation.y += m.spin.y * frames;
}

/// Invert `v` once `p` is past `bound` and `v` still points outward.
#[inline]
pub fn reflect(p: f64, v: f64, bound: f64) -> f64 {
    if (p > bound && v > 0.0) || (p < -bound && v < 0.0) {
        -v
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    const BOUNDS: DVec3 = DVec3::new(30.0, 20.0, 15.0);

    fn still(velocity: DVec3) -> PanelMotion {
        PanelMotion { velocity, spin: DVec2::ZERO, float_phase: 0.0 }
    }

    #[test]
    fn reflect_only_outward() {
        assert_eq!(reflect(31.0, 0.1, 30.0), -0.1);
        assert_eq!(reflect(31.0, -0.1, 30.0), -0.1);
        assert_eq!(reflect(-31.0, -0.1, 30.0), 0.1);
        assert_eq!(reflect(-31.0, 0.1, 30.0), 0.1);
        assert_eq!(reflect(30.0, 0.1, 30.0), 0.1);
    }

    #[test]
    fn x_flips_once_per_crossing() {
        let mut t = Transform { position: DVec3::new(29.99, 0.0, 0.0), ..Default::default() };
        let mut m = still(DVec3::new(0.004, 0.0, 0.0));
        let mut flips = Vec::new();
        let mut prev = m.velocity.x;
        let mut crossed_at = None;

        for frame in 0..40_000 {
            advance_panel(&mut t, &mut m, 0.0, 1.0, 0.5, 0.0, BOUNDS);
            if crossed_at.is_none() && t.position.x > 30.0 {
                crossed_at = Some(frame);
            }
            if m.velocity.x.signum() != prev.signum() {
                flips.push((frame, t.position.x));
            }
            prev = m.velocity.x;
        }

        // out past +30, back across the ring to -30, and out again
        assert!(flips.len() >= 2);
        assert_eq!(flips[0].0, crossed_at.unwrap());
        assert!(flips[0].1 > 30.0);
        assert!(flips[1].1 < -30.0);
        for w in flips.windows(2) {
            assert!(w[0].1.signum() != w[1].1.signum(), "flipped twice on one side");
        }
        assert!(t.position.x.abs() < 30.0 + 0.004 + 1e-9);
    }

    #[test]
    fn overshoot_is_brief() {
        let mut t = Transform { position: DVec3::new(0.0, 0.0, 14.999), ..Default::default() };
        let mut m = still(DVec3::new(0.0, 0.0, 0.0025));
        let mut outside = 0;
        for _ in 0..100 {
            advance_panel(&mut t, &mut m, 0.0, 1.0, 0.5, 0.0, BOUNDS);
            if t.position.z > 15.0 {
                outside += 1;
            }
        }
        assert_eq!(outside, 1);
        assert!(m.velocity.z < 0.0);
    }

    #[test]
    fn panel_placed_outside_recovers() {
        let mut t = Transform { position: DVec3::new(0.0, 21.6, 0.0), ..Default::default() };
        let mut m = still(DVec3::new(0.0, 0.003, 0.0));
        for _ in 0..10 {
            advance_panel(&mut t, &mut m, 0.0, 1.0, 0.5, 0.0, BOUNDS);
        }
        assert_eq!(m.velocity.y, -0.003);
    }

    #[test]
    fn y_velocity_never_moves_a_panel() {
        // 60 degree ring slot: starts above the Y bound and only bobs
        let y0 = 25.0 * (std::f64::consts::TAU / 6.0).sin();
        let mut drifting = Transform { position: DVec3::new(0.0, y0, 0.0), ..Default::default() };
        let mut resting = drifting;
        let mut m1 = still(DVec3::new(0.0, 0.003, 0.0));
        let mut m2 = still(DVec3::ZERO);

        let mut lowest = f64::MAX;
        for frame in 1..=100_000 {
            let time = frame as f64 * 0.01;
            advance_panel(&mut drifting, &mut m1, time, 1.0, 0.5, 0.01, BOUNDS);
            advance_panel(&mut resting, &mut m2, time, 1.0, 0.5, 0.01, BOUNDS);
            lowest = lowest.min(drifting.position.y);
        }

        assert_eq!(drifting.position.y, resting.position.y);
        assert_eq!(m1.velocity.y, -0.003);
        assert!(lowest > BOUNDS.y, "bob alone brought y down to {lowest}");
    }

    #[test]
    fn bob_and_spin() {
        let mut t = Transform::default();
        let mut m = PanelMotion {
            velocity: DVec3::ZERO,
            spin: DVec2::new(0.001, -0.002),
            float_phase: std::f64::consts::FRAC_PI_2,
        };
        advance_panel(&mut t, &mut m, 0.0, 1.0, 0.5, 0.01, BOUNDS);
        assert!((t.position.y - 0.01).abs() < 1e-15);
        assert_eq!(t.rotation.x, 0.001);
        assert_eq!(t.rotation.y, -0.002);
        assert_eq!(t.rotation.z, 0.0);
    }
}
