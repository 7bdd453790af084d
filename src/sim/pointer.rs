// pointer.rs - Smoothed pointer position
//
// Raw moves set the target; each frame the smoothed position closes a fixed
// fraction of the remaining gap. It never overshoots and never quite arrives.

use glam::DVec2;

#[derive(Clone, Debug)]
pub struct PointerTracker {
    target: DVec2,
    smoothed: DVec2,
    factor: f64,
}

impl PointerTracker {
    pub fn new(factor: f64) -> Self {
        Self { target: DVec2::ZERO, smoothed: DVec2::ZERO, factor }
    }

    /// Map device pixels (origin top-left) to [-1, 1] with +Y up.
    /// Ignored while the viewport has no area.
    pub fn move_to_pixel(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.target = DVec2::new(
            2.0 * x / width as f64 - 1.0,
            -(2.0 * y / height as f64 - 1.0),
        );
    }

    pub fn aim(&mut self, target: DVec2) {
        self.target = target;
    }

    /// One frame of smoothing, `frames` long (1.0 at the reference rate).
    pub fn step(&mut self, frames: f64) {
        let k = compound(self.factor, frames);
        self.smoothed += (self.target - self.smoothed) * k;
    }

    pub fn target(&self) -> DVec2 {
        self.target
    }

    pub fn smoothed(&self) -> DVec2 {
        self.smoothed
    }
}

/// Fraction of the gap closed after `frames` frames of per-frame factor `f`.
#[inline]
pub(crate) fn compound(f: f64, frames: f64) -> f64 {
    if frames == 1.0 {
        f
    } else {
        1.0 - (1.0 - f).powf(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_map_to_unit_square() {
        let mut p = PointerTracker::new(0.05);
        p.move_to_pixel(0.0, 0.0, 800, 600);
        assert_eq!(p.target(), DVec2::new(-1.0, 1.0));
        p.move_to_pixel(800.0, 600.0, 800, 600);
        assert_eq!(p.target(), DVec2::new(1.0, -1.0));
        p.move_to_pixel(400.0, 300.0, 800, 600);
        assert_eq!(p.target(), DVec2::ZERO);
    }

    #[test]
    fn zero_viewport_is_ignored() {
        let mut p = PointerTracker::new(0.05);
        p.aim(DVec2::new(0.25, 0.25));
        p.move_to_pixel(10.0, 10.0, 0, 600);
        assert_eq!(p.target(), DVec2::new(0.25, 0.25));
    }

    #[test]
    fn converges_monotonically_without_overshoot() {
        let mut p = PointerTracker::new(0.05);
        let target = DVec2::new(0.8, -0.6);
        p.aim(target);

        let mut prev = (target - p.smoothed()).abs();
        let mut ticks = 0;
        while (target - p.smoothed()).abs().max_element() >= 1e-6 {
            p.step(1.0);
            ticks += 1;
            let gap = (target - p.smoothed()).abs();
            assert!(gap.x <= prev.x && gap.y <= prev.y);
            assert!(p.smoothed().x <= target.x && p.smoothed().y >= target.y);
            prev = gap;
            assert!(ticks < 400, "did not converge");
        }
        assert!(ticks > 200);
    }

    #[test]
    fn settled_pointer_stays_put() {
        let mut p = PointerTracker::new(0.05);
        for _ in 0..10 {
            p.step(1.0);
        }
        assert_eq!(p.smoothed(), DVec2::ZERO);
    }

    #[test]
    fn compound_matches_repeated_steps() {
        let mut a = PointerTracker::new(0.05);
        let mut b = PointerTracker::new(0.05);
        a.aim(DVec2::ONE);
        b.aim(DVec2::ONE);
        a.step(1.0);
        a.step(1.0);
        b.step(2.0);
        assert!((a.smoothed() - b.smoothed()).length() < 1e-12);
    }
}
