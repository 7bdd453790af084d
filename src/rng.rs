// rng.rs - Seedable xorshift32
//
// Scene construction only needs a handful of uniform draws, so a tiny
// generator keeps runs reproducible from a seed.

const DEFAULT_SEED: u32 = 0xDEADBEEF;

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        // zero is a fixed point of xorshift
        let state = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { state }
    }

    /// Uniform in [0, 1)
    #[inline(always)]
    pub fn rand(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f64 * (1.0 / 16777216.0)
    }

    /// Uniform in [lo, hi)
    #[inline]
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.rand()
    }

    /// Uniform in [-width/2, width/2)
    #[inline]
    pub fn centered(&mut self, width: f64) -> f64 {
        (self.rand() - 0.5) * width
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
