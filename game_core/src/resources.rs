use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Freeze countdown in microseconds, consumed one tick at a time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PauseTimer {
    pub remaining_us: f32, // 0 = running
}

impl PauseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, microseconds: f32) {
        self.remaining_us = microseconds;
    }

    /// Consume one tick. Returns true while the owner must stay frozen.
    pub fn tick(&mut self, frame_us: f32) -> bool {
        if self.remaining_us > 0.0 {
            self.remaining_us -= frame_us;
            true
        } else {
            self.remaining_us = 0.0;
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining_us > 0.0
    }
}

/// Random number generator private to one entity
#[derive(Debug, Clone)]
pub struct EntityRng(pub rand::rngs::StdRng);

impl EntityRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Independent generator number `stream` derived from one session seed
    pub fn stream(seed: u64, stream: u64) -> Self {
        Self::new(seed ^ stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    pub fn coin_toss(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// Uniform sample from `[low, high)`
    pub fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.0.gen_range(low..high)
    }

    /// Zero-mean normal sample
    pub fn gaussian(&mut self, std_dev: f32) -> f32 {
        let z: f32 = self.0.sample(StandardNormal);
        z * std_dev
    }
}

impl Default for EntityRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
