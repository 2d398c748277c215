//! Four-lane 64-bit xorshift generator.

use rand::{RngCore, SeedableRng};

use super::fill_bytes_from_u64;

const WARM_UP: usize = 100;

/// xorshift over four 64-bit words, seeded through the last lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128 {
    x: u64,
    y: u64,
    z: u64,
    w: u64,
}

impl Xorshift128 {
    /// Fixed first three lanes, `seed` in the fourth, then 100 discarded steps.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            x: 123_456_789,
            y: 362_436_069,
            z: 521_288_629,
            w: seed,
        };
        for _ in 0..WARM_UP {
            rng.step();
        }
        rng
    }

    fn step(&mut self) -> u64 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }
}

impl RngCore for Xorshift128 {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_from_u64(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift128 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
