use noise::{NoiseFn, Value};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// 3D value noise remapped to `[0, 1]`.
pub struct NoiseField {
    value: Value,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            value: Value::new(seed),
        }
    }

    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let raw = self.value.get([x as f64, y as f64, z as f64]);
        ((raw as f32 + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

pub struct RandomSource {
    seed: u64,
    rng: SmallRng,
    noise: NoiseField,
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
            noise: NoiseField::new(seed as u32),
        }
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::thread_rng().r#gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Uniform in `[low, high)`. An empty range yields `low`.
    pub fn range(&mut self, low: f32, high: f32) -> f32 {
        if low < high {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }

    /// Uniform in `[0, high)`.
    pub fn below(&mut self, high: usize) -> usize {
        if high == 0 { 0 } else { self.rng.gen_range(0..high) }
    }

    pub fn angle(&mut self) -> f32 {
        self.range(0.0, TAU)
    }

    pub fn chance(&mut self, probability: f32) -> bool {
        self.rng.r#gen::<f32>() < probability
    }

    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            None
        } else {
            Some(items[self.below(items.len())])
        }
    }
}
