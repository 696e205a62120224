//! Uniform random sampling over closed numeric ranges.
//!
//! Every random draw in the simulation (vertex counts, jitter, spawn velocity
//! and spin) goes through a [`UniformSampler`] passed in by the caller, so a
//! run can be reproduced by seeding the sampler and tests can substitute a
//! fixed stub.

use bevy::prelude::*;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed values.
pub trait UniformSampler {
    /// Draw a value uniformly from the closed range `[low, high]`.
    ///
    /// Panics if `low > high`; configuration validation rules that out.
    fn uniform<T>(&mut self, low: T, high: T) -> T
    where
        T: SampleUniform + PartialOrd;
}

/// [`UniformSampler`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSampler<R = StdRng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    /// Deterministic stream: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> UniformSampler for RandomSampler<R> {
    fn uniform<T>(&mut self, low: T, high: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.gen_range(low..=high)
    }
}

/// Bevy resource holding the simulation's random source.
#[derive(Resource, Debug, Clone)]
pub struct SimRng(pub RandomSampler);
