//! The deterministic random stream of a world.
//!
//! A world owns exactly one `SimRng`, seeded from `WorldConfig::seed`, and
//! lends it to every call site that needs randomness (degenerate-overlap
//! perturbation, initial placement, agent controllers).  Draw order is fixed
//! by the step loop (agents in id order, neighbors in query order), so equal
//! seeds replay equal trajectories.  Nothing is global: two worlds in the same
//! process never share state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG threaded through world construction and stepping.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A value in `[0, magnitude)` with a random sign.
    ///
    /// Draws the sign first, then the magnitude: two draws per call.
    #[inline]
    pub fn signed_jitter(&mut self, magnitude: f64) -> f64 {
        let sign = if self.0.r#gen::<f64>() > 0.5 { -1.0 } else { 1.0 };
        self.0.r#gen::<f64>() * sign * magnitude
    }
}
