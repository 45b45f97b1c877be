use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::ConfigError;

/// Highest ceiling a list accepts. `p^32` is below one in four billion for
/// `p = 0.5`.
pub const MAX_LEVEL: usize = 32;

/// Upon insertion a node is replicated to higher levels with a probability
/// decided by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The total number of levels this generator may hand out.
    fn total(&self) -> usize;
    /// The chance that a node on level `l` is also on level `l + 1`.
    fn probability(&self) -> f64;
    /// One promotion trial, `true` with chance [`probability`](Self::probability).
    fn promote(&mut self) -> bool;
    /// Height for a new node, in `[1, total]`.
    ///
    /// Every node starts on level 0 and climbs one level per successful
    /// trial, so `P(height >= k) = p^(k-1)` until the ceiling truncates it.
    fn random_height(&mut self) -> usize {
        let mut h = 1;
        while h < self.total() && self.promote() {
            h += 1;
        }
        h
    }
}

/// A level generator producing geometrically distributed heights.
#[derive(Debug, Clone)]
pub struct GeometricalLevelGenerator {
    total: usize,
    p: f64,
    rng: StdRng,
}

impl GeometricalLevelGenerator {
    /// Generator with `total` levels and promotion chance `p`, seeded from
    /// the operating system.
    pub fn new(total: usize, p: f64) -> Result<Self, ConfigError> {
        Self::with_rng(total, p, StdRng::from_entropy())
    }
    /// Same as [`new`](Self::new) but reproducible.
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(total, p, StdRng::seed_from_u64(seed))
    }
    fn with_rng(total: usize, p: f64, rng: StdRng) -> Result<Self, ConfigError> {
        validate(total, p)?;
        Ok(GeometricalLevelGenerator { total, p, rng })
    }
}

impl LevelGenerator for GeometricalLevelGenerator {
    fn total(&self) -> usize {
        self.total
    }

    fn probability(&self) -> f64 {
        self.p
    }

    #[inline]
    fn promote(&mut self) -> bool {
        self.rng.gen::<f64>() <= self.p
    }
}

pub(crate) fn validate(total: usize, p: f64) -> Result<(), ConfigError> {
    if total == 0 || total > MAX_LEVEL {
        return Err(ConfigError::MaxLevel { max_level: total });
    }
    // also rejects NaN
    if !(p > 0.0 && p < 1.0) {
        return Err(ConfigError::Probability { p });
    }
    Ok(())
}
