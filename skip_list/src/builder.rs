use strata_traits::default::{
    WithMaxLevel, WithSeed, DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY,
};

use crate::level::GeometricalLevelGenerator;
use crate::skip_list::SkipList;
use crate::Result;

pub struct SkipListBuilder {
    max_level: usize,
    probability: f64,
    seed: Option<u64>,
    capacity: usize,
}
impl Default for SkipListBuilder {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            seed: None,
            capacity: 0,
        }
    }
}
impl WithMaxLevel for SkipListBuilder {
    fn set_max_level(&mut self, max_level: usize) -> &mut Self {
        self.max_level = max_level;
        self
    }

    fn max_level(&self) -> usize {
        self.max_level
    }
}
impl WithSeed for SkipListBuilder {
    fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}
impl SkipListBuilder {
    pub fn set_probability(&mut self, probability: f64) -> &mut Self {
        self.probability = probability;
        self
    }
    pub fn probability(&self) -> f64 {
        self.probability
    }
    /// Number of nodes to preallocate room for.
    pub fn set_capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn generator(&self) -> Result<GeometricalLevelGenerator> {
        let generator = match self.seed {
            Some(seed) => GeometricalLevelGenerator::with_seed(
                self.max_level,
                self.probability,
                seed,
            )?,
            None => {
                GeometricalLevelGenerator::new(self.max_level, self.probability)?
            }
        };
        Ok(generator)
    }
    /// An empty list.
    pub fn build<K: Ord>(&self) -> Result<SkipList<K>> {
        SkipList::with_capacity(self.generator()?, self.capacity)
    }
    /// A list holding `keys`, which must be strictly ascending.
    pub fn build_from_sorted<K, I>(&self, keys: I) -> Result<SkipList<K>>
    where
        K: Ord,
        I: IntoIterator<Item = K>,
    {
        SkipList::from_sorted(keys, self.generator()?)
    }
}
