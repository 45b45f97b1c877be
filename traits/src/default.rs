/// Ceiling on node height when none is configured.
pub const DEFAULT_MAX_LEVEL: usize = 16;
/// Chance that a node present at level `l` also appears at level `l + 1`.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

pub trait WithSeed {
    fn set_seed(&mut self, seed: u64) -> &mut Self;
    fn seed(&self) -> Option<u64>;
}
pub trait WithMaxLevel {
    fn set_max_level(&mut self, max_level: usize) -> &mut Self;
    fn max_level(&self) -> usize;
}
