use thiserror::Error;
#[derive(Error, Debug, PartialEq)]
pub enum StrataSkipListError {
    #[error("Key not found")]
    KeyNotFound,
    #[error("Duplicate key")]
    DuplicateKey,
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("Input is not strictly ascending at index {index}")]
    UnsortedInput { index: usize },
}
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Max level must be in [1, 32], got {max_level}")]
    MaxLevel { max_level: usize },
    #[error("Promotion probability must be in (0, 1), got {p}")]
    Probability { p: f64 },
}
