extern crate thiserror;

mod arena;
pub mod builder;
pub mod error;
mod impls;
pub mod iter;
pub mod level;
pub mod skip_list;

pub use error::{ConfigError, StrataSkipListError};
pub(crate) type Result<T> = std::result::Result<T, StrataSkipListError>;
