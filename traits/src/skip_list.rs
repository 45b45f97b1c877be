use std::error::Error;
use std::fmt::Display;

use thiserror::Error;

/// An ordered set of unique keys with point search, insert and delete.
///
/// Mutation takes `&mut self`; implementations are not expected to carry
/// their own synchronization.
pub trait SkipListTrait<K: Ord> {
    /// Returns the stored key equal to `key`.
    fn search(&self, key: &K) -> Result<&K, SkipListError>;
    /// Adds `key`, failing if an equal key is already present.
    fn insert(&mut self, key: K) -> Result<(), SkipListError>;
    /// Removes the key equal to `key` and hands it back.
    fn delete(&mut self, key: &K) -> Result<K, SkipListError>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    /// Number of levels currently holding at least one key.
    fn height(&self) -> usize;
    fn max_level(&self) -> usize;
}
#[derive(Error, Debug)]
pub struct SkipListError(Box<dyn Error + Send + Sync>);
impl SkipListError {
    pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
        SkipListError(Box::new(error))
    }
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}
impl Display for SkipListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SkipList Error: {}", self.0)
    }
}
