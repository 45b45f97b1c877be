use std::fmt::{self, Debug, Display};

use strata_traits::skip_list::{SkipListError, SkipListTrait};

use crate::{
    error::StrataSkipListError,
    iter::SkipListIter,
    level::LevelGenerator,
    skip_list::SkipList,
};

type Result<T> = std::result::Result<T, SkipListError>;

impl<K: Ord, G: LevelGenerator> SkipListTrait<K> for SkipList<K, G> {
    fn search(&self, key: &K) -> Result<&K> {
        Ok(SkipList::search(self, key)?.key())
    }

    fn insert(&mut self, key: K) -> Result<()> {
        Ok(self.try_insert(key)?)
    }

    fn delete(&mut self, key: &K) -> Result<K> {
        Ok(self.try_delete(key)?)
    }

    fn len(&self) -> usize {
        SkipList::len(self)
    }

    fn is_empty(&self) -> bool {
        SkipList::is_empty(self)
    }

    fn height(&self) -> usize {
        SkipList::height(self)
    }

    fn max_level(&self) -> usize {
        SkipList::max_level(self)
    }
}
impl From<StrataSkipListError> for SkipListError {
    fn from(val: StrataSkipListError) -> Self {
        SkipListError::new(val)
    }
}

impl<'a, K: Ord, G: LevelGenerator> IntoIterator for &'a SkipList<K, G> {
    type Item = &'a K;
    type IntoIter = SkipListIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per level, top level first:
/// `L1 <head> -> 3 -> 8`.
impl<K: Ord + Display, G: LevelGenerator> Display for SkipList<K, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..self.max_level()).rev() {
            write!(f, "L{} <head>", level)?;
            for key in self.level_keys(level) {
                write!(f, " -> {}", key)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
impl<K: Ord + Display, G: LevelGenerator> SkipList<K, G> {
    /// Per-level listing, same as the `Display` output.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}
impl<K: Ord + Debug, G: LevelGenerator> Debug for SkipList<K, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("max_level", &self.max_level())
            .field("probability", &self.probability())
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
impl<K: Debug> Debug for crate::skip_list::NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("height", &self.height())
            .finish()
    }
}
