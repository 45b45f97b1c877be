use std::cmp::Ordering;

use log::{debug, trace};
use smallvec::smallvec;

use crate::arena::{Arena, Links, Node, NodeId};
use crate::error::StrataSkipListError;
use crate::iter::SkipListIter;
use crate::level::{self, GeometricalLevelGenerator, LevelGenerator};
use crate::Result;

/// ```text
/// 3 <head> ----------> [2] --------------------------------------------------> [9] ---------->
/// 2 <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
/// 1 <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
/// 0 <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
/// ```
///
/// An ordered set of unique keys. Level 0 links every key in ascending
/// order, each higher level links a random subset of the level below it.
///
/// Nodes live in an index-based arena and link to each other by id, forward
/// and backward on every level they occupy.
pub struct SkipList<K, G = GeometricalLevelGenerator> {
    ///the forward links of the head sentinel, one per level
    head: Vec<Option<NodeId>>,
    ///the number of levels holding at least one node
    height: usize,
    ///the node storage of the list
    arena: Arena<K>,
    ///decides the height of every new node
    generator: G,
}

/// Read-only view of a node returned by [`SkipList::search`].
pub struct NodeRef<'a, K> {
    node: &'a Node<K>,
}
impl<'a, K> NodeRef<'a, K> {
    pub fn key(&self) -> &'a K {
        self.node.key()
    }
    /// Number of levels the node is linked on.
    pub fn height(&self) -> usize {
        self.node.height()
    }
}
impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for NodeRef<'_, K> {}

impl<K: Ord> SkipList<K> {
    /// Empty list with an entropy seeded [`GeometricalLevelGenerator`].
    pub fn new(max_level: usize, p: f64) -> Result<Self> {
        Self::with_generator(GeometricalLevelGenerator::new(max_level, p)?)
    }
}

impl<K: Ord, G: LevelGenerator> SkipList<K, G> {
    /// Empty list whose ceiling and promotion chance come from `generator`.
    pub fn with_generator(generator: G) -> Result<Self> {
        Self::with_capacity(generator, 0)
    }

    pub(crate) fn with_capacity(generator: G, capacity: usize) -> Result<Self> {
        level::validate(generator.total(), generator.probability())?;
        Ok(SkipList {
            head: vec![None; generator.total()],
            height: 0,
            arena: Arena::with_capacity(capacity),
            generator,
        })
    }

    /// Builds a list from strictly ascending `keys`.
    ///
    /// Every key is linked on level 0, then each level independently
    /// promotes every node of the level below it with the generator's
    /// probability.
    pub fn from_sorted<I>(keys: I, generator: G) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let keys = keys.into_iter().collect::<Vec<_>>();
        if let Some(index) = keys.windows(2).position(|w| w[0] >= w[1]) {
            return Err(StrataSkipListError::UnsortedInput { index: index + 1 });
        }

        let mut list = Self::with_capacity(generator, keys.len())?;
        let mut heights = vec![1usize; keys.len()];
        let mut present = (0..keys.len()).collect::<Vec<_>>();
        for _ in 1..list.max_level() {
            present.retain(|_| list.generator.promote());
            if present.is_empty() {
                break;
            }
            for &i in &present {
                heights[i] += 1;
            }
        }

        let mut tails: Links<NodeId> = smallvec![NodeId::HEAD; list.max_level()];
        for (key, height) in keys.into_iter().zip(heights) {
            let id = list.arena.alloc(Node::new(key, height));
            for (level, tail) in tails.iter_mut().enumerate().take(height) {
                list.splice(*tail, id, level);
                *tail = id;
            }
            list.height = list.height.max(height);
        }
        debug!(
            "built skip list with {} keys over {} of {} levels",
            list.len(),
            list.height,
            list.max_level()
        );
        Ok(list)
    }

    /// Finds the node holding `key`.
    pub fn search(&self, key: &K) -> Result<NodeRef<'_, K>> {
        self.find(key)
            .map(|id| NodeRef {
                node: &self.arena[id],
            })
            .ok_or(StrataSkipListError::KeyNotFound)
    }
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).map(|id| self.key(id))
    }
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Adds `key`. Returns `false` and leaves the list untouched when an
    /// equal key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let preds = self.find_predecessors(&key);
        if let Some(next) = self.next(preds[0], 0) {
            if *self.key(next) == key {
                return false;
            }
        }

        let height = self.generator.random_height().clamp(1, self.max_level());
        let id = self.arena.alloc(Node::new(key, height));
        for (level, &prev) in preds.iter().enumerate().take(height) {
            self.splice(prev, id, level);
        }
        if height > self.height {
            trace!("skip list height {} -> {}", self.height, height);
            self.height = height;
        }
        true
    }
    pub fn try_insert(&mut self, key: K) -> Result<()> {
        if self.insert(key) {
            Ok(())
        } else {
            Err(StrataSkipListError::DuplicateKey)
        }
    }

    /// Removes `key` from every level it occupies. Returns `false` when it
    /// was not present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.try_delete(key).is_ok()
    }
    pub fn try_delete(&mut self, key: &K) -> Result<K> {
        self.find(key)
            .and_then(|id| self.unlink(id))
            .ok_or(StrataSkipListError::KeyNotFound)
    }

    pub fn first(&self) -> Option<&K> {
        self.head[0].map(|id| self.key(id))
    }
    pub fn last(&self) -> Option<&K> {
        self.find_last().map(|id| self.key(id))
    }
    /// Ascending iterator over all keys.
    pub fn iter(&self) -> SkipListIter<'_, K> {
        SkipListIter::new(&self.arena, self.head[0], self.find_last(), self.len())
    }
    /// Keys linked on `level`, ascending. Empty above the ceiling.
    pub fn level_keys(&self, level: usize) -> impl Iterator<Item = &K> + '_ {
        let start = self.head.get(level).copied().flatten();
        std::iter::successors(start, move |&id| self.arena[id].next(level))
            .map(move |id| self.key(id))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }
    pub fn is_empty(&self) -> bool {
        self.head[0].is_none()
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn max_level(&self) -> usize {
        self.head.len()
    }
    pub fn probability(&self) -> f64 {
        self.generator.probability()
    }
}

impl<K: Ord, G: LevelGenerator> SkipList<K, G> {
    #[inline]
    fn key(&self, id: NodeId) -> &K {
        self.arena[id].key()
    }
    #[inline]
    fn next(&self, at: NodeId, level: usize) -> Option<NodeId> {
        if at.is_head() {
            self.head[level]
        } else {
            self.arena[at].next(level)
        }
    }
    #[inline]
    fn set_next(&mut self, at: NodeId, level: usize, next: Option<NodeId>) {
        if at.is_head() {
            self.head[level] = next;
        } else {
            self.arena[at].set_next(level, next);
        }
    }

    ///descend from the highest populated level, dropping a level whenever
    ///the next key would overshoot
    fn find(&self, key: &K) -> Option<NodeId> {
        let mut cursor = NodeId::HEAD;
        for level in (0..self.height).rev() {
            while let Some(next) = self.next(cursor, level) {
                match self.key(next).cmp(key) {
                    Ordering::Less => cursor = next,
                    Ordering::Equal => return Some(next),
                    Ordering::Greater => break,
                }
            }
        }
        None
    }
    ///the rightmost node with a key less than `key` on every level,
    ///the head above the current height
    fn find_predecessors(&self, key: &K) -> Links<NodeId> {
        let mut preds: Links<NodeId> = smallvec![NodeId::HEAD; self.max_level()];
        let mut cursor = NodeId::HEAD;
        for level in (0..self.height).rev() {
            while let Some(next) = self.next(cursor, level) {
                if self.key(next) < key {
                    cursor = next;
                } else {
                    break;
                }
            }
            preds[level] = cursor;
        }
        preds
    }
    fn find_last(&self) -> Option<NodeId> {
        let mut cursor = NodeId::HEAD;
        for level in (0..self.height).rev() {
            while let Some(next) = self.next(cursor, level) {
                cursor = next;
            }
        }
        if cursor.is_head() {
            None
        } else {
            Some(cursor)
        }
    }

    ///link `id` right after `prev` on `level`
    fn splice(&mut self, prev: NodeId, id: NodeId, level: usize) {
        let next = self.next(prev, level);
        let node = &mut self.arena[id];
        node.set_next(level, next);
        node.set_prev(level, prev);
        if let Some(next) = next {
            self.arena[next].set_prev(level, id);
        }
        self.set_next(prev, level, Some(id));
    }
    ///remove `id` from every level it was created with and free its slot
    fn unlink(&mut self, id: NodeId) -> Option<K> {
        for level in 0..self.arena.get(id)?.height() {
            let node = &self.arena[id];
            let (prev, next) = (node.prev(level), node.next(level));
            self.set_next(prev, level, next);
            if let Some(next) = next {
                self.arena[next].set_prev(level, prev);
            }
        }
        let height = self.height;
        while self.height > 0 && self.head[self.height - 1].is_none() {
            self.height -= 1;
        }
        if height != self.height {
            trace!("skip list height {} -> {}", height, self.height);
        }
        self.arena.free(id).map(Node::into_key)
    }
}
#[cfg(test)]
impl<K: Ord + std::fmt::Debug, G: LevelGenerator> SkipList<K, G> {
    /// Walks every level and panics on the first broken link.
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.head.len(), self.generator.total());
        let mut below: Vec<NodeId> = Vec::new();
        for level in 0..self.max_level() {
            let mut ids = Vec::new();
            let mut prev = NodeId::HEAD;
            while let Some(id) = self.next(prev, level) {
                let node = &self.arena[id];
                assert!(node.height() > level, "{:?} linked above its height", node.key());
                assert_eq!(node.prev(level), prev, "backward link of {:?}", node.key());
                if !prev.is_head() {
                    assert!(self.key(prev) < node.key(), "level {} out of order", level);
                }
                ids.push(id);
                prev = id;
            }
            if level == 0 {
                assert_eq!(ids.len(), self.len());
            } else {
                let mut rest = below.iter();
                for id in &ids {
                    assert!(rest.any(|b| b == id), "level {} not a subset", level);
                }
            }
            assert_eq!(level < self.height, !ids.is_empty(), "height {}", self.height);
            below = ids;
        }
        for id in self.iter_ids() {
            let node = &self.arena[id];
            for level in 0..node.height() {
                let next = node.next(level);
                if let Some(next) = next {
                    assert_eq!(self.arena[next].prev(level), id);
                }
            }
        }
    }
    fn iter_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.head[0], move |&id| self.arena[id].next(0))
    }
}
