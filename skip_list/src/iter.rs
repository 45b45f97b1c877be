use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};

/// Ascending iterator over the keys of a [`SkipList`](crate::skip_list::SkipList).
///
/// Walks level 0 forward from the front and backward links from the back.
pub struct SkipListIter<'a, K> {
    arena: &'a Arena<K>,
    node: Option<NodeId>,
    node_back: Option<NodeId>,
    remaining: usize,
}
impl<'a, K> SkipListIter<'a, K> {
    pub(crate) fn new(
        arena: &'a Arena<K>,
        first: Option<NodeId>,
        last: Option<NodeId>,
        len: usize,
    ) -> Self {
        SkipListIter {
            arena,
            node: first,
            node_back: last,
            remaining: len,
        }
    }
}
impl<'a, K> Iterator for SkipListIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.node?];
        self.node = node.next(0);
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<K> DoubleEndedIterator for SkipListIter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.node_back?];
        let prev = node.prev(0);
        self.node_back = (!prev.is_head()).then_some(prev);
        self.remaining -= 1;
        Some(node.key())
    }
}
impl<K> ExactSizeIterator for SkipListIter<'_, K> {}
impl<K> FusedIterator for SkipListIter<'_, K> {}
