use std::ops::{Index, IndexMut};

use smallvec::{smallvec, SmallVec};

/// Towers up to this height keep their links inline.
pub(crate) const INLINE_LEVELS: usize = 8;

pub(crate) type Links<T> = SmallVec<[T; INLINE_LEVELS]>;

/// Index of a node slot in the [`Arena`].
///
/// Slot 0 is reserved and never handed out, so `NodeId::HEAD` can name the
/// sentinel that lives outside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);
impl NodeId {
    pub(crate) const HEAD: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn is_head(self) -> bool {
        self == Self::HEAD
    }
}

#[derive(Debug)]
pub(crate) struct Node<K> {
    ///the key of the node
    key: K,
    ///the next node on each level, `None` at the tail
    forward: Links<Option<NodeId>>,
    ///the previous node on each level, `NodeId::HEAD` when first
    backward: Links<NodeId>,
}
impl<K> Node<K> {
    pub(crate) fn new(key: K, height: usize) -> Self {
        debug_assert!(height >= 1);
        Node {
            key,
            forward: smallvec![None; height],
            backward: smallvec![NodeId::HEAD; height],
        }
    }
    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }
    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.forward.len()
    }
    #[inline]
    pub(crate) fn next(&self, level: usize) -> Option<NodeId> {
        self.forward[level]
    }
    #[inline]
    pub(crate) fn prev(&self, level: usize) -> NodeId {
        self.backward[level]
    }
    #[inline]
    pub(crate) fn set_next(&mut self, level: usize, next: Option<NodeId>) {
        self.forward[level] = next;
    }
    #[inline]
    pub(crate) fn set_prev(&mut self, level: usize, prev: NodeId) {
        self.backward[level] = prev;
    }
    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

/// Slab of nodes addressed by [`NodeId`]. Freed slots are recycled.
#[derive(Debug)]
pub(crate) struct Arena<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
    len: usize,
}
impl<K> Arena<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        // reserve slot 0 for the head sentinel
        slots.push(None);
        Arena {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }
    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        self.len += 1;
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Some(node);
            return id;
        }
        let id = NodeId(self.slots.len());
        self.slots.push(Some(node));
        id
    }
    pub(crate) fn free(&mut self, id: NodeId) -> Option<Node<K>> {
        if id.is_head() {
            return None;
        }
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        self.len -= 1;
        Some(node)
    }
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots.get(id.0)?.as_ref()
    }
    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K>> {
        self.slots.get_mut(id.0)?.as_mut()
    }
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node id {:?}", id),
        }
    }
}
impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node id {:?}", id),
        }
    }
}

#[test]
fn test_head_slot_reserved() {
    let mut arena = Arena::with_capacity(4);
    let id = arena.alloc(Node::new(1u32, 1));
    assert!(!id.is_head());
    assert!(arena.get(NodeId::HEAD).is_none());
    assert!(arena.free(NodeId::HEAD).is_none());
    assert_eq!(arena.len(), 1);
}
#[test]
fn test_free_reuses_slot() {
    let mut arena = Arena::with_capacity(0);
    let a = arena.alloc(Node::new("a", 1));
    let b = arena.alloc(Node::new("b", 2));
    assert_ne!(a, b);
    assert_eq!(arena.free(a).map(Node::into_key), Some("a"));
    assert!(arena.free(a).is_none());
    assert_eq!(arena.len(), 1);

    let c = arena.alloc(Node::new("c", 3));
    assert_eq!(c, a);
    assert_eq!(*arena[c].key(), "c");
    assert_eq!(arena[c].height(), 3);
    assert_eq!(arena[b].height(), 2);
}
#[test]
fn test_links() {
    let mut arena = Arena::with_capacity(2);
    let a = arena.alloc(Node::new(1, 2));
    let b = arena.alloc(Node::new(2, 1));
    assert_eq!(arena[a].next(1), None);
    assert_eq!(arena[a].prev(1), NodeId::HEAD);
    arena[a].set_next(0, Some(b));
    arena[b].set_prev(0, a);
    assert_eq!(arena[a].next(0), Some(b));
    assert_eq!(arena[b].prev(0), a);
}
#[test]
#[should_panic]
fn test_index_dangling() {
    let mut arena = Arena::with_capacity(1);
    let a = arena.alloc(Node::new(1, 1));
    arena.free(a);
    let _ = arena[a].key();
}
