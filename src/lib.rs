//! A double-ended queue over a doubly-linked chain that reverses in _O_(1).
//!
//! [`ReversibleDeque::revert`] never touches a node. It flips one flag, and every operation that
//! cares about "front" and "back" consults that flag to decide which physical end of the chain
//! plays which logical role:
//!
//! ```text
//!            not reverted                         reverted
//!
//!   front                  back          back                  front
//!     |                      |             |                      |
//!     v                      v             v                      v
//!   head <-> node <-> ... <-> tail       head <-> node <-> ... <-> tail
//! ```
//!
//! The deque is intentionally reduced: elements come and go only at the two ends. Everything a
//! general list would offer on top of that exists as an entry point which fails with
//! [`DequeError::Unsupported`], see [`unsupported`].


pub mod cursor;
pub mod error;
pub mod iter;
pub mod repl;
pub mod unsupported;

pub use cursor::Cursor;
pub use error::{DequeError, Operation};

use std::{fmt, mem};

/// Position of a node inside the arena. Stays valid until that node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// One of the two physical ends of the chain, or equivalently, a direction to walk in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    Head,
    Tail,
}

impl End {
    pub(crate) fn opposite(self) -> Self {
        match self {
            End::Head => End::Tail,
            End::Tail => End::Head,
        }
    }
}

pub(crate) struct Node<T> {
    pub(crate) data: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    /// The neighbour one step closer to `toward`.
    pub(crate) fn link(&self, toward: End) -> Option<NodeId> {
        match toward {
            End::Head => self.prev,
            End::Tail => self.next,
        }
    }
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

pub struct ReversibleDeque<T> {
    slots: Vec<Slot<T>>,
    /// Top of the free list threaded through vacant slots.
    free: Option<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    reverted: bool,
    /// Bumped by every mutation and by every [`Self::revert`]. Cursors compare against it.
    modifications: u64,
}

impl<T> ReversibleDeque<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
            reverted: false,
            modifications: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Swaps the logical meaning of front and back in _O_(1).
    ///
    /// No element moves, but all outstanding [`Cursor`]s are invalidated since their notion of
    /// "next" just changed.
    pub fn revert(&mut self) {
        self.reverted = !self.reverted;
        self.modifications += 1;
    }

    pub fn is_reverted(&self) -> bool {
        self.reverted
    }

    pub fn modification_count(&self) -> u64 {
        self.modifications
    }

    pub fn push_front(&mut self, item: T) {
        if self.reverted {
            self.attach(End::Tail, item);
        } else {
            self.attach(End::Head, item);
        }
    }

    pub fn push_back(&mut self, item: T) {
        if self.reverted {
            self.attach(End::Head, item);
        } else {
            self.attach(End::Tail, item);
        }
    }

    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        self.check_not_empty()?;
        if self.reverted {
            Ok(self.detach(End::Tail))
        } else {
            Ok(self.detach(End::Head))
        }
    }

    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        self.check_not_empty()?;
        if self.reverted {
            Ok(self.detach(End::Head))
        } else {
            Ok(self.detach(End::Tail))
        }
    }

    pub fn front(&self) -> Result<&T, DequeError> {
        self.check_not_empty()?;
        let id = if self.reverted { self.tail } else { self.head };
        self.data_at(id).ok_or(DequeError::EmptyCollection)
    }

    pub fn back(&self) -> Result<&T, DequeError> {
        self.check_not_empty()?;
        let id = if self.reverted { self.head } else { self.tail };
        self.data_at(id).ok_or(DequeError::EmptyCollection)
    }

    /// Returns the element at logical position `index`.
    ///
    /// Walks from whichever physical end is closer, so at most about `len / 2` links are
    /// followed. The midpoint comparison is done on the logical index in both orientations.
    ///
    /// # Errors
    ///
    /// [`DequeError::EmptyCollection`] if the deque is empty (checked first),
    /// [`DequeError::InvalidIndex`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, DequeError> {
        self.check_not_empty()?;
        self.check_access_index(index)?;

        let past_middle = index > self.len / 2;
        let id = match (self.reverted, past_middle) {
            (false, true) => self.walk(End::Tail, self.len - index - 1),
            (false, false) => self.walk(End::Head, index),
            (true, true) => self.walk(End::Head, self.len - index - 1),
            (true, false) => self.walk(End::Tail, index),
        };

        self.data_at(id).ok_or(DequeError::InvalidIndex {
            index,
            len: self.len,
        })
    }

    /// Drops every element and releases all nodes. The orientation is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.modifications += 1;
    }

    pub fn iter(&self) -> iter::Iter<'_, T> {
        let (start, toward) = self.logical_start();
        iter::Iter::new(self, start, self.end_node(toward), toward)
    }

    /// A detached cursor walking from the logical front to the logical back.
    pub fn cursor(&self) -> Cursor {
        let (start, toward) = self.logical_start();
        Cursor::new(start, toward, self.modifications)
    }

    /// A detached cursor walking from the logical back to the logical front.
    pub fn descending_cursor(&self) -> Cursor {
        // the logical back sits at the physical end that logical "next" walks towards
        let (_, forward) = self.logical_start();
        Cursor::new(self.end_node(forward), forward.opposite(), self.modifications)
    }

    /// The node at the logical front and the physical direction logical "next" walks in.
    fn logical_start(&self) -> (Option<NodeId>, End) {
        if self.reverted {
            (self.tail, End::Head)
        } else {
            (self.head, End::Tail)
        }
    }

    pub(crate) fn end_node(&self, end: End) -> Option<NodeId> {
        match end {
            End::Head => self.head,
            End::Tail => self.tail,
        }
    }

    /// Looks up a live node. `None` if `id` points at a vacant or foreign slot.
    pub(crate) fn try_node(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.0)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    fn data_at(&self, id: Option<NodeId>) -> Option<&T> {
        id.and_then(|id| self.try_node(id)).map(|node| &node.data)
    }

    /// # Panics
    ///
    /// Panics if `id` is not a live node of this deque, which would mean the chain is corrupt.
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("chain links to vacant slot {}", id.0),
        }
    }

    /// Follows `steps` links starting at the physical `from` end, walking inwards.
    fn walk(&self, from: End, steps: usize) -> Option<NodeId> {
        let toward = from.opposite();
        let mut current = self.end_node(from);
        for _ in 0..steps {
            current = current
                .and_then(|id| self.try_node(id))
                .and_then(|node| node.link(toward));
        }
        current
    }

    /// Links a new node in at the physical `end`.
    fn attach(&mut self, end: End, item: T) {
        let new = self.allocate(item);

        match self.end_node(end) {
            None => {
                self.head = Some(new);
                self.tail = Some(new);
            }
            Some(old) => match end {
                End::Head => {
                    self.node_mut(new).next = Some(old);
                    self.node_mut(old).prev = Some(new);
                    self.head = Some(new);
                }
                End::Tail => {
                    self.node_mut(new).prev = Some(old);
                    self.node_mut(old).next = Some(new);
                    self.tail = Some(new);
                }
            },
        }

        self.len += 1;
        self.modifications += 1;
    }

    /// Unlinks the node at the physical `end` and hands back its element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty, callers check first.
    fn detach(&mut self, end: End) -> T {
        let Some(id) = self.end_node(end) else {
            panic!("tried to detach from an empty chain");
        };
        let removed = self.release(id);

        match end {
            End::Head => {
                self.head = removed.next;
                match removed.next {
                    Some(next) => self.node_mut(next).prev = None,
                    None => self.tail = None,
                }
            }
            End::Tail => {
                self.tail = removed.prev;
                match removed.prev {
                    Some(prev) => self.node_mut(prev).next = None,
                    None => self.head = None,
                }
            }
        }

        self.len -= 1;
        self.modifications += 1;
        removed.data
    }

    fn allocate(&mut self, item: T) -> NodeId {
        let node = Slot::Occupied(Node {
            data: item,
            prev: None,
            next: None,
        });

        match self.free {
            Some(id) => {
                let old = mem::replace(&mut self.slots[id.0], node);
                let Slot::Vacant { next_free } = old else {
                    panic!("free list points at occupied slot {}", id.0);
                };
                self.free = next_free;
                id
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates the slot of `id` and pushes it onto the free list. The returned node still carries
    /// its old links, the slot itself keeps none.
    fn release(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant { .. } => panic!("released vacant slot {}", id.0),
        }
    }

    fn check_not_empty(&self) -> Result<(), DequeError> {
        if self.len == 0 {
            return Err(DequeError::EmptyCollection);
        }
        Ok(())
    }

    fn check_access_index(&self, index: usize) -> Result<(), DequeError> {
        if index >= self.len {
            return Err(DequeError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Walks the physical chain from `from` to the other end and returns what it saw, asserting
    /// that it is consistent with `len` and the link in the opposite direction.
    #[cfg(test)]
    pub(crate) fn check_links(&self, from: End) -> Vec<&T> {
        let toward = from.opposite();
        let mut seen = Vec::new();
        let mut previous = None;
        let mut current = self.end_node(from);

        while let Some(id) = current {
            let node = self.try_node(id).expect("chain links to vacant slot");
            assert_eq!(node.link(from), previous, "back link of slot {} is off", id.0);
            seen.push(&node.data);
            assert!(seen.len() <= self.len, "chain is longer than len");
            previous = Some(id);
            current = node.link(toward);
        }

        assert_eq!(seen.len(), self.len);
        assert_eq!(previous, self.end_node(toward));
        seen
    }
}

impl<T: fmt::Debug> fmt::Debug for ReversibleDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `[a, b, c]` in logical order, using each element's `Display`.
impl<T: fmt::Display> fmt::Display for ReversibleDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T> Default for ReversibleDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}
