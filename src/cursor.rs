//! Cursors that walk a deque without borrowing it.
//!
//! A [`Cursor`] remembers where it is and the deque's modification count at the time it was
//! created, but holds no reference to the deque. Each step takes the deque as an argument, so the
//! deque stays freely mutable in between. Any mutation in between (including a
//! [`revert`]) is noticed on the next step:
//!
//! - [`has_next`] and [`next`] both fail with [`DequeError::ConcurrentModification`] once the
//!   deque has changed since the cursor was created. The cursor is dead from then on.
//! - [`next`] fails with [`DequeError::Exhausted`] when called after the last element.
//!
//! Which physical direction a cursor walks in is decided at creation: [`cursor`] goes from the
//! logical front to the logical back, [`descending_cursor`] the other way round.
//!
//! A cursor must only be stepped with the deque that created it.
//!
//! [`revert`]: ReversibleDeque::revert
//! [`has_next`]: Cursor::has_next
//! [`next`]: Cursor::next
//! [`cursor`]: ReversibleDeque::cursor
//! [`descending_cursor`]: ReversibleDeque::descending_cursor

use crate::{DequeError, End, NodeId, ReversibleDeque};

#[derive(Debug, Clone)]
pub struct Cursor {
    node: Option<NodeId>,
    toward: End,
    expected_modifications: u64,
    iterated: usize,
}

impl Cursor {
    pub(crate) fn new(start: Option<NodeId>, toward: End, expected_modifications: u64) -> Self {
        Self {
            node: start,
            toward,
            expected_modifications,
            iterated: 0,
        }
    }

    /// Number of elements yielded so far.
    pub fn index(&self) -> usize {
        self.iterated
    }

    pub fn has_next<T>(&self, list: &ReversibleDeque<T>) -> Result<bool, DequeError> {
        self.check_for_concurrent_modification(list)?;
        Ok(self.iterated < list.len())
    }

    /// Yields the element under the cursor and moves one step further.
    pub fn next<'a, T>(&mut self, list: &'a ReversibleDeque<T>) -> Result<&'a T, DequeError> {
        if !self.has_next(list)? {
            return Err(DequeError::Exhausted);
        }

        let node = self
            .node
            .and_then(|id| list.try_node(id))
            .ok_or(DequeError::ConcurrentModification {
                expected: self.expected_modifications,
                actual: list.modification_count(),
            })?;

        self.iterated += 1;
        self.node = node.link(self.toward);
        Ok(&node.data)
    }

    fn check_for_concurrent_modification<T>(
        &self,
        list: &ReversibleDeque<T>,
    ) -> Result<(), DequeError> {
        let actual = list.modification_count();
        if actual != self.expected_modifications {
            return Err(DequeError::ConcurrentModification {
                expected: self.expected_modifications,
                actual,
            });
        }
        Ok(())
    }
}
