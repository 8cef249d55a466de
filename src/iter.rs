//! Borrowing iteration in logical order. You'll rarely want to name these directly.
//!
//! Since [`Iter`] borrows the deque, the borrow checker already rules out mutation while it is
//! alive. For iteration that survives (and detects) mutation, see [`crate::cursor`].
//!
//! An ASCII diagram showing the initial situation for a deque that is **not** reverted:
//!
//! ```text
//!   front                      back
//!     |                         |
//!     v                         v
//!   head <-> node <-> node <-> tail
//! ```
//!
//! When reverted, `front` starts at `tail` and walks via `prev`, `back` starts at `head` and walks
//! via `next`. One step of iteration (where "current" depends on `next` or `next_back` being
//! called):
//!
//! 1. If nothing remains, `None`
//! 2. Return the data of the current node
//! 3. Move the current node one link further in the matching direction

use crate::{End, NodeId, ReversibleDeque};

pub struct Iter<'list, T: 'list> {
    list: &'list ReversibleDeque<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    /// Physical direction of logical "next".
    forward: End,
    remaining: usize,
}

enum Direction {
    Forward,
    Backward,
}

impl<'list, T: 'list> Iter<'list, T> {
    pub(crate) fn new(
        list: &'list ReversibleDeque<T>,
        front: Option<NodeId>,
        back: Option<NodeId>,
        forward: End,
    ) -> Self {
        Self {
            list,
            front,
            back,
            forward,
            remaining: list.len(),
        }
    }

    fn next_in_dir(&mut self, direction: Direction) -> Option<&'list T> {
        if self.remaining == 0 {
            return None;
        }

        let list = self.list;
        let node = match direction {
            Direction::Forward => {
                let node = list.try_node(self.front?)?;
                self.front = node.link(self.forward);
                node
            }
            Direction::Backward => {
                let node = list.try_node(self.back?)?;
                self.back = node.link(self.forward.opposite());
                node
            }
        };

        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<'list, T: 'list> Iterator for Iter<'list, T> {
    type Item = &'list T;

    fn next(&mut self) -> Option<&'list T> {
        self.next_in_dir(Direction::Forward)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'list, T: 'list> DoubleEndedIterator for Iter<'list, T> {
    fn next_back(&mut self) -> Option<&'list T> {
        self.next_in_dir(Direction::Backward)
    }
}

impl<'list, T: 'list> ExactSizeIterator for Iter<'list, T> {}

impl<'list, T> IntoIterator for &'list ReversibleDeque<T> {
    type Item = &'list T;
    type IntoIter = Iter<'list, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
