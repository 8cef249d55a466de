//! Entry points a general list or deque would offer, which this one refuses.
//!
//! Every method here returns [`DequeError::Unsupported`] immediately and leaves the deque
//! untouched. Elements handed in are dropped. They exist so that callers porting code written
//! against a fuller list API get a clear error instead of a missing method or a partial
//! approximation.

use crate::{Cursor, DequeError, Operation, ReversibleDeque};

fn refuse<R>(op: Operation) -> Result<R, DequeError> {
    Err(DequeError::Unsupported(op))
}

impl<T> ReversibleDeque<T> {
    pub fn insert(&mut self, _index: usize, _item: T) -> Result<(), DequeError> {
        refuse(Operation::Insert)
    }

    pub fn remove(&mut self, _index: usize) -> Result<T, DequeError> {
        refuse(Operation::Remove)
    }

    pub fn set(&mut self, _index: usize, _item: T) -> Result<T, DequeError> {
        refuse(Operation::Set)
    }

    pub fn add(&mut self, _item: T) -> Result<bool, DequeError> {
        refuse(Operation::Add)
    }

    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, _items: I) -> Result<bool, DequeError> {
        refuse(Operation::AddAll)
    }

    pub fn insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        _index: usize,
        _items: I,
    ) -> Result<bool, DequeError> {
        refuse(Operation::InsertAll)
    }

    pub fn offer_front(&mut self, _item: T) -> Result<bool, DequeError> {
        refuse(Operation::OfferFront)
    }

    pub fn offer_back(&mut self, _item: T) -> Result<bool, DequeError> {
        refuse(Operation::OfferBack)
    }

    pub fn offer(&mut self, _item: T) -> Result<bool, DequeError> {
        refuse(Operation::Offer)
    }

    pub fn poll_front(&mut self) -> Result<Option<T>, DequeError> {
        refuse(Operation::PollFront)
    }

    pub fn poll_back(&mut self) -> Result<Option<T>, DequeError> {
        refuse(Operation::PollBack)
    }

    pub fn poll(&mut self) -> Result<Option<T>, DequeError> {
        refuse(Operation::Poll)
    }

    pub fn peek_front(&self) -> Result<Option<&T>, DequeError> {
        refuse(Operation::PeekFront)
    }

    pub fn peek_back(&self) -> Result<Option<&T>, DequeError> {
        refuse(Operation::PeekBack)
    }

    pub fn peek(&self) -> Result<Option<&T>, DequeError> {
        refuse(Operation::Peek)
    }

    pub fn element(&self) -> Result<&T, DequeError> {
        refuse(Operation::Element)
    }

    pub fn push(&mut self, _item: T) -> Result<(), DequeError> {
        refuse(Operation::Push)
    }

    pub fn pop(&mut self) -> Result<T, DequeError> {
        refuse(Operation::Pop)
    }

    /// Queue-style removal of the head, as opposed to [`Self::remove`] by index.
    pub fn remove_head(&mut self) -> Result<T, DequeError> {
        refuse(Operation::RemoveHead)
    }

    pub fn contains(&self, _item: &T) -> Result<bool, DequeError> {
        refuse(Operation::Contains)
    }

    pub fn index_of(&self, _item: &T) -> Result<Option<usize>, DequeError> {
        refuse(Operation::IndexOf)
    }

    pub fn last_index_of(&self, _item: &T) -> Result<Option<usize>, DequeError> {
        refuse(Operation::LastIndexOf)
    }

    pub fn remove_item(&mut self, _item: &T) -> Result<bool, DequeError> {
        refuse(Operation::RemoveItem)
    }

    pub fn remove_first_occurrence(&mut self, _item: &T) -> Result<bool, DequeError> {
        refuse(Operation::RemoveFirstOccurrence)
    }

    pub fn remove_last_occurrence(&mut self, _item: &T) -> Result<bool, DequeError> {
        refuse(Operation::RemoveLastOccurrence)
    }

    pub fn contains_all(&self, _items: &[T]) -> Result<bool, DequeError> {
        refuse(Operation::ContainsAll)
    }

    pub fn remove_all(&mut self, _items: &[T]) -> Result<bool, DequeError> {
        refuse(Operation::RemoveAll)
    }

    pub fn retain_all(&mut self, _items: &[T]) -> Result<bool, DequeError> {
        refuse(Operation::RetainAll)
    }

    pub fn to_vec(&self) -> Result<Vec<T>, DequeError> {
        refuse(Operation::ToVec)
    }

    pub fn sub_list(&self, _from: usize, _to: usize) -> Result<ReversibleDeque<T>, DequeError> {
        refuse(Operation::SubList)
    }

    /// Positioned, bidirectional cursors with in-place editing. Use [`Self::cursor`] for plain
    /// traversal.
    pub fn list_cursor(&self, _index: usize) -> Result<Cursor, DequeError> {
        refuse(Operation::ListCursor)
    }
}
