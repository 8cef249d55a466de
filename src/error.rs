//! Everything that can go wrong when talking to a [`ReversibleDeque`].
//!
//! [`ReversibleDeque`]: crate::ReversibleDeque

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// Read or removal at either end while the deque holds nothing.
    EmptyCollection,
    /// Indexed access outside of `0..len`.
    InvalidIndex { index: usize, len: usize },
    /// A [`Cursor`](crate::cursor::Cursor) noticed that the deque was mutated (or reverted)
    /// after it was created.
    ConcurrentModification { expected: u64, actual: u64 },
    /// A [`Cursor`](crate::cursor::Cursor) was advanced past its last element.
    Exhausted,
    /// The entry point exists, but the deque deliberately does not do that.
    Unsupported(Operation),
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DequeError::EmptyCollection => write!(f, "accessing an empty deque"),
            DequeError::InvalidIndex { index, len } => {
                write!(f, "index = {index}, size = {len}")
            }
            DequeError::ConcurrentModification { .. } => {
                write!(f, "deque was modified during iteration")
            }
            DequeError::Exhausted => write!(f, "no more elements to iterate"),
            DequeError::Unsupported(op) => write!(f, "unsupported operation: {op}"),
        }
    }
}

impl std::error::Error for DequeError {}

/// Names of the operations a general list or deque would have, but this one refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Remove,
    Set,
    Add,
    AddAll,
    InsertAll,
    OfferFront,
    OfferBack,
    PollFront,
    PollBack,
    PeekFront,
    PeekBack,
    Push,
    Pop,
    RemoveHead,
    Element,
    Peek,
    Poll,
    Offer,
    Contains,
    IndexOf,
    LastIndexOf,
    RemoveItem,
    RemoveFirstOccurrence,
    RemoveLastOccurrence,
    ContainsAll,
    RemoveAll,
    RetainAll,
    ToVec,
    SubList,
    ListCursor,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Remove => "remove",
            Operation::Set => "set",
            Operation::Add => "add",
            Operation::AddAll => "add_all",
            Operation::InsertAll => "insert_all",
            Operation::OfferFront => "offer_front",
            Operation::OfferBack => "offer_back",
            Operation::PollFront => "poll_front",
            Operation::PollBack => "poll_back",
            Operation::PeekFront => "peek_front",
            Operation::PeekBack => "peek_back",
            Operation::Push => "push",
            Operation::Pop => "pop",
            Operation::RemoveHead => "remove_head",
            Operation::Element => "element",
            Operation::Peek => "peek",
            Operation::Poll => "poll",
            Operation::Offer => "offer",
            Operation::Contains => "contains",
            Operation::IndexOf => "index_of",
            Operation::LastIndexOf => "last_index_of",
            Operation::RemoveItem => "remove_item",
            Operation::RemoveFirstOccurrence => "remove_first_occurrence",
            Operation::RemoveLastOccurrence => "remove_last_occurrence",
            Operation::ContainsAll => "contains_all",
            Operation::RemoveAll => "remove_all",
            Operation::RetainAll => "retain_all",
            Operation::ToVec => "to_vec",
            Operation::SubList => "sub_list",
            Operation::ListCursor => "list_cursor",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
