//! Move-next/reset cursor over a [`NodeCollection`].
//!
//! The cursor lives outside the collection and borrows it, so any number of
//! cursors can walk the same collection independently. Reading the current
//! node is only valid while the cursor is positioned on an element.

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::domain::collection::NodeCollection;
use crate::domain::error::{CollectionError, CollectionResult};
use crate::domain::node::NodeHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Before the first element
    Unstarted,
    Positioned(usize),
    /// An advance past the last element was attempted
    Exhausted,
}

impl fmt::Display for CursorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorState::Unstarted => f.write_str("unstarted"),
            CursorState::Positioned(i) => write!(f, "positioned at {}", i),
            CursorState::Exhausted => f.write_str("exhausted"),
        }
    }
}

pub struct NodeCursor<'a, N: NodeHandle> {
    collection: &'a NodeCollection<N>,
    state: CursorState,
}

impl<'a, N: NodeHandle> NodeCursor<'a, N> {
    pub fn new(collection: &'a NodeCollection<N>) -> Self {
        Self {
            collection,
            state: CursorState::Unstarted,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Index of the current element, if positioned.
    pub fn position(&self) -> Option<usize> {
        match self.state {
            CursorState::Positioned(i) => Some(i),
            _ => None,
        }
    }

    /// Advances to the next element. Returns `false` once the end is reached;
    /// the cursor then stays exhausted until [`reset`](Self::reset).
    pub fn move_next(&mut self) -> bool {
        let len = self.collection.len();
        self.state = match self.state {
            CursorState::Unstarted if len > 0 => CursorState::Positioned(0),
            CursorState::Positioned(i) if i + 1 < len => CursorState::Positioned(i + 1),
            _ => CursorState::Exhausted,
        };
        trace!(state = %self.state, "cursor advanced");
        matches!(self.state, CursorState::Positioned(_))
    }

    pub fn current(&self) -> CollectionResult<&'a N> {
        match self.state {
            CursorState::Positioned(i) => self.collection.get(i),
            state => Err(CollectionError::InvalidIteratorState(state)),
        }
    }

    /// Returns to the position before the first element.
    pub fn reset(&mut self) {
        self.state = CursorState::Unstarted;
    }
}

impl<'a, N: NodeHandle> Iterator for NodeCursor<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current().ok()
        } else {
            None
        }
    }
}

// Exhausted only leaves through `reset`.
impl<N: NodeHandle> FusedIterator for NodeCursor<'_, N> {}
