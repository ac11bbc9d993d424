//! Ordered collection of RTF node handles.
//!
//! Insertion order is the only order. Indices are zero-based and contiguous;
//! inserting or removing shifts every later element. Handles are shared, never
//! deep-copied, so the same node may appear in several collections (or several
//! times in one).

use std::collections::TryReserveError;
use std::iter::FusedIterator;
use std::slice;
use std::vec;

use tracing::{debug, instrument};

use crate::domain::cursor::NodeCursor;
use crate::domain::error::{CollectionError, CollectionResult};
use crate::domain::node::{NodeHandle, RtfNodeRef};

#[derive(Debug, Clone)]
pub struct NodeCollection<N: NodeHandle = RtfNodeRef> {
    items: Vec<N>,
}

impl<N: NodeHandle> Default for NodeCollection<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeHandle> NodeCollection<N> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Reserves room for `additional` more nodes, reporting allocation
    /// failure instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.items.try_reserve(additional)
    }

    /// Returns the node at `index`.
    pub fn get(&self, index: usize) -> CollectionResult<&N> {
        self.items.get(index).ok_or(CollectionError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Replaces the node at `index`. Length is unchanged.
    #[instrument(level = "trace", skip(self, node))]
    pub fn set(&mut self, index: usize, node: N) -> CollectionResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })?;
        *slot = node;
        Ok(())
    }

    /// Appends `node` and returns the index it now occupies.
    #[instrument(level = "trace", skip(self, node))]
    pub fn add(&mut self, node: N) -> usize {
        self.items.push(node);
        self.items.len() - 1
    }

    /// Inserts `node` at `index`, shifting later elements back by one.
    /// `index == len` appends.
    #[instrument(level = "trace", skip(self, node))]
    pub fn insert(&mut self, index: usize, node: N) -> CollectionResult<()> {
        let len = self.items.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        self.items.insert(index, node);
        Ok(())
    }

    /// Appends every element of `other` in order. `other` is left untouched.
    #[instrument(level = "debug", skip_all, fields(added = other.len()))]
    pub fn add_range(&mut self, other: &NodeCollection<N>) {
        self.items.extend_from_slice(&other.items);
        debug!("collection length now {}", self.items.len());
    }

    /// Removes `count` contiguous elements starting at `index`.
    ///
    /// The whole span `index..index + count` must lie inside the collection,
    /// otherwise nothing is removed.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_range(&mut self, index: usize, count: usize) -> CollectionResult<()> {
        let len = self.items.len();
        let end = index
            .checked_add(count)
            .filter(|&end| end <= len)
            .ok_or(CollectionError::RangeOutOfRange { index, count, len })?;
        self.items.drain(index..end);
        Ok(())
    }

    /// Removes and returns the node at `index`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_at(&mut self, index: usize) -> CollectionResult<N> {
        let len = self.items.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Index of the first occurrence of `node` (by identity).
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.index_of_from(node, 0)
    }

    /// Like [`index_of`](Self::index_of), considering only indices `>= start`.
    /// A `start` past the end finds nothing.
    #[instrument(level = "trace", skip(self, node))]
    pub fn index_of_from(&self, node: &N, start: usize) -> Option<usize> {
        self.position_from(start, |candidate| candidate.same_node(node))
    }

    /// Index of the first node whose key equals `key`.
    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.index_of_key_from(key, 0)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn index_of_key_from(&self, key: &str, start: usize) -> Option<usize> {
        self.position_from(start, |candidate| candidate.key_matches(key))
    }

    fn position_from(&self, start: usize, pred: impl FnMut(&N) -> bool) -> Option<usize> {
        self.items
            .get(start..)?
            .iter()
            .position(pred)
            .map(|offset| start + offset)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index_of(node).is_some()
    }

    /// All nodes whose key equals `key`, in order. Handles are shared with
    /// this collection.
    #[instrument(level = "debug", skip(self))]
    pub fn select_by_key(&self, key: &str) -> NodeCollection<N> {
        let selected: NodeCollection<N> = self
            .items
            .iter()
            .filter(|node| node.key_matches(key))
            .cloned()
            .collect();
        debug!("selected {} of {} nodes", selected.len(), self.items.len());
        selected
    }

    pub fn first(&self) -> Option<&N> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&N> {
        self.items.last()
    }

    pub fn as_slice(&self) -> &[N] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<N> {
        self.items.clone()
    }

    /// Stateless forward traversal. Any number may be active at once.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Explicit cursor with move-next/reset semantics.
    pub fn cursor(&self) -> NodeCursor<'_, N> {
        NodeCursor::new(self)
    }
}

impl<N: NodeHandle> From<Vec<N>> for NodeCollection<N> {
    fn from(items: Vec<N>) -> Self {
        Self { items }
    }
}

impl<N: NodeHandle> FromIterator<N> for NodeCollection<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<N: NodeHandle> Extend<N> for NodeCollection<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

pub struct Iter<'a, N> {
    inner: slice::Iter<'a, N>,
}

impl<'a, N> Iterator for Iter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N> DoubleEndedIterator for Iter<'_, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<N> ExactSizeIterator for Iter<'_, N> {}

impl<N> FusedIterator for Iter<'_, N> {}

impl<'a, N: NodeHandle> IntoIterator for &'a NodeCollection<N> {
    type Item = &'a N;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: NodeHandle> IntoIterator for NodeCollection<N> {
    type Item = N;
    type IntoIter = vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
