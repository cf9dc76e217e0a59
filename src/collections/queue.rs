//! FIFO queue that drives breadth-first frontier expansion.
//!
//! A thin owner over a ring buffer. Records are moved in on `push` and moved
//! back out on `pop`; the queue never hands out aliases to storage it does not
//! own, and it performs no deduplication.

use crate::GraphError;
use std::collections::VecDeque;

/// A first-in, first-out queue of pending records.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `push` | \(O(1)\) amortized | Appends at the back |
/// | `pop` | \(O(1)\) | Removes from the front |
/// | `is_empty` | \(O(1)\) | |
#[derive(Debug, Clone)]
pub struct TraversalQueue<T> {
    items: VecDeque<T>,
}

impl<T> TraversalQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue able to hold `capacity` records without growing.
    ///
    /// # Errors
    /// Returns [`GraphError::Allocation`] if the buffer cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, GraphError> {
        let mut items = VecDeque::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items })
    }

    /// Appends a record at the back.
    #[inline]
    pub fn push(&mut self, record: T) {
        self.items.push_back(record);
    }

    /// Removes and returns the front record, or `None` if the queue is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns `true` if no records are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pending records.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drops every pending record and releases the buffer.
    ///
    /// Safe to call on an empty queue, and the queue stays usable afterwards.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            tracing::trace!(pending = self.items.len(), "discarding queued records");
        }
        self.items.clear();
        self.items.shrink_to_fit();
    }
}

impl<T> Default for TraversalQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
