//! Fixed-capacity undo stack

use jamclock_ports::{StackError, StackResult};
use std::fmt;

/// Last-in-first-out container with a hard capacity
///
/// Pushing onto a full stack and popping an empty one are errors rather than
/// growth or panics.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    capacity: usize,
    /// Oldest first; the top is the last element
    items: Vec<T>,
}

impl<T: Copy> BoundedStack<T> {
    /// Create an empty stack
    pub fn new(capacity: usize) -> StackResult<Self> {
        if capacity < 1 {
            return Err(StackError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            items: Vec::with_capacity(capacity),
        })
    }

    /// Create a stack holding a single seed value
    pub(crate) fn seeded(capacity: usize, value: T) -> Self {
        let capacity = capacity.max(1);
        let mut items = Vec::with_capacity(capacity);
        items.push(value);
        Self { capacity, items }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Push a value on top of the stack
    pub fn push(&mut self, value: T) -> StackResult<()> {
        if self.is_full() {
            return Err(StackError::Overflow);
        }
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> StackResult<T> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Return the top value without removing it
    pub fn top(&self) -> StackResult<T> {
        self.items.last().copied().ok_or(StackError::Underflow)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop every entry below the top
    pub fn commit(&mut self) {
        let len = self.items.len();
        if len > 1 {
            self.items.drain(..len - 1);
        }
    }

    /// Entries from most recent to oldest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter().rev()).finish()
    }
}
