// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Fixed-capacity stack.

use super::errors::{Error, Result};

/// Upper bound on the slots reserved up front; larger stacks grow on demand.
const PREALLOCATE_LIMIT: usize = 64;

/// A last-in-first-out container that never grows past its capacity.
///
/// Items are stored bottom to top in a `Vec`; index 0 is the bottom of the
/// stack. Both overflow and underflow are reported as ordinary errors and
/// leave the stack untouched.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
    last_popped: Option<T>,
}

impl<T> BoundedStack<T> {
    /// Creates a new empty stack that holds at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            capacity,
            last_popped: None,
        }
    }

    /// Pushes an item onto the stack.
    ///
    /// Returns [`Error::Overflow`] if the stack is already full.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Returns the item at `index`, counted from the bottom of the stack.
    pub fn peek_at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::Index {
            index,
            len: self.items.len(),
        })
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the most recently popped item, if any.
    pub fn last_popped(&self) -> Option<&T> {
        self.last_popped.as_ref()
    }

    /// Returns the number of items in the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the maximum number of items the stack can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if another push would overflow.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Iterates over the items from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Pops the top item off the stack and remembers it as the last popped.
    ///
    /// Returns [`Error::EmptyStack`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        let item = self.items.pop().ok_or(Error::EmptyStack)?;
        self.last_popped = Some(item.clone());
        Ok(item)
    }
}

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_operations() {
        let mut stack = BoundedStack::new(12);
        assert!(stack.is_empty());

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&3));

        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
        assert!(stack.is_empty());
    }

    #[test]
    fn len_tracks_pushes_and_top_is_last_pushed() {
        let mut stack = BoundedStack::new(5);
        for (n, value) in [7, -3, 42, 0].into_iter().enumerate() {
            stack.push(value).unwrap();
            assert_eq!(stack.len(), n + 1);
            assert_eq!(*stack.peek_at(stack.len() - 1).unwrap(), value);
        }
    }

    #[test]
    fn push_when_full_is_rejected_without_mutation() {
        let mut stack = BoundedStack::new(2);
        stack.push("a").unwrap();
        stack.push("b").unwrap();
        assert!(stack.is_full());

        let err = stack.push("c").unwrap_err();
        assert!(matches!(err, Error::Overflow { capacity: 2 }));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn pop_on_empty_leaves_last_popped_alone() {
        let mut stack = BoundedStack::new(3);
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
        assert_eq!(stack.last_popped(), None);

        stack.push(9).unwrap();
        stack.pop().unwrap();
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
        assert_eq!(stack.last_popped(), Some(&9));
    }

    #[test]
    fn peek_at_rejects_out_of_range_in_every_state() {
        let mut stack = BoundedStack::new(3);
        assert!(matches!(
            stack.peek_at(0),
            Err(Error::Index { index: 0, len: 0 })
        ));

        stack.push(10).unwrap();
        stack.push(20).unwrap();
        assert_eq!(*stack.peek_at(0).unwrap(), 10);
        assert!(matches!(
            stack.peek_at(2),
            Err(Error::Index { index: 2, len: 2 })
        ));
        assert!(stack.peek_at(usize::MAX).is_err());
    }

    #[test]
    fn peek_at_does_not_touch_last_popped() {
        let mut stack = BoundedStack::new(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.pop().unwrap();
        stack.peek_at(0).unwrap();
        assert_eq!(stack.last_popped(), Some(&2));
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut stack = BoundedStack::<u8>::new(0);
        assert!(stack.is_full());
        assert!(stack.push(1).is_err());
        assert!(stack.pop().is_err());
    }

    #[test]
    fn huge_capacity_does_not_reserve_memory() {
        let mut stack = BoundedStack::new(usize::MAX);
        assert_eq!(stack.capacity(), usize::MAX);
        assert!(!stack.is_full());
        stack.push(1u8).unwrap();
        assert_eq!(stack.pop().unwrap(), 1);
    }

    #[test]
    fn fills_to_twelve_then_overflows() {
        let mut stack = BoundedStack::new(12);
        for value in 0..12 {
            stack.push(value).unwrap();
        }
        assert!(matches!(stack.push(12), Err(Error::Overflow { capacity: 12 })));
        assert_eq!(stack.len(), 12);
        assert_eq!(stack.pop().unwrap(), 11);
        assert_eq!(stack.len(), 11);
    }
}
