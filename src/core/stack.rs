// LIFO stack backed by a `Vec`; the top is the last element.
use std::fmt;

use crate::core::error::{Error, ErrorKind};

#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Amortized O(1).
    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    /// Removes and returns the top element, or `EmptyContainer` if there is none.
    pub fn pop(&mut self) -> Result<T, Error> {
        self.data.pop().ok_or_else(|| {
            Error::new(ErrorKind::EmptyContainer).with_message("cannot pop from an empty stack")
        })
    }

    /// Top element without removing it. Empty is not an error here.
    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates from top to bottom, i.e. in pop order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.data.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.data).finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;
    use crate::core::error::ErrorKind;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop().expect("pop"), 3);
        assert_eq!(stack.pop().expect("pop"), 2);
        assert_eq!(stack.pop().expect("pop"), 1);

        let err = stack.pop().expect_err("empty");
        assert_eq!(err.kind(), ErrorKind::EmptyContainer);
    }

    #[test]
    fn peek_on_empty_is_absent_not_error() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.peek(), None);

        stack.push(7);
        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.len(), 1, "peek must not consume");
    }

    #[test]
    fn failed_pop_leaves_stack_untouched() {
        let mut stack: Stack<&str> = Stack::new();
        assert!(stack.pop().is_err());
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);

        stack.push("a");
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn iter_walks_top_to_bottom() {
        let stack: Stack<_> = (1..=4).collect();
        let seen: Vec<_> = stack.iter().copied().collect();
        assert_eq!(seen, vec![4, 3, 2, 1]);
        assert_eq!(format!("{stack:?}"), "Stack([1, 2, 3, 4])");
    }

    #[test]
    fn lifo_holds_across_interleaving() {
        let mut stack = Stack::with_capacity(4);
        stack.extend([1, 2]);
        assert_eq!(stack.pop().expect("pop"), 2);
        stack.push(3);
        stack.push(4);
        let drained: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();
        assert_eq!(drained, vec![4, 3, 1]);
        stack.push(9);
        stack.clear();
        assert!(stack.is_empty());
    }
}
