//! Singly linked list with an O(1) tail reference.
//!
//! Nodes live in a slot vector and link to each other by slot index. `head`
//! names the first node, each node names its successor through `next`, and
//! `tail` is a plain index lookup of the last node, kept only so `append` does
//! not have to walk the chain. Vacated slots go on a free list and are reused
//! by later insertions.
//!
//! Invariants:
//!   - `len == 0` iff `head` is `None` iff `tail` is `None`
//!   - walking `len - 1` links from `head` reaches `tail`, whose `next` is `None`
//!   - exactly `len` slots are occupied, all reachable from `head`; every other
//!     slot is vacant and listed once in `free`
//!
//! Every operation that can change which node is last re-establishes `tail`
//! before returning. Removals go through `unlink_front` or `unlink_after`.
//!
//! There is no internal locking. Mutation needs `&mut self`, so sharing a list
//! across threads requires external synchronization that owns it.

use std::fmt;
use std::iter::FusedIterator;

use crate::core::error::{Error, ErrorKind};

struct Node<T> {
    value: T,
    next: Option<usize>,
}

pub struct SinglyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|head| self.node(head)).map(|node| &node.value)
    }

    /// Last value, read through the tail reference in O(1).
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|tail| self.node(tail)).map(|node| &node.value)
    }

    /// Adds `value` after the current tail. O(1) amortized.
    pub fn append(&mut self, value: T) {
        let slot = self.occupy(Node { value, next: None });
        match self.tail {
            Some(tail) => {
                let last = self.node_mut(tail);
                debug_assert!(last.is_some(), "tail names a vacant slot");
                if let Some(last) = last {
                    last.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Adds `value` before the current head. O(1) amortized.
    pub fn prepend(&mut self, value: T) {
        let slot = self.occupy(Node {
            value,
            next: self.head,
        });
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
        self.len += 1;
    }

    /// Inserts `value` so it ends up at position `index`.
    ///
    /// Valid indices are `0..=len`. `0` prepends and `len` appends; anything
    /// in between walks to the predecessor, O(n). An invalid index leaves the
    /// list untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len + 1));
        }
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }

        let prev = self.slot_at(index - 1)?;
        let next = self.node(prev).ok_or_else(chain_out_of_sync)?.next;
        let slot = self.occupy(Node { value, next });
        self.node_mut(prev).ok_or_else(chain_out_of_sync)?.next = Some(slot);
        self.len += 1;
        Ok(())
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.iter().position(|item| item == value) else {
            return false;
        };
        let removed = if index == 0 {
            self.unlink_front().ok_or_else(chain_out_of_sync)
        } else {
            self.unlink_after(index - 1)
        };
        debug_assert!(
            removed.is_ok(),
            "value found at position {index} but could not be unlinked"
        );
        removed.is_ok()
    }

    /// Removes and returns the element at `index`, valid in `0..len`.
    ///
    /// O(1) for the head, O(n) otherwise. An invalid index leaves the list
    /// untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        if index == 0 {
            return self.unlink_front().ok_or_else(chain_out_of_sync);
        }
        self.unlink_after(index - 1)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            next: self.head,
            remaining: self.len,
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    fn occupy(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn vacate(&mut self, slot: usize) -> Option<Node<T>> {
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        Some(node)
    }

    // Slot index of the node at list position `index`.
    fn slot_at(&self, index: usize) -> Result<usize, Error> {
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|slot| self.node(slot)).and_then(|node| node.next);
        }
        current.ok_or_else(chain_out_of_sync)
    }

    fn unlink_front(&mut self) -> Option<T> {
        let head = self.head?;
        let Node { value, next } = self.vacate(head)?;
        self.head = next;
        self.len -= 1;
        if self.head.is_none() {
            self.tail = None;
            // Every slot is vacant now; start over instead of keeping the free list.
            self.slots.clear();
            self.free.clear();
        }
        Some(value)
    }

    // Detaches the successor of the node at position `prev_index`. When the
    // detached node was last, its predecessor becomes the new tail.
    fn unlink_after(&mut self, prev_index: usize) -> Result<T, Error> {
        let prev = self.slot_at(prev_index)?;
        let removed = self
            .node(prev)
            .and_then(|node| node.next)
            .ok_or_else(chain_out_of_sync)?;
        let Node { value, next } = self.vacate(removed).ok_or_else(chain_out_of_sync)?;
        self.node_mut(prev).ok_or_else(chain_out_of_sync)?.next = next;
        if next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(value)
    }
}

fn chain_out_of_sync() -> Error {
    Error::new(ErrorKind::Internal).with_message("list length out of sync with node chain")
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SinglyLinkedList")
            .field(&DebugValues(self))
            .finish()
    }
}

struct DebugValues<'a, T>(&'a SinglyLinkedList<T>);

impl<T: fmt::Debug> fmt::Debug for DebugValues<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Borrowing iterator from head to tail.
///
/// Holding it borrows the list, so the chain cannot change underneath it.
pub struct Iter<'a, T> {
    slots: &'a [Option<Node<T>>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.slots.get(self.next?)?.as_ref()?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator; yields values front to back by unlinking the head.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.unlink_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
