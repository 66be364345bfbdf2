//! Purpose: Fundamental linear containers used by the `linear-collections` CLI, benches, and tests.
//! Exports: `core` (stack, queue, singly linked list, errors) plus root re-exports of the containers.
//! Role: In-memory, single-threaded, synchronous library; the binary adds the demo and bench harness.
//! Invariants: Destructive access on an empty container errors; non-destructive peeks return `None`.
//! Invariants: A failed operation leaves its container exactly as it was.
pub mod core;

pub use crate::core::error::{Error, ErrorKind, to_exit_code};
pub use crate::core::linked_list::SinglyLinkedList;
pub use crate::core::queue::Queue;
pub use crate::core::stack::Stack;
