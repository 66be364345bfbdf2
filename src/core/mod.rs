// In-memory linear containers and the error type they share.
pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;
