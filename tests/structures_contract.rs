//! Purpose: Contract coverage for the public container API.
//! Exports: Integration tests only.
//! Role: Pin the error-versus-absence split and the ordering guarantees through the crate root.
//! Invariants: Tests use only public API; internal link checks live in the module unit tests.
use linear_collections::{ErrorKind, Queue, SinglyLinkedList, Stack};

#[test]
fn stack_scenario_pops_reverse_then_errors() {
    let mut stack = Stack::new();
    for item in [1, 2, 3] {
        stack.push(item);
    }
    let popped: Vec<i32> = (0..3).map(|_| stack.pop().expect("pop")).collect();
    assert_eq!(popped, vec![3, 2, 1]);

    let err = stack.pop().expect_err("empty stack");
    assert_eq!(err.kind(), ErrorKind::EmptyContainer);
    assert_eq!(stack.peek(), None);
}

#[test]
fn queue_scenario_dequeues_in_order_then_errors() {
    let mut queue = Queue::new();
    for item in ['A', 'B', 'C'] {
        queue.enqueue(item);
    }
    let dequeued: Vec<char> = (0..3).map(|_| queue.dequeue().expect("dequeue")).collect();
    assert_eq!(dequeued, vec!['A', 'B', 'C']);

    let err = queue.dequeue().expect_err("empty queue");
    assert_eq!(err.kind(), ErrorKind::EmptyContainer);
    assert_eq!(queue.peek(), None);
}

#[test]
fn lifo_and_fifo_hold_for_longer_runs() {
    let input: Vec<u64> = (0..1_000).map(|i| i * 7 % 13).collect();

    let mut stack: Stack<u64> = Stack::new();
    let mut queue: Queue<u64> = Queue::new();
    for &value in &input {
        stack.push(value);
        queue.enqueue(value);
    }

    let from_stack: Vec<u64> = std::iter::from_fn(|| stack.pop().ok()).collect();
    let from_queue: Vec<u64> = std::iter::from_fn(|| queue.dequeue().ok()).collect();

    let mut reversed = input.clone();
    reversed.reverse();
    assert_eq!(from_stack, reversed);
    assert_eq!(from_queue, input);
}

#[test]
fn list_scenario_matches_documented_sequence() {
    let mut list = SinglyLinkedList::new();
    list.append(1.0);
    list.append(2.0);
    list.append(3.0);
    list.prepend(0.0);
    list.insert(3, 2.5).expect("insert");

    let values: Vec<f64> = list.iter().copied().collect();
    assert_eq!(values, vec![0.0, 1.0, 2.0, 2.5, 3.0]);
    assert_eq!(list.len(), 5);

    assert!(list.remove(&2.0));
    let values: Vec<f64> = list.iter().copied().collect();
    assert_eq!(values, vec![0.0, 1.0, 2.5, 3.0]);
    assert_eq!(list.back(), Some(&3.0));
}

#[test]
fn list_out_of_range_is_reported_and_harmless() {
    let mut list: SinglyLinkedList<i32> = (1..=3).collect();

    let err = list.insert(5, 0).expect_err("insert");
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(err.index(), Some(5));
    assert!(err.to_string().contains("[0, 3]"));

    let err = list.remove_at(3).expect_err("remove_at");
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert!(err.to_string().contains("[0, 2]"));

    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn list_tail_survives_removal_of_last_element() {
    let mut list: SinglyLinkedList<&str> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(list.remove_at(2).expect("remove last"), "c");
    assert_eq!(list.back(), Some(&"b"));

    list.append("d");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "d"]);
    assert_eq!(list.iter().last(), list.back());
}

#[test]
fn draining_from_front_returns_original_order() {
    let original: Vec<i32> = (0..50).collect();
    let mut list: SinglyLinkedList<i32> = original.iter().copied().collect();

    let mut drained = Vec::new();
    while let Ok(value) = list.remove_at(0) {
        drained.push(value);
    }
    assert_eq!(drained, original);
    assert!(list.is_empty());
    assert_eq!(list.back(), None);
    assert_eq!(list.front(), None);
}

#[test]
fn append_follows_middle_removal_and_prepend() {
    let mut list: SinglyLinkedList<i32> = [1, 2, 3].into_iter().collect();
    assert!(list.remove(&2));
    list.append(4);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
    assert_eq!(list.back(), Some(&4));

    let mut list = SinglyLinkedList::new();
    list.append(1);
    list.prepend(0);
    list.append(2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(list.back(), Some(&2));
}

#[test]
fn list_is_send_and_sync_for_plain_values() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SinglyLinkedList<u64>>();
}
