//! Purpose: Walk through every container operation and print a readable trace.
//! Exports: `DemoSection`, `run_demo`, `is_balanced`.
//! Role: Illustrative output for the `demo` subcommand; not a stable format.
//! Invariants: Expected container errors are printed as part of the trace, never returned.
use std::io::{self, Write};

use clap::ValueEnum;

use linear_collections::{Error, ErrorKind, Queue, SinglyLinkedList, Stack};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum DemoSection {
    Stack,
    Queue,
    List,
    Practical,
    All,
}

pub fn run_demo(section: DemoSection, out: &mut dyn Write) -> Result<(), Error> {
    tracing::debug!(?section, "running demo");
    write_demo(section, out).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write demo output")
            .with_source(err)
    })
}

fn write_demo(section: DemoSection, out: &mut dyn Write) -> io::Result<()> {
    match section {
        DemoSection::Stack => demo_stack(out),
        DemoSection::Queue => demo_queue(out),
        DemoSection::List => demo_linked_list(out),
        DemoSection::Practical => demo_practical(out),
        DemoSection::All => {
            demo_stack(out)?;
            demo_queue(out)?;
            demo_linked_list(out)?;
            demo_practical(out)
        }
    }
}

fn banner(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(60))
}

fn demo_stack(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "STACK (LIFO)")?;
    let mut stack = Stack::new();
    writeln!(out, "created: {stack:?}, empty: {}", stack.is_empty())?;

    writeln!(out, "\npush 1, 2, 3")?;
    for item in [1, 2, 3] {
        stack.push(item);
    }
    writeln!(out, "stack: {stack:?}, len: {}", stack.len())?;
    writeln!(out, "peek: {:?}, stack after peek: {stack:?}", stack.peek())?;

    writeln!(out, "\npop until empty:")?;
    while let Ok(item) = stack.pop() {
        writeln!(out, "  popped {item}, {} left", stack.len())?;
    }
    writeln!(out, "empty: {}, peek: {:?}", stack.is_empty(), stack.peek())?;

    if let Err(err) = stack.pop() {
        writeln!(out, "pop on empty stack: {err}")?;
    }
    Ok(())
}

fn demo_queue(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "QUEUE (FIFO)")?;
    let mut queue = Queue::new();
    writeln!(out, "created: {queue:?}, empty: {}", queue.is_empty())?;

    writeln!(out, "\nenqueue 'A', 'B', 'C'")?;
    for item in ['A', 'B', 'C'] {
        queue.enqueue(item);
    }
    writeln!(out, "queue: {queue:?}, len: {}", queue.len())?;
    writeln!(out, "peek: {:?}, queue after peek: {queue:?}", queue.peek())?;

    writeln!(out, "\ndequeue until empty:")?;
    while let Ok(item) = queue.dequeue() {
        writeln!(out, "  dequeued {item:?}, {} left", queue.len())?;
    }
    writeln!(out, "empty: {}, peek: {:?}", queue.is_empty(), queue.peek())?;

    if let Err(err) = queue.dequeue() {
        writeln!(out, "dequeue on empty queue: {err}")?;
    }
    Ok(())
}

fn demo_linked_list(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "SINGLY LINKED LIST")?;
    let mut list = SinglyLinkedList::new();
    writeln!(out, "created: {list:?}")?;

    writeln!(out, "\nappend 1, 2, 3")?;
    for value in [1.0, 2.0, 3.0] {
        list.append(value);
    }
    writeln!(out, "list: {list:?}, len: {}", list.len())?;

    writeln!(out, "\nprepend 0")?;
    list.prepend(0.0);
    writeln!(out, "list: {list:?}")?;

    writeln!(out, "\ninsert 2.5 at index 3")?;
    match list.insert(3, 2.5) {
        Ok(()) => writeln!(out, "list: {list:?}")?,
        Err(err) => writeln!(out, "insert failed: {err}")?,
    }

    writeln!(out, "\niterate:")?;
    for value in &list {
        writeln!(out, "  {value}")?;
    }
    writeln!(out, "front: {:?}, back: {:?}", list.front(), list.back())?;

    writeln!(out, "\nremove value 2")?;
    if list.remove(&2.0) {
        writeln!(out, "list: {list:?}")?;
    } else {
        writeln!(out, "value 2 not found")?;
    }

    writeln!(out, "\nremove_at index 1")?;
    match list.remove_at(1) {
        Ok(value) => writeln!(out, "removed {value}, list: {list:?}")?,
        Err(err) => writeln!(out, "remove_at failed: {err}")?,
    }

    writeln!(out, "\ninsert at index 10")?;
    if let Err(err) = list.insert(10, 99.0) {
        writeln!(out, "insert failed: {err}")?;
    }
    writeln!(out, "list unchanged: {list:?}")
}

fn demo_practical(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "PRACTICAL EXAMPLES")?;

    writeln!(out, "1. bracket balance (Stack):")?;
    for expr in ["((()))", "({[]})", "({[)]}", "((())", ""] {
        let verdict = if is_balanced(expr) { "balanced" } else { "unbalanced" };
        writeln!(out, "  {expr:?}: {verdict}")?;
    }

    writeln!(out, "\n2. print jobs (Queue):")?;
    let mut jobs = Queue::new();
    for job in ["document1.pdf", "report.docx", "slides.pptx"] {
        writeln!(out, "  queued {job}")?;
        jobs.enqueue(job);
    }
    while let Ok(job) = jobs.dequeue() {
        writeln!(out, "  printing {job}")?;
    }

    writeln!(out, "\n3. browsing history (SinglyLinkedList):")?;
    let mut history: SinglyLinkedList<&str> =
        ["example.org", "docs.rs", "crates.io", "rust-lang.org"]
            .into_iter()
            .collect();
    writeln!(out, "  history: {history:?}")?;
    writeln!(out, "  going back twice")?;
    for _ in 0..2 {
        let Some(last) = history.len().checked_sub(1) else {
            break;
        };
        if let Ok(page) = history.remove_at(last) {
            writeln!(out, "  left {page}")?;
        }
    }
    writeln!(out, "  history: {history:?}")
}

/// Checks that every `(`, `[`, `{` is closed by its partner in order.
/// Other characters are ignored.
pub fn is_balanced(expr: &str) -> bool {
    let mut open = Stack::new();
    for ch in expr.chars() {
        match ch {
            '(' | '[' | '{' => open.push(ch),
            ')' | ']' | '}' => {
                let Ok(opening) = open.pop() else {
                    return false;
                };
                if closing_for(opening) != Some(ch) {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

fn closing_for(opening: char) -> Option<char> {
    match opening {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}
