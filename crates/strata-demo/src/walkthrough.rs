//! Scripted walkthroughs of the two containers.
//!
//! Each walkthrough writes a human-readable trace to `out`. Container errors
//! are never expected here; any that occur escalate through
//! [`OrFatal::or_fatal`] and stop the process.

use std::io::{self, Write};

use strata_collections::{ArrayList, LinkedQueue};
use strata_common::OrFatal;

use crate::render::{format_list, format_range};

/// Number of trailing elements shown after the bulk append.
const TAIL_WINDOW: usize = 20;

/// Values enqueued by each queue batch.
const QUEUE_BATCH: [i32; 4] = [101, 201, 301, 401];

/// Tunables for the list walkthrough.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Number of integers appended in the bulk phase.
    pub bulk: u32,
    /// Number of elements left after the bulk removal phase.
    pub keep: usize,
    /// Finish with an out-of-range removal, which is fatal.
    pub violate: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            bulk: 1000,
            keep: 11,
            violate: false,
        }
    }
}

fn report(out: &mut dyn Write, list: &ArrayList<i64>) -> io::Result<()> {
    writeln!(out, "List Contents: {}", format_list(list).or_fatal())?;
    writeln!(out, "List Size: {}", list.len())
}

/// Append, remove, insert and set by index, then grow and shrink the list
/// through a bulk append and a bulk removal.
pub fn run_list(out: &mut dyn Write, opts: &ListOptions) -> io::Result<()> {
    let mut list: ArrayList<i64> = ArrayList::new();
    writeln!(out, "List created")?;

    writeln!(out, "\n--- Append ---")?;
    for value in [10, 20, 30] {
        list.append(value).or_fatal();
    }
    writeln!(out, "Item at Index 0: {}", list.get(0).or_fatal())?;
    report(out, &list)?;

    writeln!(out, "\n--- Remove ---")?;
    for index in [2, 0] {
        let removed = list.remove(index).or_fatal();
        writeln!(out, "Remove Item at Index {index}: {removed}")?;
        report(out, &list)?;
    }

    writeln!(out, "\n--- Insert ---")?;
    for (value, index) in [(100, 1), (500, 0)] {
        writeln!(out, "Insert Item {value} at Index {index}")?;
        list.insert(value, index).or_fatal();
        report(out, &list)?;
    }
    writeln!(out, "Insert Item 500 at End of List")?;
    list.insert(500, list.len()).or_fatal();
    report(out, &list)?;

    writeln!(out, "\n--- Set ---")?;
    for index in [0, list.len() - 1] {
        writeln!(out, "Set Item at Index {index} to -1000")?;
        list.set(index, -1000).or_fatal();
        report(out, &list)?;
    }

    writeln!(out, "\n--- Append {} items ---", opts.bulk)?;
    for value in 0..opts.bulk {
        list.append(i64::from(value)).or_fatal();
    }
    let last = list.len() - 1;
    let window = format_range(&list, list.len().saturating_sub(TAIL_WINDOW), last).or_fatal();
    writeln!(out, "End of List: {window}")?;
    writeln!(out, "List Size: {}", list.len())?;
    writeln!(out, "List Capacity: {}", list.capacity())?;

    writeln!(out, "\n--- Remove down to {} items ---", opts.keep)?;
    while list.len() > opts.keep {
        list.remove(list.len() - 1).or_fatal();
    }
    report(out, &list)?;
    writeln!(out, "List Capacity: {}", list.capacity())?;

    if opts.violate {
        writeln!(out, "\n--- Out of range ---")?;
        writeln!(out, "Remove Item at Index 1000")?;
        out.flush()?;
        list.remove(1000).or_fatal();
    }

    list.delete();
    Ok(())
}

fn enqueue_batch(out: &mut dyn Write, queue: &mut LinkedQueue<i32>) -> io::Result<()> {
    for value in QUEUE_BATCH {
        queue.enqueue(value);
    }
    let shown: Vec<String> = QUEUE_BATCH.iter().map(ToString::to_string).collect();
    writeln!(out, "Enqueue {} items: {}", QUEUE_BATCH.len(), shown.join(", "))?;
    writeln!(out, "Queue Length: {}", queue.len())
}

fn describe(value: Option<i32>) -> String {
    value.map_or_else(|| String::from("<empty>"), |v| v.to_string())
}

/// Enqueue a batch, drain it in FIFO order, show that an empty queue is not
/// an error, then refill and delete the queue with nodes still pending.
pub fn run_queue(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "============================")?;
    writeln!(out, "======== Queue Test ========")?;
    writeln!(out, "============================")?;

    let mut queue = LinkedQueue::new();
    writeln!(out)?;
    enqueue_batch(out, &mut queue)?;

    let mut value = 0;
    for round in 1..=QUEUE_BATCH.len() {
        writeln!(out)?;
        if queue.peek_into(&mut value) {
            writeln!(out, "Queue Peek: {value}")?;
        }
        if queue.dequeue_into(&mut value) {
            writeln!(out, "Dequeue item {round}: {value}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Queue Length: {}", queue.len())?;
    writeln!(out, "Queue Peek: {}", describe(queue.peek()))?;
    writeln!(out, "Dequeue on empty queue: {}", describe(queue.dequeue()))?;

    writeln!(out)?;
    enqueue_batch(out, &mut queue)?;
    queue.delete();
    writeln!(out, "Queue Deleted")
}
