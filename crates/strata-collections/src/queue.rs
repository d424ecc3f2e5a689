//! FIFO queue over a singly-linked node chain.
//!
//! Every enqueued value lives in its own heap node. The queue owns the whole
//! chain through `head`; `tail` is a non-owning pointer to the last node so
//! enqueue stays O(1). Both pointers are null exactly when `len == 0`.
//!
//! Peeking or dequeuing an empty queue is an ordinary outcome, reported as
//! `None` (or `false` for the out-parameter forms), never as an error.

use std::fmt;
use std::marker::PhantomData;
use std::ptr;

type Link<T> = *mut Node<T>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A first-in-first-out queue.
pub struct LinkedQueue<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        let node = Box::into_raw(Box::new(Node {
            value,
            next: ptr::null_mut(),
        }));
        if self.tail.is_null() {
            self.head = node;
        } else {
            // SAFETY: a non-null tail is the last live node of the chain
            // owned through `head`.
            unsafe { (*self.tail).next = node };
        }
        self.tail = node;
        self.len += 1;
    }

    /// Remove and return the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        // SAFETY: a non-null head came from `Box::into_raw` in `enqueue` and
        // is unlinked here before anything else can reach it.
        let Node { value, next } = *unsafe { Box::from_raw(self.head) };
        self.head = next;
        if self.head.is_null() {
            // Drained: the old tail is the node being freed.
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        Some(value)
    }

    /// Dequeue into `out`. Returns false and leaves `out` untouched when the
    /// queue is empty.
    pub fn dequeue_into(&mut self, out: &mut T) -> bool {
        match self.dequeue() {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Release the queue and every node still in it.
    pub fn delete(self) {
        drop(self);
    }

    fn front(&self) -> Option<&T> {
        // SAFETY: head is null or a live node owned by this queue.
        unsafe { self.head.as_ref() }.map(|node| &node.value)
    }

    fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            next: self.head,
            _queue: PhantomData,
        }
    }
}

impl<T: Clone> LinkedQueue<T> {
    /// Return a copy of the front element without removing it.
    pub fn peek(&self) -> Option<T> {
        self.front().cloned()
    }

    /// Copy the front element into `out`. Returns false and leaves `out`
    /// untouched when the queue is empty.
    pub fn peek_into(&self, out: &mut T) -> bool {
        match self.front() {
            Some(value) => {
                out.clone_from(value);
                true
            }
            None => false,
        }
    }
}

/// Read-only walk over the chain, front to back.
struct Nodes<'a, T> {
    next: Link<T>,
    _queue: PhantomData<&'a LinkedQueue<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        // SAFETY: every link reachable from head is a live node, and the
        // borrow of the queue keeps the chain from changing.
        let node = unsafe { self.next.as_ref() }?;
        self.next = node.next;
        Some(&node.value)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        // Iterative, so long chains cannot overflow the stack.
        let mut released = 0usize;
        while self.dequeue().is_some() {
            released += 1;
        }
        if released > 0 {
            log::trace!("queue dropped with {released} pending node(s)");
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.nodes()).finish()
    }
}
