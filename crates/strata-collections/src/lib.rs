//! Strata containers.
//!
//! Two independent, single-threaded containers over any element type:
//!
//! - [`array_list`]: [`ArrayList`], a contiguous buffer with doubling growth
//!   and quarter-full shrinking (hysteresis between the two thresholds)
//! - [`queue`]: [`LinkedQueue`], a FIFO over a singly-linked node chain
//!
//! ## Error contract
//!
//! Index-taking operations return [`CollectionError`] instead of aborting.
//! Callers that do not want to recover escalate with
//! [`OrFatal::or_fatal`](strata_common::OrFatal), which stops the process
//! with a diagnostic. Peeking or dequeuing an empty queue is not an error;
//! it yields `None`.

pub mod array_list;
pub mod queue;

pub use array_list::{ArrayList, INITIAL_CAPACITY};
pub use queue::LinkedQueue;
pub use strata_common::{CollectionError, Operation};
