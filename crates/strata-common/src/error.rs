use std::fmt;

use serde::Serialize;

/// The container operation that rejected an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    Get,
    Set,
    Insert,
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Insert => "insert",
            Self::Remove => "remove",
        };
        f.write_str(verb)
    }
}

/// An error reported by a container operation.
///
/// Both variants are programmer or resource errors rather than expected
/// states: callers either handle them or escalate through
/// [`fatal`](crate::fatal::fatal). An empty queue is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CollectionError {
    /// An index fell outside the range the operation accepts.
    ///
    /// `get`, `set` and `remove` accept `[0, len)`; `insert` also accepts
    /// `len` itself (append position).
    IndexOutOfRange {
        op: Operation,
        index: usize,
        len: usize,
    },
    /// Reserving a new backing buffer of `requested` slots failed.
    AllocationFailed { requested: usize },
}

impl CollectionError {
    /// Create an out-of-range error for `op`.
    pub fn out_of_range(op: Operation, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { op, index, len }
    }

    /// True for precondition failures (bad indices), false for resource
    /// exhaustion.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { op, index, len } => {
                write!(f, "cannot {op} element at index {index} (len {len})")
            }
            Self::AllocationFailed { requested } => write!(
                f,
                "cannot resize list to {requested} slots (memory allocation failed)"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}
