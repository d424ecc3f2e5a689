//! Shared vocabulary for the Strata containers.
//!
//! - [`error`]: the typed errors every container operation reports
//! - [`fatal`]: the default hard-stop escalation for unhandled errors

pub mod error;
pub mod fatal;

pub use error::{CollectionError, Operation};
pub use fatal::{fatal, OrFatal};
