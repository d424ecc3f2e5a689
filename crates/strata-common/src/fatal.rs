//! Hard-stop escalation for errors nobody handles.
//!
//! Container operations return `Result`, but the default reaction to an
//! unhandled contract violation or allocation failure is to stop the
//! process with a diagnostic, never to carry on with a corrupt view.

use std::fmt::Display;

/// Print `strata: fatal: {err}` to stderr and abort the process.
pub fn fatal(err: &dyn Display) -> ! {
    log::error!("{err}");
    eprintln!("strata: fatal: {err}");
    std::process::abort();
}

/// Unwrap a result or escalate its error through [`fatal`].
pub trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T, E: Display> OrFatal<T> for Result<T, E> {
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal(&err),
        }
    }
}
