use thiserror::Error;

use crate::broadcast::BroadcastError;

/// Errors returned by the rocket equation solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of absent quantities was not exactly one.
    ///
    /// Raised before any arithmetic is attempted.
    #[error("exactly one argument must be absent (found {absent})")]
    Argument { absent: usize },

    /// The selected formula could not be evaluated for the operand shapes.
    ///
    /// The underlying [`BroadcastError`] is kept as the source.
    #[error("could not compute value; most likely due to a dimension mismatch")]
    Computation(#[source] BroadcastError),
}
