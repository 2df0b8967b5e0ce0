use thiserror::Error;

/// Errors returned by the unit-checked interface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The underlying solver rejected the burn.
    #[error(transparent)]
    Solver(#[from] tsiolkovsky::Error),

    /// The solver produced an array where a single value was expected.
    #[error("expected a scalar result, got shape {shape:?}")]
    NotScalar { shape: Vec<usize> },
}
