use thiserror::Error;

/// Raised when a read runs past the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Attempted to read {requested} byte(s), but only {remaining} remain")]
pub struct SerdeErr {
    pub requested: usize,
    pub remaining: usize,
}
