use filler::FillerError;
use primitives::INPUT_LENGTH;
use thiserror::Error;

/// Errors that abort one generation call.
///
/// Malformed payloads are never an error here, producing them is the point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The random source ran out. Retrying would break replay.
    #[error(transparent)]
    RandomSource(#[from] FillerError),
}

/// A byte slice that is not a point evaluation input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid point evaluation input length: expected {expected}, got {0}", expected = INPUT_LENGTH)]
pub struct InputLengthError(pub usize);
