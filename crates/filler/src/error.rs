use thiserror::Error;

/// Errors raised while drawing from a random source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FillerError {
    /// The stream cannot satisfy the requested draw.
    #[error("random source exhausted: requested {requested} bytes, {remaining} remaining")]
    Exhausted {
        /// Number of bytes the draw needed.
        requested: usize,
        /// Number of bytes left in the stream.
        remaining: usize,
    },
}
