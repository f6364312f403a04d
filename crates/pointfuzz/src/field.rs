use filler::{draw_array, FillerError, RandomSource};
use primitives::{G1_COMPRESSED_LENGTH, SCALAR_LENGTH};

/// Unconstrained fixed-width draws for the garbage path.
#[derive(Debug)]
pub struct FieldElementSource<'a, R: ?Sized> {
    source: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> FieldElementSource<'a, R> {
    /// Borrows `source` for the duration of one payload.
    pub fn new(source: &'a mut R) -> Self {
        Self { source }
    }

    /// Draws a 32-byte field.
    #[inline]
    pub fn draw32(&mut self) -> Result<[u8; SCALAR_LENGTH], FillerError> {
        draw_array(&mut *self.source)
    }

    /// Draws a 48-byte field.
    #[inline]
    pub fn draw48(&mut self) -> Result<[u8; G1_COMPRESSED_LENGTH], FillerError> {
        draw_array(&mut *self.source)
    }
}
