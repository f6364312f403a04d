//! Random-bit stream used to drive input generation.
//!
//! A fuzzer hands over an opaque byte string and every decision made while
//! generating a test case is read from it. Replaying the same bytes replays
//! the same decisions, which is what minimization and reproduction rely on.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
mod filler;

pub use error::FillerError;
pub use filler::Filler;

use primitives::U256;

/// Source of random decisions.
///
/// Only [`RandomSource::draw_byte`] and [`RandomSource::draw_bytes`] need to be
/// implemented, every other draw is derived from them.
pub trait RandomSource {
    /// Draws one byte.
    fn draw_byte(&mut self) -> Result<u8, FillerError>;

    /// Draws exactly `width` bytes.
    ///
    /// Implementations must either return `width` bytes or fail, never fewer.
    fn draw_bytes(&mut self, width: usize) -> Result<Vec<u8>, FillerError>;

    /// Draws a fixed-width byte array.
    ///
    /// Trait objects use the free [`draw_array`] instead.
    #[inline]
    fn draw_array<const N: usize>(&mut self) -> Result<[u8; N], FillerError>
    where
        Self: Sized,
    {
        draw_array(self)
    }

    /// Draws a boolean from the low bit of one byte.
    #[inline]
    fn draw_bool(&mut self) -> Result<bool, FillerError> {
        Ok(self.draw_byte()? & 1 == 1)
    }

    /// Draws an integer in `0..bound` from eight big-endian bytes.
    ///
    /// A `bound` of zero leaves the full `u64` range.
    #[inline]
    fn draw_bounded(&mut self, bound: u64) -> Result<u64, FillerError> {
        let value = u64::from_be_bytes(into_array(&self.draw_bytes(8)?));
        Ok(value.checked_rem(bound).unwrap_or(value))
    }

    /// Draws an arbitrary 256-bit integer from 32 big-endian bytes.
    #[inline]
    fn draw_u256(&mut self) -> Result<U256, FillerError> {
        Ok(U256::from_be_bytes(into_array::<32>(&self.draw_bytes(32)?)))
    }
}

/// Draws a fixed-width byte array from any source, trait objects included.
#[inline]
pub fn draw_array<R: RandomSource + ?Sized, const N: usize>(
    source: &mut R,
) -> Result<[u8; N], FillerError> {
    Ok(into_array(&source.draw_bytes(N)?))
}

/// Copies a draw of exactly `N` bytes into an array.
#[inline]
fn into_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn draw_byte(&mut self) -> Result<u8, FillerError> {
        (**self).draw_byte()
    }

    #[inline]
    fn draw_bytes(&mut self, width: usize) -> Result<Vec<u8>, FillerError> {
        (**self).draw_bytes(width)
    }
}
