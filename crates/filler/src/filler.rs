use crate::{FillerError, RandomSource};
use primitives::Bytes;

/// [`RandomSource`] reading sequentially from a fixed byte string.
///
/// The cursor only moves forward. A draw that does not fit in the remaining
/// bytes fails and leaves the cursor where it was.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filler {
    data: Bytes,
    cursor: usize,
}

impl Filler {
    /// Creates a filler over `data`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            cursor: 0,
        }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of bytes still available.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, width: usize) -> Result<&[u8], FillerError> {
        let remaining = self.remaining();
        if width > remaining {
            return Err(FillerError::Exhausted {
                requested: width,
                remaining,
            });
        }
        let start = self.cursor;
        self.cursor += width;
        Ok(&self.data[start..self.cursor])
    }
}

impl RandomSource for Filler {
    #[inline]
    fn draw_byte(&mut self) -> Result<u8, FillerError> {
        self.take(1).map(|bytes| bytes[0])
    }

    #[inline]
    fn draw_bytes(&mut self, width: usize) -> Result<Vec<u8>, FillerError> {
        self.take(width).map(<[u8]>::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::U256;
    use rstest::rstest;

    #[test]
    fn draws_advance_cursor_by_width() {
        let mut filler = Filler::new((0u8..64).collect::<Vec<_>>());
        assert_eq!(filler.draw_byte(), Ok(0));
        assert_eq!(filler.draw_bytes(3), Ok(vec![1, 2, 3]));
        assert_eq!(filler.draw_array::<4>(), Ok([4, 5, 6, 7]));
        assert_eq!(filler.position(), 8);
        assert_eq!(filler.remaining(), 56);
    }

    #[rstest]
    #[case::even(0x00, false)]
    #[case::odd(0x01, true)]
    #[case::high_bits_ignored(0xfe, false)]
    #[case::all_ones(0xff, true)]
    fn bool_uses_low_bit(#[case] byte: u8, #[case] expected: bool) {
        let mut filler = Filler::new(vec![byte]);
        assert_eq!(filler.draw_bool(), Ok(expected));
        assert!(filler.is_exhausted());
    }

    #[rstest]
    #[case::in_range(10, 1_000, 10)]
    #[case::wraps(1_005, 1_000, 5)]
    #[case::unbounded(1_005, 0, 1_005)]
    fn bounded_reduces_modulo(#[case] raw: u64, #[case] bound: u64, #[case] expected: u64) {
        let mut filler = Filler::new(raw.to_be_bytes().to_vec());
        assert_eq!(filler.draw_bounded(bound), Ok(expected));
    }

    #[test]
    fn u256_is_big_endian() {
        let mut bytes = vec![0u8; 32];
        bytes[31] = 0x2a;
        bytes[0] = 0x01;
        let mut filler = Filler::new(bytes);
        assert_eq!(
            filler.draw_u256(),
            Ok((U256::from(1) << 248) + U256::from(0x2a))
        );
    }

    #[test]
    fn exhaustion_is_an_error_and_keeps_cursor() {
        let mut filler = Filler::new(vec![1, 2, 3]);
        assert_eq!(filler.draw_byte(), Ok(1));
        assert_eq!(
            filler.draw_bytes(32),
            Err(FillerError::Exhausted {
                requested: 32,
                remaining: 2
            })
        );
        assert_eq!(filler.position(), 1);
        assert_eq!(filler.draw_bytes(2), Ok(vec![2, 3]));
        assert!(filler.draw_bool().is_err());
    }

    #[test]
    fn replay_is_deterministic() {
        let seed: Vec<u8> = (0u8..=255).rev().collect();
        let draw = |filler: &mut Filler| {
            (
                filler.draw_bool().unwrap(),
                filler.draw_bounded(77).unwrap(),
                filler.draw_u256().unwrap(),
                filler.draw_array::<48>().unwrap(),
            )
        };
        let first = draw(&mut Filler::new(seed.clone()));
        let second = draw(&mut Filler::new(seed));
        assert_eq!(first, second);
    }

    #[test]
    fn trait_object_draws_match_concrete() {
        let seed: Vec<u8> = (0u8..64).collect();
        let mut concrete = Filler::new(seed.clone());
        let mut boxed: Box<dyn RandomSource> = Box::new(Filler::new(seed));
        let source: &mut dyn RandomSource = boxed.as_mut();

        assert_eq!(
            crate::draw_array::<_, 4>(&mut *source),
            Ok(concrete.draw_array::<4>().unwrap())
        );
        assert_eq!(source.draw_bool(), concrete.draw_bool());
        assert_eq!(source.draw_bounded(1_000), concrete.draw_bounded(1_000));
        assert_eq!(source.draw_u256(), concrete.draw_u256());
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn first_byte(mut source: impl RandomSource) -> u8 {
            source.draw_byte().unwrap()
        }
        let mut filler = Filler::new(vec![9, 8]);
        assert_eq!(first_byte(&mut filler), 9);
        assert_eq!(filler.draw_byte(), Ok(8));
    }
}
