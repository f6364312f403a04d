//! BLS12-381 G1 elements for the commitment and proof fields.
//!
//! Curve arithmetic is delegated to `blst`, this module only picks points and
//! encodes them.
use blst::{
    blst_p1, blst_p1_affine, blst_p1_affine_in_g1, blst_p1_affine_is_inf, blst_p1_compress,
    blst_p1_generator, blst_p1_mult, blst_p1_uncompress, BLST_ERROR,
};
use filler::{FillerError, RandomSource};
use primitives::{BLS_MODULUS_BYTES, G1_COMPRESSED_LENGTH, G1_POINT_AT_INFINITY, U256};

/// Number of scalar bits fed to `blst_p1_mult`.
const SCALAR_BITS: usize = 256;

/// A G1 element the sampler can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupElement {
    /// The scalar field modulus as a 48-byte big-endian integer.
    ///
    /// Not a point: its compression flag is clear, so it never decodes.
    GroupOrderMarker,
    /// The point at infinity.
    Identity,
    /// The canonical generator.
    Generator,
    /// `scalar * generator`.
    ScalarMultiple(U256),
}

/// Variant of a [`GroupElement`], without its scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupElementKind {
    /// See [`GroupElement::GroupOrderMarker`].
    GroupOrderMarker,
    /// See [`GroupElement::Identity`].
    Identity,
    /// See [`GroupElement::Generator`].
    Generator,
    /// See [`GroupElement::ScalarMultiple`].
    ScalarMultiple,
}

impl GroupElementKind {
    /// All kinds, in selector order.
    pub const ALL: [Self; 4] = [
        Self::GroupOrderMarker,
        Self::Identity,
        Self::Generator,
        Self::ScalarMultiple,
    ];

    /// Kinds that encode G1 members, in selector order.
    pub const MEMBERS: [Self; 3] = [Self::Identity, Self::Generator, Self::ScalarMultiple];

    /// Maps a drawn selector byte onto any kind.
    #[inline]
    pub const fn from_selector(selector: u8) -> Self {
        Self::ALL[selector as usize % Self::ALL.len()]
    }

    /// Maps a drawn selector byte onto a member kind.
    #[inline]
    pub const fn member_from_selector(selector: u8) -> Self {
        Self::MEMBERS[selector as usize % Self::MEMBERS.len()]
    }
}

impl GroupElement {
    /// The variant, without its scalar.
    pub const fn kind(&self) -> GroupElementKind {
        match self {
            Self::GroupOrderMarker => GroupElementKind::GroupOrderMarker,
            Self::Identity => GroupElementKind::Identity,
            Self::Generator => GroupElementKind::Generator,
            Self::ScalarMultiple(_) => GroupElementKind::ScalarMultiple,
        }
    }

    /// Compressed 48-byte encoding.
    pub fn encode(&self) -> [u8; G1_COMPRESSED_LENGTH] {
        match self {
            Self::GroupOrderMarker => CurveGroupSampler::group_order_marker(),
            Self::Identity => CurveGroupSampler::identity(),
            Self::Generator => CurveGroupSampler::generator(),
            Self::ScalarMultiple(scalar) => CurveGroupSampler::scalar_multiple(scalar),
        }
    }

    /// Whether the element is a member of G1.
    #[inline]
    pub const fn is_member(&self) -> bool {
        !matches!(self, Self::GroupOrderMarker)
    }
}

/// Draws and encodes [`GroupElement`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurveGroupSampler;

impl CurveGroupSampler {
    /// The modulus, left padded to the width of a compressed point.
    pub fn group_order_marker() -> [u8; G1_COMPRESSED_LENGTH] {
        let mut out = [0u8; G1_COMPRESSED_LENGTH];
        out[G1_COMPRESSED_LENGTH - BLS_MODULUS_BYTES.len()..].copy_from_slice(&BLS_MODULUS_BYTES);
        out
    }

    /// The compressed point at infinity.
    #[inline]
    pub fn identity() -> [u8; G1_COMPRESSED_LENGTH] {
        G1_POINT_AT_INFINITY
    }

    /// The compressed generator.
    pub fn generator() -> [u8; G1_COMPRESSED_LENGTH] {
        // SAFETY: blst returns a pointer to its static generator.
        compress(unsafe { &*blst_p1_generator() })
    }

    /// The compressed `scalar * generator`.
    pub fn scalar_multiple(scalar: &U256) -> [u8; G1_COMPRESSED_LENGTH] {
        let scalar = scalar.to_le_bytes::<32>();
        let mut out = blst_p1::default();
        // SAFETY: `out` and the generator are valid blst types, `scalar` holds SCALAR_BITS bits.
        unsafe { blst_p1_mult(&mut out, blst_p1_generator(), scalar.as_ptr(), SCALAR_BITS) };
        compress(&out)
    }

    /// Draws any of the four variants from one selector byte.
    ///
    /// A scalar multiple draws its scalar as 32 more bytes.
    pub fn sample<R: RandomSource + ?Sized>(source: &mut R) -> Result<GroupElement, FillerError> {
        let kind = GroupElementKind::from_selector(source.draw_byte()?);
        Self::sample_kind(kind, source)
    }

    /// Like [`CurveGroupSampler::sample`] but never yields the marker.
    pub fn sample_member<R: RandomSource + ?Sized>(
        source: &mut R,
    ) -> Result<GroupElement, FillerError> {
        let kind = GroupElementKind::member_from_selector(source.draw_byte()?);
        Self::sample_kind(kind, source)
    }

    fn sample_kind<R: RandomSource + ?Sized>(
        kind: GroupElementKind,
        source: &mut R,
    ) -> Result<GroupElement, FillerError> {
        Ok(match kind {
            GroupElementKind::GroupOrderMarker => GroupElement::GroupOrderMarker,
            GroupElementKind::Identity => GroupElement::Identity,
            GroupElementKind::Generator => GroupElement::Generator,
            GroupElementKind::ScalarMultiple => GroupElement::ScalarMultiple(source.draw_u256()?),
        })
    }
}

/// Returns `true` if `bytes` is a compressed point of the G1 subgroup.
///
/// The point at infinity is accepted, as the precompile does.
pub fn is_g1_member(bytes: &[u8; G1_COMPRESSED_LENGTH]) -> bool {
    let mut point = blst_p1_affine::default();
    // SAFETY: `bytes` is 48 bytes long, which is what blst reads.
    if unsafe { blst_p1_uncompress(&mut point, bytes.as_ptr()) } != BLST_ERROR::BLST_SUCCESS {
        return false;
    }
    // SAFETY: `point` was initialized by blst above.
    unsafe { blst_p1_affine_is_inf(&point) || blst_p1_affine_in_g1(&point) }
}

fn compress(point: &blst_p1) -> [u8; G1_COMPRESSED_LENGTH] {
    let mut out = [0u8; G1_COMPRESSED_LENGTH];
    // SAFETY: `out` has room for a compressed point.
    unsafe { blst_p1_compress(out.as_mut_ptr(), point) };
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use filler::Filler;
    use primitives::hex;
    use rstest::rstest;

    const GENERATOR: &str = "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

    #[test]
    fn generator_encoding() {
        assert_eq!(hex::encode(CurveGroupSampler::generator()), GENERATOR);
    }

    #[test]
    fn marker_is_padded_modulus() {
        let marker = CurveGroupSampler::group_order_marker();
        assert_eq!(marker[..16], [0u8; 16]);
        assert_eq!(marker[16..], BLS_MODULUS_BYTES);
    }

    #[test]
    fn trivial_multiples() {
        assert_eq!(
            CurveGroupSampler::scalar_multiple(&U256::ZERO),
            CurveGroupSampler::identity()
        );
        assert_eq!(
            CurveGroupSampler::scalar_multiple(&U256::from(1)),
            CurveGroupSampler::generator()
        );
        assert_ne!(
            CurveGroupSampler::scalar_multiple(&U256::from(2)),
            CurveGroupSampler::generator()
        );
    }

    #[rstest]
    #[case::marker(GroupElement::GroupOrderMarker, false)]
    #[case::identity(GroupElement::Identity, true)]
    #[case::generator(GroupElement::Generator, true)]
    #[case::small(GroupElement::ScalarMultiple(U256::from(5)), true)]
    #[case::large(GroupElement::ScalarMultiple(U256::MAX), true)]
    fn membership(#[case] element: GroupElement, #[case] member: bool) {
        assert_eq!(element.is_member(), member);
        assert_eq!(is_g1_member(&element.encode()), member);
    }

    #[test]
    fn garbage_is_not_a_member() {
        assert!(!is_g1_member(&[0xff; 48]));
        assert!(!is_g1_member(&[0x00; 48]));
    }

    #[rstest]
    #[case(0, GroupElement::GroupOrderMarker)]
    #[case(1, GroupElement::Identity)]
    #[case(2, GroupElement::Generator)]
    #[case(4, GroupElement::GroupOrderMarker)]
    fn sample_selects_by_byte(#[case] selector: u8, #[case] expected: GroupElement) {
        let mut filler = Filler::new(vec![selector]);
        assert_eq!(CurveGroupSampler::sample(&mut filler), Ok(expected));
        assert!(filler.is_exhausted());
    }

    #[test]
    fn sample_scalar_multiple_draws_scalar() {
        let mut seed = vec![3u8];
        seed.extend([0u8; 31]);
        seed.push(6);
        let mut filler = Filler::new(seed);
        assert_eq!(
            CurveGroupSampler::sample(&mut filler),
            Ok(GroupElement::ScalarMultiple(U256::from(6)))
        );
    }

    #[test]
    fn selector_tables_cover_every_kind() {
        let elements = [
            GroupElement::GroupOrderMarker,
            GroupElement::Identity,
            GroupElement::Generator,
            GroupElement::ScalarMultiple(U256::from(3)),
        ];
        for element in elements {
            assert!(GroupElementKind::ALL.contains(&element.kind()));
            assert_eq!(
                GroupElementKind::MEMBERS.contains(&element.kind()),
                element.is_member()
            );
        }
        for (selector, kind) in GroupElementKind::ALL.into_iter().enumerate() {
            assert_eq!(GroupElementKind::from_selector(selector as u8), kind);
        }
        for (selector, kind) in GroupElementKind::MEMBERS.into_iter().enumerate() {
            assert_eq!(GroupElementKind::member_from_selector(selector as u8), kind);
            assert_eq!(GroupElementKind::member_from_selector(selector as u8 + 3), kind);
        }
    }

    #[test]
    fn sample_member_never_yields_marker() {
        for selector in 0..=u8::MAX {
            let mut seed = vec![selector];
            seed.extend([0x11u8; 32]);
            let element = CurveGroupSampler::sample_member(&mut Filler::new(seed)).unwrap();
            assert!(element.is_member());
        }
    }

    #[test]
    fn scalar_multiple_without_scalar_bytes_fails() {
        let mut filler = Filler::new(vec![3u8, 0, 0]);
        assert_eq!(
            CurveGroupSampler::sample(&mut filler),
            Err(FillerError::Exhausted {
                requested: 32,
                remaining: 2
            })
        );
    }
}
