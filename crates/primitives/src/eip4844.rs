//! EIP-4844 point evaluation constants
//!
//! The precompile input is encoded as follows:
//!
//! | versioned_hash |  z  |  y  | commitment | proof |
//! |     32         | 32  | 32  |     48     |   48  |
//!
//! with z and y being padded 32 byte big endian values.
use crate::{u64_to_address, Address, U256};
use sha2::{Digest, Sha256};

/// Address of the KZG point evaluation precompile.
pub const POINT_EVALUATION_ADDRESS: Address = u64_to_address(0x0A);

/// Gas cost of the KZG point evaluation precompile.
pub const POINT_EVALUATION_GAS_COST: u64 = 50_000;

/// First version of the blob commitment hash.
pub const VERSIONED_HASH_VERSION_KZG: u8 = 0x01;

/// Width of the versioned hash field.
pub const VERSIONED_HASH_LENGTH: usize = 32;

/// SCALAR_LENGTH specifies the number of bytes needed to represent an Fr element,
/// used for both the evaluation point and the expected output.
pub const SCALAR_LENGTH: usize = 32;

/// Width of a compressed G1 point, used for both the commitment and the proof.
pub const G1_COMPRESSED_LENGTH: usize = 48;

/// Offset of the evaluation point (z).
pub const EVALUATION_POINT_OFFSET: usize = VERSIONED_HASH_LENGTH;

/// Offset of the expected output (y).
pub const EXPECTED_OUTPUT_OFFSET: usize = EVALUATION_POINT_OFFSET + SCALAR_LENGTH;

/// Offset of the commitment.
pub const COMMITMENT_OFFSET: usize = EXPECTED_OUTPUT_OFFSET + SCALAR_LENGTH;

/// Offset of the proof.
pub const PROOF_OFFSET: usize = COMMITMENT_OFFSET + G1_COMPRESSED_LENGTH;

/// Total length of the precompile input.
pub const INPUT_LENGTH: usize = PROOF_OFFSET + G1_COMPRESSED_LENGTH;

/// `BLS_MODULUS: = 52435875175126190479447740508185965837690552500527637822603658699938581184513`
/// in big endian format
pub const BLS_MODULUS_BYTES: [u8; SCALAR_LENGTH] = [
    115, 237, 167, 83, 41, 157, 125, 72, 51, 57, 216, 8, 9, 161, 216, 5, 83, 189, 164, 2, 255, 254,
    91, 254, 255, 255, 255, 255, 0, 0, 0, 1,
];

/// The scalar field modulus of BLS12-381 as an integer.
pub const BLS_MODULUS: U256 = U256::from_limbs([
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
]);

/// Compressed encoding of the G1 point at infinity.
pub const G1_POINT_AT_INFINITY: [u8; G1_COMPRESSED_LENGTH] = {
    let mut bytes = [0u8; G1_COMPRESSED_LENGTH];
    bytes[0] = 0xc0;
    bytes
};

/// `VERSIONED_HASH_VERSION_KZG ++ sha256(commitment)[1..]`
#[inline]
pub fn kzg_to_versioned_hash(commitment: &[u8]) -> [u8; VERSIONED_HASH_LENGTH] {
    let mut hash: [u8; VERSIONED_HASH_LENGTH] = Sha256::digest(commitment).into();
    hash[0] = VERSIONED_HASH_VERSION_KZG;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_192_bytes() {
        assert_eq!(EVALUATION_POINT_OFFSET, 32);
        assert_eq!(EXPECTED_OUTPUT_OFFSET, 64);
        assert_eq!(COMMITMENT_OFFSET, 96);
        assert_eq!(PROOF_OFFSET, 144);
        assert_eq!(INPUT_LENGTH, 192);
    }

    #[test]
    fn modulus_limbs_match_bytes() {
        assert_eq!(BLS_MODULUS, U256::from_be_bytes(BLS_MODULUS_BYTES));
        assert_eq!(BLS_MODULUS.to_be_bytes::<32>(), BLS_MODULUS_BYTES);
    }

    #[test]
    fn versioned_hash_carries_version() {
        let commitment = [0u8; G1_COMPRESSED_LENGTH];
        let hash = kzg_to_versioned_hash(&commitment);
        let digest: [u8; 32] = Sha256::digest(commitment).into();
        assert_eq!(hash[0], VERSIONED_HASH_VERSION_KZG);
        assert_eq!(hash[1..], digest[1..]);
    }
}
