//! The point evaluation precompile input as a record.
use crate::InputLengthError;
use primitives::{
    Bytes, COMMITMENT_OFFSET, EVALUATION_POINT_OFFSET, EXPECTED_OUTPUT_OFFSET,
    G1_COMPRESSED_LENGTH, INPUT_LENGTH, PROOF_OFFSET, SCALAR_LENGTH, U256, VERSIONED_HASH_LENGTH,
};

/// Fields of one point evaluation call, in wire order.
///
/// Nothing here is validated. Use [`PointEvaluationInput::check`] to see which
/// preconditions of the precompile a value meets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointEvaluationInput {
    /// Expected to be `kzg_to_versioned_hash(commitment)`.
    pub versioned_hash: [u8; VERSIONED_HASH_LENGTH],
    /// `z`, big endian.
    pub evaluation_point: [u8; SCALAR_LENGTH],
    /// `y`, big endian.
    pub expected_output: [u8; SCALAR_LENGTH],
    /// Compressed G1 commitment to the polynomial.
    pub commitment: [u8; G1_COMPRESSED_LENGTH],
    /// Compressed G1 quotient commitment.
    pub proof: [u8; G1_COMPRESSED_LENGTH],
}

impl PointEvaluationInput {
    /// Serializes the fields back to back.
    pub fn encode(&self) -> [u8; INPUT_LENGTH] {
        let mut out = [0u8; INPUT_LENGTH];
        out[..EVALUATION_POINT_OFFSET].copy_from_slice(&self.versioned_hash);
        out[EVALUATION_POINT_OFFSET..EXPECTED_OUTPUT_OFFSET]
            .copy_from_slice(&self.evaluation_point);
        out[EXPECTED_OUTPUT_OFFSET..COMMITMENT_OFFSET].copy_from_slice(&self.expected_output);
        out[COMMITMENT_OFFSET..PROOF_OFFSET].copy_from_slice(&self.commitment);
        out[PROOF_OFFSET..].copy_from_slice(&self.proof);
        out
    }

    /// Splits an encoded input into its fields.
    pub fn decode(input: &[u8]) -> Result<Self, InputLengthError> {
        let input: &[u8; INPUT_LENGTH] = input
            .try_into()
            .map_err(|_| InputLengthError(input.len()))?;
        Ok(Self {
            versioned_hash: field(&input[..EVALUATION_POINT_OFFSET]),
            evaluation_point: field(&input[EVALUATION_POINT_OFFSET..EXPECTED_OUTPUT_OFFSET]),
            expected_output: field(&input[EXPECTED_OUTPUT_OFFSET..COMMITMENT_OFFSET]),
            commitment: field(&input[COMMITMENT_OFFSET..PROOF_OFFSET]),
            proof: field(&input[PROOF_OFFSET..]),
        })
    }

    /// `z` as an integer.
    #[inline]
    pub fn evaluation_point_value(&self) -> U256 {
        U256::from_be_bytes(self.evaluation_point)
    }

    /// `y` as an integer.
    #[inline]
    pub fn expected_output_value(&self) -> U256 {
        U256::from_be_bytes(self.expected_output)
    }
}

impl From<&PointEvaluationInput> for Bytes {
    fn from(input: &PointEvaluationInput) -> Self {
        Bytes::copy_from_slice(&input.encode())
    }
}

/// Copies a slice whose length is fixed by the layout constants.
#[inline]
fn field<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}
