//! Payload construction strategies.
use crate::{CurveGroupSampler, FieldElementSource, GroupElement, Invariant, PointEvaluationInput};
use filler::{FillerError, RandomSource};
use primitives::{kzg_to_versioned_hash, BLS_MODULUS, BLS_MODULUS_BYTES, U256};
use tracing::trace;

/// How a payload is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadStrategy {
    /// Every field drawn raw. Exercises the rejection paths.
    Random,
    /// Zero hash and the modulus marker everywhere else. Draws nothing.
    Canonical,
    /// Scalars in the field, commitments in G1, hash bound to the commitment.
    /// Only the opening proof is wrong.
    Sampled,
    /// A sampled payload with exactly the given invariant broken.
    Mutated(Invariant),
}

/// Builds [`PointEvaluationInput`]s from a random source.
#[derive(Debug)]
pub struct BlobPayloadBuilder<'a, R: ?Sized> {
    source: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> BlobPayloadBuilder<'a, R> {
    /// Borrows `source` for the duration of one payload.
    pub fn new(source: &'a mut R) -> Self {
        Self { source }
    }

    /// Draws the strategy.
    ///
    /// One boolean: `true` is [`PayloadStrategy::Random`], `false` is
    /// [`PayloadStrategy::Canonical`]. With `extended` the `false` branch draws
    /// one more byte choosing between canonical, sampled and mutated.
    pub fn select_strategy(&mut self, extended: bool) -> Result<PayloadStrategy, FillerError> {
        if self.source.draw_bool()? {
            return Ok(PayloadStrategy::Random);
        }
        if !extended {
            return Ok(PayloadStrategy::Canonical);
        }
        Ok(match self.source.draw_byte()? % 3 {
            0 => PayloadStrategy::Canonical,
            1 => PayloadStrategy::Sampled,
            _ => PayloadStrategy::Mutated(Invariant::from_selector(self.source.draw_byte()?)),
        })
    }

    /// Builds a payload with the given strategy.
    pub fn build(&mut self, strategy: PayloadStrategy) -> Result<PointEvaluationInput, FillerError> {
        match strategy {
            PayloadStrategy::Random => self.random_payload(),
            PayloadStrategy::Canonical => Ok(Self::canonical_payload()),
            PayloadStrategy::Sampled => self.sampled_payload(),
            PayloadStrategy::Mutated(invariant) => self.mutated_payload(invariant),
        }
    }

    /// Every field drawn raw, in field order.
    pub fn random_payload(&mut self) -> Result<PointEvaluationInput, FillerError> {
        let mut fields = FieldElementSource::new(&mut *self.source);
        Ok(PointEvaluationInput {
            versioned_hash: fields.draw32()?,
            evaluation_point: fields.draw32()?,
            expected_output: fields.draw32()?,
            commitment: fields.draw48()?,
            proof: fields.draw48()?,
        })
    }

    /// Zero hash, the modulus as both scalars and the modulus marker as both points.
    ///
    /// Structurally complete but never accepted: the markers are not points.
    pub fn canonical_payload() -> PointEvaluationInput {
        let marker = CurveGroupSampler::group_order_marker();
        PointEvaluationInput {
            versioned_hash: [0; 32],
            evaluation_point: BLS_MODULUS_BYTES,
            expected_output: BLS_MODULUS_BYTES,
            commitment: marker,
            proof: marker,
        }
    }

    /// Scalars reduced into the field, both points sampled from G1 and the
    /// hash bound to the commitment.
    pub fn sampled_payload(&mut self) -> Result<PointEvaluationInput, FillerError> {
        let evaluation_point = self.draw_scalar()?;
        let expected_output = self.draw_scalar()?;
        let commitment = self.draw_member()?;
        let proof = self.draw_member()?;
        Ok(PointEvaluationInput {
            versioned_hash: kzg_to_versioned_hash(&commitment),
            evaluation_point,
            expected_output,
            commitment,
            proof,
        })
    }

    /// A sampled payload with `invariant` broken and every other one intact.
    pub fn mutated_payload(
        &mut self,
        invariant: Invariant,
    ) -> Result<PointEvaluationInput, FillerError> {
        let mut input = self.sampled_payload()?;
        match invariant {
            Invariant::EvaluationPointInField => {
                input.evaluation_point = self.draw_out_of_field()?;
            }
            Invariant::ExpectedOutputInField => {
                input.expected_output = self.draw_out_of_field()?;
            }
            Invariant::VersionedHashMatches => {
                let index = self.source.draw_byte()? as usize % input.versioned_hash.len();
                input.versioned_hash[index] ^= 0xff;
            }
            Invariant::CommitmentInGroup => {
                clear_compression_flag(&mut input.commitment);
                input.versioned_hash = kzg_to_versioned_hash(&input.commitment);
            }
            Invariant::ProofInGroup => clear_compression_flag(&mut input.proof),
        }
        Ok(input)
    }

    fn draw_scalar(&mut self) -> Result<[u8; 32], FillerError> {
        Ok((self.source.draw_u256()? % BLS_MODULUS).to_be_bytes())
    }

    /// `BLS_MODULUS + k` for a drawn byte `k`.
    fn draw_out_of_field(&mut self) -> Result<[u8; 32], FillerError> {
        let offset = U256::from(self.source.draw_byte()?);
        Ok((BLS_MODULUS + offset).to_be_bytes())
    }

    fn draw_member(&mut self) -> Result<[u8; 48], FillerError> {
        let element: GroupElement = CurveGroupSampler::sample_member(&mut *self.source)?;
        trace!(?element, "sampled group element");
        Ok(element.encode())
    }
}

/// Turns a compressed point into an encoding no decoder accepts.
fn clear_compression_flag(point: &mut [u8; 48]) {
    point[0] &= 0x7f;
}
