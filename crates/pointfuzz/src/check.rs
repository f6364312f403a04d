//! Which precompile preconditions an input meets.
//!
//! Only the cheap checks are done. The opening proof itself is never verified.
use crate::{group::is_g1_member, PointEvaluationInput};
use primitives::{kzg_to_versioned_hash, BLS_MODULUS};

/// A precondition of the point evaluation precompile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Invariant {
    /// `z < BLS_MODULUS`.
    EvaluationPointInField,
    /// `y < BLS_MODULUS`.
    ExpectedOutputInField,
    /// `versioned_hash == kzg_to_versioned_hash(commitment)`.
    VersionedHashMatches,
    /// The commitment is a G1 point.
    CommitmentInGroup,
    /// The proof is a G1 point.
    ProofInGroup,
}

impl Invariant {
    /// All checked invariants, in selector order.
    pub const ALL: [Self; 5] = [
        Self::EvaluationPointInField,
        Self::ExpectedOutputInField,
        Self::VersionedHashMatches,
        Self::CommitmentInGroup,
        Self::ProofInGroup,
    ];

    /// Maps a drawn selector byte onto an invariant.
    #[inline]
    pub const fn from_selector(selector: u8) -> Self {
        Self::ALL[(selector % 5) as usize]
    }
}

/// Outcome of each check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputChecks {
    /// See [`Invariant::EvaluationPointInField`].
    pub evaluation_point_in_field: bool,
    /// See [`Invariant::ExpectedOutputInField`].
    pub expected_output_in_field: bool,
    /// See [`Invariant::VersionedHashMatches`].
    pub versioned_hash_matches: bool,
    /// See [`Invariant::CommitmentInGroup`].
    pub commitment_in_group: bool,
    /// See [`Invariant::ProofInGroup`].
    pub proof_in_group: bool,
}

impl InputChecks {
    /// Whether `invariant` holds.
    pub const fn holds(&self, invariant: Invariant) -> bool {
        match invariant {
            Invariant::EvaluationPointInField => self.evaluation_point_in_field,
            Invariant::ExpectedOutputInField => self.expected_output_in_field,
            Invariant::VersionedHashMatches => self.versioned_hash_matches,
            Invariant::CommitmentInGroup => self.commitment_in_group,
            Invariant::ProofInGroup => self.proof_in_group,
        }
    }

    /// Invariants that do not hold.
    pub fn violations(&self) -> Vec<Invariant> {
        Invariant::ALL
            .into_iter()
            .filter(|invariant| !self.holds(*invariant))
            .collect()
    }

    /// Whether every checked invariant holds.
    ///
    /// Such an input reaches the proof verification of the precompile.
    pub fn all_hold(&self) -> bool {
        Invariant::ALL.into_iter().all(|invariant| self.holds(invariant))
    }
}

impl PointEvaluationInput {
    /// Runs every check against this input.
    pub fn check(&self) -> InputChecks {
        InputChecks {
            evaluation_point_in_field: self.evaluation_point_value() < BLS_MODULUS,
            expected_output_in_field: self.expected_output_value() < BLS_MODULUS,
            versioned_hash_matches: kzg_to_versioned_hash(&self.commitment)
                == self.versioned_hash,
            commitment_in_group: is_g1_member(&self.commitment),
            proof_in_group: is_g1_member(&self.proof),
        }
    }

    /// Invariants this input violates.
    pub fn violations(&self) -> Vec<Invariant> {
        self.check().violations()
    }
}
