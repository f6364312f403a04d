//! # pointfuzz
//!
//! Test input generator for the [`EIP-4844`](https://eips.ethereum.org/EIPS/eip-4844)
//! KZG point evaluation precompile.
//!
//! Each call to [`generate`] reads its decisions from a [`RandomSource`], builds a
//! [`PointEvaluationInput`], stores it in the program's memory and asks the
//! program to call the precompile with it. Payloads are either raw garbage or a
//! fixed structural case built around the BLS12-381 scalar field modulus; with
//! [`GeneratorConfig::extended_strategies`] also group-valid payloads and
//! payloads that break exactly one precondition.
//!
//! ```
//! use pointfuzz::{filler::Filler, program::Program};
//!
//! let mut source = Filler::new(vec![0u8; 64]);
//! let mut program = Program::new();
//! pointfuzz::generate(&mut source, &mut program).unwrap();
//! assert!(!program.is_empty());
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod assembler;
mod builder;
mod check;
mod config;
mod error;
mod field;
mod generator;
mod group;
mod input;

pub use filler::{self, FillerError, RandomSource};
pub use primitives;
pub use program::{self, CallInjector, CallKind, CallRequest, ExecutionMemory};

pub use assembler::{CallRequestAssembler, PAYLOAD_OFFSET};
pub use builder::{BlobPayloadBuilder, PayloadStrategy};
pub use check::{InputChecks, Invariant};
pub use config::{GeneratorConfig, DEFAULT_MAX_GAS};
pub use error::{GenerateError, InputLengthError};
pub use field::FieldElementSource;
pub use generator::{generate, Generator, TestCase};
pub use group::{is_g1_member, CurveGroupSampler, GroupElement, GroupElementKind};
pub use input::PointEvaluationInput;
