use crate::{GeneratorConfig, PointEvaluationInput};
use filler::{FillerError, RandomSource};
use program::{CallInjector, CallKind, CallRequest, ExecutionMemory};
use tracing::debug;

/// Memory offset the payload is written to.
pub const PAYLOAD_OFFSET: u64 = 0;

/// Wraps payloads into calls and hands them to the program.
#[derive(Clone, Copy, Debug)]
pub struct CallRequestAssembler<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> CallRequestAssembler<'a> {
    /// Creates an assembler targeting the configured precompile.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Draws gas, value and call kind, in that order, and describes a call
    /// reading `input` from [`PAYLOAD_OFFSET`] and discarding the output.
    pub fn assemble<R: RandomSource + ?Sized>(
        &self,
        input: &PointEvaluationInput,
        source: &mut R,
    ) -> Result<CallRequest, FillerError> {
        // A bound of zero draws the full range, which is `0..=u64::MAX`.
        let gas = source.draw_bounded(self.config.max_gas.checked_add(1).unwrap_or(0))?;
        let value = source.draw_u256()?;
        let kind = CallKind::from_selector(source.draw_byte()?);
        Ok(CallRequest {
            kind,
            gas,
            address: self.config.precompile_address,
            value,
            input_offset: PAYLOAD_OFFSET,
            input_size: input.encode().len() as u64,
            output_offset: 0,
            output_size: 0,
        })
    }

    /// Writes the encoded payload into memory and emits the call.
    ///
    /// Anything previously stored at the payload range is overwritten.
    pub fn submit<P: ExecutionMemory + CallInjector + ?Sized>(
        input: &PointEvaluationInput,
        request: &CallRequest,
        program: &mut P,
    ) {
        debug!(
            kind = ?request.kind,
            gas = request.gas,
            address = %request.address,
            "emitting point evaluation call"
        );
        program.write(&input.encode(), request.input_offset);
        program.emit(request);
    }
}
