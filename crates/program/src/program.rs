use crate::{
    opcode::{self, push_opcode},
    CallInjector, CallRequest, ExecutionMemory,
};
use primitives::{Address, Bytes, U256};

/// Legacy EVM bytecode under construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    code: Vec<u8>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generated code so far.
    #[inline]
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Length of the generated code.
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Returns `true` if nothing has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Consumes the program and returns its bytecode.
    pub fn into_bytes(self) -> Bytes {
        self.code.into()
    }

    /// Appends a bare opcode.
    pub fn op(&mut self, opcode: u8) -> &mut Self {
        self.code.push(opcode);
        self
    }

    /// Pushes a big-endian value with the narrowest `PUSHn` that holds it.
    ///
    /// Zero is pushed as `PUSH1 0x00`.
    ///
    /// # Panics
    ///
    /// Panics if the value does not fit in 32 bytes.
    pub fn push(&mut self, value: &[u8]) -> &mut Self {
        let start = value
            .iter()
            .position(|byte| *byte != 0)
            .unwrap_or(value.len().saturating_sub(1));
        let value = if value.is_empty() { &[0u8][..] } else { &value[start..] };
        assert!(value.len() <= 32, "value too big for PUSH32");

        self.code.push(push_opcode(value.len()));
        self.code.extend_from_slice(value);
        self
    }

    /// Pushes an integer.
    pub fn push_u64(&mut self, value: u64) -> &mut Self {
        self.push(&value.to_be_bytes())
    }

    /// Pushes a 256-bit integer.
    pub fn push_u256(&mut self, value: U256) -> &mut Self {
        self.push(&value.to_be_bytes::<32>())
    }

    /// Pushes an address.
    pub fn push_address(&mut self, address: Address) -> &mut Self {
        self.push(address.as_slice())
    }

    /// Stores `data` in memory starting at `offset`.
    ///
    /// Whole words go through `MSTORE`, a trailing partial word byte by byte
    /// through `MSTORE8`.
    pub fn mstore(&mut self, data: &[u8], offset: u64) -> &mut Self {
        let mut chunks = data.chunks_exact(32);
        let mut cursor = offset;
        for word in chunks.by_ref() {
            self.push(word).push_u64(cursor).op(opcode::MSTORE);
            cursor += 32;
        }
        for byte in chunks.remainder() {
            self.push(&[*byte]).push_u64(cursor).op(opcode::MSTORE8);
            cursor += 1;
        }
        self
    }

    /// Emits the operands and instruction for `request`.
    ///
    /// The success flag is left on the stack.
    pub fn call(&mut self, request: &CallRequest) -> &mut Self {
        self.push_u64(request.output_size)
            .push_u64(request.output_offset)
            .push_u64(request.input_size)
            .push_u64(request.input_offset);
        if request.kind.transfers_value() {
            self.push_u256(request.value);
        }
        self.push_address(request.address)
            .push_u64(request.gas)
            .op(request.kind.opcode())
    }
}

impl ExecutionMemory for Program {
    fn write(&mut self, data: &[u8], offset: u64) {
        self.mstore(data, offset);
    }
}

impl CallInjector for Program {
    fn emit(&mut self, request: &CallRequest) {
        self.call(request);
    }
}

impl From<Program> for Bytes {
    fn from(program: Program) -> Self {
        program.into_bytes()
    }
}
