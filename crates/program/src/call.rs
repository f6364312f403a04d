use crate::opcode;
use primitives::{Address, U256};

/// Which call instruction performs a [`CallRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallKind {
    /// `CALL`
    Call,
    /// `CALLCODE`
    CallCode,
    /// `STATICCALL`
    StaticCall,
    /// `DELEGATECALL`
    DelegateCall,
}

impl CallKind {
    /// All kinds, in selector order.
    pub const ALL: [Self; 4] = [
        Self::Call,
        Self::CallCode,
        Self::StaticCall,
        Self::DelegateCall,
    ];

    /// Maps a drawn selector byte onto a kind.
    #[inline]
    pub const fn from_selector(selector: u8) -> Self {
        Self::ALL[(selector % 4) as usize]
    }

    /// Opcode of the instruction.
    #[inline]
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Call => opcode::CALL,
            Self::CallCode => opcode::CALLCODE,
            Self::StaticCall => opcode::STATICCALL,
            Self::DelegateCall => opcode::DELEGATECALL,
        }
    }

    /// Whether the instruction takes a value operand.
    #[inline]
    pub const fn transfers_value(self) -> bool {
        matches!(self, Self::Call | Self::CallCode)
    }
}

/// Description of one call into a target contract.
///
/// Input is read from `input_offset..input_offset + input_size` of execution
/// memory, output is written to `output_offset..output_offset + output_size`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallRequest {
    /// Call instruction to use.
    pub kind: CallKind,
    /// Gas forwarded to the callee.
    pub gas: u64,
    /// Callee address.
    pub address: Address,
    /// Value sent along. Ignored by kinds that do not transfer value.
    pub value: U256,
    /// Memory offset of the call input.
    pub input_offset: u64,
    /// Length of the call input.
    pub input_size: u64,
    /// Memory offset of the call output.
    pub output_offset: u64,
    /// Length of the call output.
    pub output_size: u64,
}
