//! Opcodes emitted by [`Program`](crate::Program).

/// Stores a word in memory.
pub const MSTORE: u8 = 0x52;
/// Stores a byte in memory.
pub const MSTORE8: u8 = 0x53;
/// Pushes a 1-byte immediate.
pub const PUSH1: u8 = 0x60;
/// Pushes a 32-byte immediate.
pub const PUSH32: u8 = 0x7f;
/// Message call.
pub const CALL: u8 = 0xf1;
/// Message call into this account with the callee's code.
pub const CALLCODE: u8 = 0xf2;
/// Message call keeping the current sender and value.
pub const DELEGATECALL: u8 = 0xf4;
/// Message call that cannot modify state.
pub const STATICCALL: u8 = 0xfa;

/// Returns the `PUSHn` opcode for an immediate of `width` bytes.
///
/// # Panics
///
/// Panics if `width` is not in `1..=32`.
#[inline]
pub const fn push_opcode(width: usize) -> u8 {
    assert!(width >= 1 && width <= 32, "invalid push width");
    PUSH1 + (width as u8 - 1)
}

/// Returns the immediate width of a `PUSHn` opcode.
#[inline]
pub const fn push_width(opcode: u8) -> Option<usize> {
    if opcode >= PUSH1 && opcode <= PUSH32 {
        Some((opcode - PUSH1) as usize + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_table() {
        for width in 1..=32 {
            assert_eq!(push_width(push_opcode(width)), Some(width));
        }
        assert_eq!(push_opcode(32), PUSH32);
        assert_eq!(push_width(MSTORE), None);
    }
}
