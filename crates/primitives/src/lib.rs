//! # pointfuzz-primitives
//!
//! Shared types and EIP-4844 point evaluation constants used across the workspace.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod eip4844;

pub use alloy_primitives::{self, address, hex, Address, Bytes, B256, U256};
pub use eip4844::*;

/// Converts a `u64` into the address occupying its last eight bytes.
///
/// Precompile addresses are small integers, this is how they are spelled.
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_evaluation_address() {
        assert_eq!(
            POINT_EVALUATION_ADDRESS,
            address!("0x000000000000000000000000000000000000000a")
        );
        assert_eq!(u64_to_address(0x14), Address::with_last_byte(0x14));
    }
}
