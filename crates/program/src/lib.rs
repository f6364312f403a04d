//! Program-side interfaces for pointfuzz.
//!
//! A generator never emits instructions itself. It writes its payload into
//! execution memory and describes the call it wants through a [`CallRequest`];
//! turning that into bytecode is the job of the [`CallInjector`].
//! [`Program`] implements both seams for plain legacy EVM bytecode.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod call;
pub mod opcode;
mod program;

pub use call::{CallKind, CallRequest};
pub use program::Program;

use auto_impl::auto_impl;

/// Execution memory of the program being generated.
#[auto_impl(&mut, Box)]
pub trait ExecutionMemory {
    /// Stores `data` at byte `offset`, overwriting whatever was there.
    fn write(&mut self, data: &[u8], offset: u64);
}

/// Turns a call descriptor into the instructions that perform the call.
#[auto_impl(&mut, Box)]
pub trait CallInjector {
    /// Emits the call described by `request`.
    fn emit(&mut self, request: &CallRequest);
}
