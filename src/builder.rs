//! Rust DSL for building tritvm byte-code
//!
//! Chainable builder whose methods are named after the mnemonics they emit.
//!
//! # Example
//!
//! ```rust
//! use triforce::builder::Program;
//!
//! // One bright pixel followed by one dark pixel
//! let bytecode = Program::new()
//!     .const4(80)     // load 80 into r0
//!     .pushout()      // emit r0
//!     .pixel(0)       // const4 r0, 0 + pushout r0
//!     .build();
//!
//! assert_eq!(bytecode, vec![0x70, 80, 0x60, 0, 0x70, 0, 0x60, 0]);
//! ```

use crate::opcode::{encode_constant, Instruction, INSTRUCTION_BYTES};

/// Byte-code program builder with chainable instruction methods
///
/// Only whole instructions are ever appended, so the buffer length is always
/// a multiple of [`INSTRUCTION_BYTES`].
#[derive(Debug, Clone, Default)]
pub struct Program {
    bytecode: Vec<u8>,
}

impl Program {
    /// Create a new empty program
    pub fn new() -> Self {
        Self {
            bytecode: Vec::new(),
        }
    }

    /// Create an empty program with room for `instructions` instructions
    pub fn with_capacity(instructions: usize) -> Self {
        Self {
            bytecode: Vec::with_capacity(instructions * INSTRUCTION_BYTES),
        }
    }

    /// Build and return the final bytecode
    pub fn build(self) -> Vec<u8> {
        self.bytecode
    }

    /// Append an already-encoded instruction
    pub fn push(mut self, instruction: Instruction) -> Self {
        self.bytecode.extend_from_slice(&instruction.to_bytes());
        self
    }

    /// Load constant into r0 (reduced modulo 81)
    /// Bytes: 0x70 [value % 81]
    pub fn const4(self, value: u8) -> Self {
        self.push(encode_constant(value))
    }

    /// Output r0 as the next pixel
    /// Bytes: 0x60 0x00
    pub fn pushout(self) -> Self {
        self.push(Instruction::PUSHOUT)
    }

    /// One pixel: `const4 r0, value` then `pushout r0`
    pub fn pixel(self, value: u8) -> Self {
        self.const4(value).pushout()
    }

    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.bytecode.len()
    }

    /// True if nothing has been emitted
    pub fn is_empty(&self) -> bool {
        self.bytecode.is_empty()
    }

    /// View the program as `[opcode, operand]` words
    pub fn instructions(&self) -> &[[u8; INSTRUCTION_BYTES]] {
        bytemuck::cast_slice(&self.bytecode)
    }
}
