//! tritvm micro-ISA
//!
//! Every instruction is two bytes: `[opcode, operand]`. The generator only
//! needs two of them, both addressing the single implicit register `r0`:
//!
//! | Opcode | Mnemonic  | Operand                       |
//! |--------|-----------|-------------------------------|
//! | `0x70` | `const4`  | constant, always in `0..=80`  |
//! | `0x60` | `pushout` | register index, always `0`    |
//!
//! `const4` loads a four-trit constant, so its operand domain is the 81
//! values `0..=80`; [`encode_constant`] reduces modulo 81 to stay inside it.

use std::fmt;

/// Number of distinct `const4` operands (3^4)
pub const CONST4_RANGE: u8 = 81;

/// The only register in the ISA
pub const REGISTER: u8 = 0;

/// Size of one encoded instruction in bytes
pub const INSTRUCTION_BYTES: usize = 2;

/// tritvm opcodes emitted by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Opcode {
    /// Load constant into r0
    /// Bytes: 0x70 [value % 81]
    const4,

    /// Output r0 as the next pixel
    /// Bytes: 0x60 0x00
    pushout,
}

impl Opcode {
    /// Encoded opcode byte
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::const4 => 0x70,
            Self::pushout => 0x60,
        }
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::const4 => "const4",
            Self::pushout => "pushout",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// One two-byte tritvm instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    operand: u8,
}

impl Instruction {
    /// `pushout r0`
    pub const PUSHOUT: Self = Self {
        opcode: Opcode::pushout,
        operand: REGISTER,
    };

    /// Instruction opcode
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Raw operand byte
    pub fn operand(&self) -> u8 {
        self.operand
    }

    /// Wire encoding `[opcode, operand]`
    pub const fn to_bytes(self) -> [u8; INSTRUCTION_BYTES] {
        [self.opcode.to_byte(), self.operand]
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode {
            Opcode::const4 => write!(f, "const4 r{}, {}", REGISTER, self.operand),
            Opcode::pushout => write!(f, "pushout r{}", self.operand),
        }
    }
}

/// Build `const4 r0, value`
///
/// The operand is `value % 81`, so it always lies in `0..=80` whatever the
/// input. Callers never rely on byte truncation to keep it in range.
pub const fn encode_constant(value: u8) -> Instruction {
    Instruction {
        opcode: Opcode::const4,
        operand: value % CONST4_RANGE,
    }
}
