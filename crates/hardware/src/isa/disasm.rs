//! Instruction disassembler.
//!
//! Renders an [`Instruction`] back into the notation accepted by
//! [`decode_line`](crate::isa::decode::decode_line), for diagnostics and test
//! output.

use std::fmt;

use crate::isa::instruction::{ArithOp, Instruction};

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Arith { op, rd, rs1, rs2 } => write!(f, "{op},R{rd},R{rs1},R{rs2}"),
            Self::Load { rd, imm } => write!(f, "LD,R{rd},{imm:#x}"),
            Self::Jump { rs, imm, offset } if offset < 0 => {
                write!(f, "JUMP,{imm:#x},R{rs},-{:#x}", offset.unsigned_abs())
            }
            Self::Jump { rs, imm, offset } => write!(f, "JUMP,{imm:#x},R{rs},{offset:#x}"),
        }
    }
}
