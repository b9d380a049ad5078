//! Instruction set: records, text decoder, disassembler, and programs.
//!
//! The machine understands six operations: `ADD`, `SUB`, `MUL`, `DIV`
//! (register-register), `LD` (load immediate) and `JUMP` (compare a register
//! with an immediate and branch relative to the jump when equal).

/// Instruction records, opcodes and functional classes.
pub mod instruction;

/// Text decoder for the comma-separated instruction notation.
pub mod decode;

/// Rendering instructions back into text.
pub mod disasm;

/// Validated instruction sequences.
pub mod program;

pub use decode::{decode_line, decode_program};
pub use instruction::{ArithOp, FuncClass, Instruction, Opcode};
pub use program::Program;
