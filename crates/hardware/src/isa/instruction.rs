//! Instruction records and functional classes.
//!
//! Instructions are produced by the decoder and never change afterwards. The
//! scheduler only needs three facts from each one: its flattened [`Opcode`],
//! the [`FuncClass`] of station and unit that may service it, and its
//! destination register, if any.

use serde::Serialize;

/// Two-source-register arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArithOp {
    /// `rd = rs1 + rs2` (wrapping).
    Add,
    /// `rd = rs1 - rs2` (wrapping).
    Sub,
    /// `rd = rs1 * rs2` (wrapping).
    Mul,
    /// `rd = rs1 / rs2`, or `rd = rs1` when `rs2` is zero.
    Div,
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Instruction {
    /// Register-register arithmetic.
    Arith {
        /// Operation to perform.
        op: ArithOp,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs1: usize,
        /// Second source register.
        rs2: usize,
    },
    /// Immediate load into a register.
    Load {
        /// Destination register.
        rd: usize,
        /// Value to load.
        imm: u32,
    },
    /// Conditional relative jump: when `reg[rs] == imm`, continue at
    /// `index_of_this_jump + offset`. Writes no register.
    Jump {
        /// Register compared against the immediate.
        rs: usize,
        /// Comparison value.
        imm: u32,
        /// Signed branch offset relative to the jump itself.
        offset: i32,
    },
}

/// Flattened operation kind, as held by stations and execution units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Opcode {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Immediate load.
    Load,
    /// Conditional jump.
    Jump,
}

/// Category of computation a reservation station / execution unit pair supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FuncClass {
    /// Adders: `ADD`, `SUB` and the `JUMP` comparison.
    AddSub,
    /// Multipliers: `MUL`, `DIV`.
    MulDiv,
    /// Load buffers: `LD`.
    LoadBuffer,
}

impl FuncClass {
    /// All classes, in pool layout order.
    pub const ALL: [Self; 3] = [Self::AddSub, Self::MulDiv, Self::LoadBuffer];
}

impl From<ArithOp> for Opcode {
    fn from(op: ArithOp) -> Self {
        match op {
            ArithOp::Add => Self::Add,
            ArithOp::Sub => Self::Sub,
            ArithOp::Mul => Self::Mul,
            ArithOp::Div => Self::Div,
        }
    }
}

impl Opcode {
    /// Functional class of stations and units that service this operation.
    pub const fn class(self) -> FuncClass {
        match self {
            Self::Add | Self::Sub | Self::Jump => FuncClass::AddSub,
            Self::Mul | Self::Div => FuncClass::MulDiv,
            Self::Load => FuncClass::LoadBuffer,
        }
    }

    /// Upper-case mnemonic used in diagnostic traces.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Load => "LOAD",
            Self::Jump => "JUMP",
        }
    }
}

impl Instruction {
    /// Flattened operation kind.
    pub fn opcode(&self) -> Opcode {
        match *self {
            Self::Arith { op, .. } => op.into(),
            Self::Load { .. } => Opcode::Load,
            Self::Jump { .. } => Opcode::Jump,
        }
    }

    /// Destination register, or `None` for a jump.
    pub const fn dest(&self) -> Option<usize> {
        match *self {
            Self::Arith { rd, .. } | Self::Load { rd, .. } => Some(rd),
            Self::Jump { .. } => None,
        }
    }

    /// Every register the instruction reads or writes, destination first.
    pub fn registers(&self) -> impl Iterator<Item = usize> {
        let regs = match *self {
            Self::Arith { rd, rs1, rs2, .. } => [Some(rd), Some(rs1), Some(rs2)],
            Self::Load { rd, .. } => [Some(rd), None, None],
            Self::Jump { rs, .. } => [Some(rs), None, None],
        };
        regs.into_iter().flatten()
    }

    /// Functional class this instruction issues into.
    pub fn class(&self) -> FuncClass {
        self.opcode().class()
    }

    /// Returns `true` for a jump.
    pub const fn is_jump(&self) -> bool {
        matches!(self, Self::Jump { .. })
    }
}
