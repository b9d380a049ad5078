//! Validated, immutable instruction sequences.

use std::ops::Index;

use crate::common::NUM_REGS;
use crate::common::error::ProgramError;
use crate::isa::instruction::Instruction;

/// Target of a jump at `index` with `offset`, or `None` if it lies before index 0.
pub fn jump_target(index: usize, offset: i32) -> Option<usize> {
    index.checked_add_signed(offset as isize)
}

/// An ordered, finite, immutable instruction sequence ready for simulation.
///
/// Construction guarantees every register number indexes the register file
/// and every taken jump lands at a non-negative index, so the program counter
/// can always be represented as a `usize`. Targets past the end are allowed;
/// they simply stop further issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    insts: Vec<Instruction>,
}

impl Program {
    /// Validates and wraps a decoded instruction sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::RegisterOutOfRange`] for the first instruction
    /// naming a register past `R31`, or [`ProgramError::JumpBeforeStart`] for
    /// the first jump whose target would be negative.
    pub fn new(insts: Vec<Instruction>) -> Result<Self, ProgramError> {
        for (index, inst) in insts.iter().enumerate() {
            if let Some(reg) = inst.registers().find(|&r| r >= NUM_REGS) {
                return Err(ProgramError::RegisterOutOfRange { index, reg });
            }
            if let Instruction::Jump { offset, .. } = *inst {
                if jump_target(index, offset).is_none() {
                    return Err(ProgramError::JumpBeforeStart { index, offset });
                }
            }
        }
        Ok(Self { insts })
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.insts.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }

    /// Instruction at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.insts.get(index)
    }

    /// Iterates over the instructions in program order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.insts.iter()
    }

    /// The instructions as a slice.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.insts
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.insts[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
