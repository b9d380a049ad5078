//! In-order reference interpreter.
//!
//! One instruction per cycle, strictly in program order, with no renaming and
//! no latency model. A jump occupies its cycle but retires nothing.

use tracing::debug;

use crate::common::RegisterFile;
use crate::core::pipeline::engine::{ExecutionEngine, Retirement};
use crate::core::units::alu;
use crate::isa::{Instruction, Program};
use crate::stats::SimStats;

/// Reference interpreter.
#[derive(Debug)]
pub struct InOrderEngine {
    program: Program,
    regs: RegisterFile,
    pc: usize,
    cycle: u64,
    stats: SimStats,
    retired: Vec<Retirement>,
}

impl InOrderEngine {
    /// Creates an interpreter positioned at the first instruction.
    pub fn new(program: Program) -> Self {
        Self {
            program,
            regs: RegisterFile::new(),
            pc: 0,
            cycle: 0,
            stats: SimStats::default(),
            retired: Vec::new(),
        }
    }

    /// Index of the next instruction to execute.
    pub const fn pc(&self) -> usize {
        self.pc
    }
}

impl ExecutionEngine for InOrderEngine {
    fn tick(&mut self) -> bool {
        let index = self.pc;
        let Some(&inst) = self.program.get(index) else {
            return false;
        };
        self.cycle += 1;
        self.stats.cycles = self.cycle;
        self.stats.instructions_issued += 1;

        let (a, b, offset) = match inst {
            Instruction::Arith { rs1, rs2, .. } => (self.regs.read(rs1), self.regs.read(rs2), 0),
            Instruction::Load { imm, .. } => (imm, 0, 0),
            Instruction::Jump { rs, imm, offset } => (self.regs.read(rs), imm, offset),
        };
        let op = inst.opcode();
        let outcome = alu::evaluate(op, a, b, offset);
        self.stats.record_commit(op);
        self.pc += 1;

        if let Some(branch) = outcome.branch {
            self.pc = self.pc.saturating_add_signed(branch.pc_delta);
            self.stats.record_branch(branch.taken);
        }
        if outcome.div_by_zero {
            self.stats.div_by_zero += 1;
        }
        if let Some(rd) = inst.dest() {
            self.regs.write(rd, outcome.result);
            self.retired.push(Retirement {
                cycle: self.cycle,
                index,
                dest: rd,
                value: outcome.result,
            });
        }
        debug!(cycle = self.cycle, index, inst = %inst, pc = self.pc, "execute");
        true
    }

    fn is_done(&self) -> bool {
        self.pc >= self.program.len()
    }

    fn cycle(&self) -> u64 {
        self.cycle
    }

    fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    fn retired(&self) -> &[Retirement] {
        &self.retired
    }

    fn stats(&self) -> &SimStats {
        &self.stats
    }
}
