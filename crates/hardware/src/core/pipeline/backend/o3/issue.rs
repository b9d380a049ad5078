//! Issue phase: move the next instruction into a reservation station.

use tracing::{debug, trace};

use crate::core::pipeline::station::{Operand, StationEntry};
use crate::isa::Instruction;

use super::Scheduler;

impl Scheduler {
    /// Issues at most one instruction, in program order.
    pub(super) fn issue(&mut self) {
        if self.branch_stall {
            if self.pc < self.program.len() {
                self.stats.stalls_branch += 1;
            }
            return;
        }
        let index = self.pc;
        let Some(&inst) = self.program.get(index) else {
            return;
        };

        let (operands, offset) = match inst {
            Instruction::Arith { rs1, rs2, .. } => {
                ([self.status.read(rs1), self.status.read(rs2)], 0)
            }
            Instruction::Load { imm, .. } => ([Operand::Ready(imm), Operand::Ready(0)], 0),
            Instruction::Jump { rs, imm, offset } => {
                ([self.status.read(rs), Operand::Ready(imm)], offset)
            }
        };
        let entry = StationEntry {
            op: inst.opcode(),
            dest: inst.dest(),
            operands,
            offset,
            dispatched: false,
            inst_index: index,
        };

        let Some(tag) = self.stations.allocate(inst.class(), entry) else {
            self.stats.stalls_structural += 1;
            trace!(cycle = self.cycle, index, class = ?inst.class(), "no free station");
            return;
        };

        if inst.is_jump() {
            self.branch_stall = true;
        }
        if let Some(rd) = inst.dest() {
            self.status.claim(rd, tag);
        }
        self.timing.record_issue(index, self.cycle);
        self.stats.instructions_issued += 1;
        self.pc += 1;
        debug!(cycle = self.cycle, index, tag = tag.0, inst = %inst, "issue");
    }
}
