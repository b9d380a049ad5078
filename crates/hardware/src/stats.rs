//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for a run. It provides:
//! 1. **Cycle and IPC:** Total cycles, issued and committed instructions, and derived IPC/CPI.
//! 2. **Instruction mix:** Commits by operation class (add/sub, mul/div, load, jump).
//! 3. **Stalls:** Issue cycles lost to full station classes and to unresolved jumps.
//! 4. **Branches:** Taken and fall-through jumps.

use std::io::{self, Write};

use serde::Serialize;

use crate::isa::Opcode;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total cycles executed.
    pub cycles: u64,
    /// Instructions that entered a reservation station (or executed, in order).
    pub instructions_issued: u64,
    /// Instructions whose result was written.
    pub instructions_committed: u64,

    /// Committed `ADD`/`SUB`.
    pub inst_add_sub: u64,
    /// Committed `MUL`/`DIV`.
    pub inst_mul_div: u64,
    /// Committed `LD`.
    pub inst_load: u64,
    /// Committed `JUMP`.
    pub inst_jump: u64,
    /// Divisions that hit the zero-divisor passthrough.
    pub div_by_zero: u64,

    /// Jumps whose comparison held.
    pub branches_taken: u64,
    /// Jumps that fell through.
    pub branches_not_taken: u64,

    /// Cycles issue was blocked because every station of the class was busy.
    pub stalls_structural: u64,
    /// Cycles issue was blocked behind an unresolved jump.
    pub stalls_branch: u64,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "stalls", "branch"];

impl SimStats {
    /// Counts one committed operation of kind `op`.
    pub const fn record_commit(&mut self, op: Opcode) {
        self.instructions_committed += 1;
        match op {
            Opcode::Add | Opcode::Sub => self.inst_add_sub += 1,
            Opcode::Mul | Opcode::Div => self.inst_mul_div += 1,
            Opcode::Load => self.inst_load += 1,
            Opcode::Jump => self.inst_jump += 1,
        }
    }

    /// Counts one resolved jump.
    pub const fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Committed instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_committed as f64 / self.cycles as f64
        }
    }

    /// Writes only the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to write all sections (same as [`SimStats::print`]).
    ///
    /// # Errors
    ///
    /// Propagates any error from the writer.
    pub fn print_sections(&self, w: &mut dyn Write, sections: &[String]) -> io::Result<()> {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let committed = self.instructions_committed.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        writeln!(w, "==========================================================")?;
        writeln!(w, "TOMASULO SIMULATION STATISTICS")?;
        writeln!(w, "==========================================================")?;
        if want("summary") {
            writeln!(w, "sim_cycles               {}", self.cycles)?;
            writeln!(w, "sim_insts_issued         {}", self.instructions_issued)?;
            writeln!(w, "sim_insts_committed      {}", self.instructions_committed)?;
            writeln!(w, "sim_ipc                  {:.4}", self.ipc())?;
            writeln!(w, "sim_cpi                  {:.4}", cyc / committed)?;
            writeln!(w, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(w, "INSTRUCTION MIX")?;
            for (name, n) in [
                ("op.add_sub", self.inst_add_sub),
                ("op.mul_div", self.inst_mul_div),
                ("op.load", self.inst_load),
                ("op.jump", self.inst_jump),
            ] {
                writeln!(w, "  {name:<22} {n} ({:.2}%)", pct(n, committed))?;
            }
            writeln!(w, "  {:<22} {}", "op.div_by_zero", self.div_by_zero)?;
            writeln!(w, "----------------------------------------------------------")?;
        }
        if want("stalls") {
            writeln!(w, "ISSUE STALLS")?;
            writeln!(
                w,
                "  stalls.structural      {} ({:.2}%)",
                self.stalls_structural,
                pct(self.stalls_structural, cyc)
            )?;
            writeln!(
                w,
                "  stalls.branch          {} ({:.2}%)",
                self.stalls_branch,
                pct(self.stalls_branch, cyc)
            )?;
            writeln!(w, "----------------------------------------------------------")?;
        }
        if want("branch") {
            writeln!(w, "BRANCHES")?;
            writeln!(w, "  br.taken               {}", self.branches_taken)?;
            writeln!(w, "  br.not_taken           {}", self.branches_not_taken)?;
        }
        writeln!(w, "==========================================================")
    }

    /// Writes all statistics sections.
    ///
    /// # Errors
    ///
    /// Propagates any error from the writer.
    pub fn print(&self, w: &mut dyn Write) -> io::Result<()> {
        self.print_sections(w, &[])
    }
}
