//! Register Status Table.
//!
//! Maps each architectural register to its committed value and the tag of
//! its latest in-flight producer, or `None` if the committed value is
//! current. Issue snapshots operands from here, and writeback commits
//! through it.

use crate::common::{NUM_REGS, RegisterFile};
use crate::core::pipeline::station::{Operand, StationTag};

/// Committed register values plus the pending-writer tag of each register.
#[derive(Clone, Debug, Default)]
pub struct RegisterStatusTable {
    values: RegisterFile,
    pending: [Option<StationTag>; NUM_REGS],
}

impl RegisterStatusTable {
    /// Create a table with all registers zero and no pending writers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Operand snapshot for `reg`: its committed value if nothing is in
    /// flight for it, otherwise the tag of the pending writer.
    pub const fn read(&self, reg: usize) -> Operand {
        match self.pending[reg] {
            Some(tag) => Operand::Waiting(tag),
            None => Operand::Ready(self.values.read(reg)),
        }
    }

    /// Record `tag` as the pending writer of `reg`, replacing any older claim.
    pub const fn claim(&mut self, reg: usize, tag: StationTag) {
        self.pending[reg] = Some(tag);
    }

    /// Commit `value` to `reg`, but ONLY if `tag` is still its pending writer.
    ///
    /// An older instruction completing after a newer one has claimed the same
    /// register must not clobber it (WAW). Returns whether the write happened.
    pub fn commit_if_current(&mut self, reg: usize, tag: StationTag, value: u32) -> bool {
        if self.pending[reg] != Some(tag) {
            return false;
        }
        self.pending[reg] = None;
        self.values.write(reg, value);
        true
    }

    /// Pending writer of `reg`.
    pub const fn pending(&self, reg: usize) -> Option<StationTag> {
        self.pending[reg]
    }

    /// Iterates over `(register, tag)` for every register with a pending writer.
    pub fn iter_pending(&self) -> impl Iterator<Item = (usize, StationTag)> + '_ {
        self.pending
            .iter()
            .enumerate()
            .filter_map(|(reg, tag)| tag.map(|t| (reg, t)))
    }

    /// Committed register values.
    pub const fn values(&self) -> &RegisterFile {
        &self.values
    }
}
