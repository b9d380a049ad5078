//! Per-instruction timing recorder.
//!
//! Records, for each instruction index, the cycle it was issued, the cycle
//! its execution completed, and the cycle its result was written. Each
//! timestamp is written at most once: when a loop re-issues an instruction,
//! the first iteration's cycles are kept.

use serde::Serialize;

/// The three timestamps of one instruction; `None` until recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InstructionTiming {
    /// Cycle the instruction entered a reservation station.
    pub issue: Option<u64>,
    /// Last cycle of execution (one before the write-result cycle).
    pub exec_complete: Option<u64>,
    /// Cycle the result was broadcast and the station freed.
    pub write_result: Option<u64>,
}

/// Timing for every instruction of a program, indexed by instruction index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TimingTable {
    entries: Vec<InstructionTiming>,
}

impl TimingTable {
    /// A table of `len` unrecorded entries.
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![InstructionTiming::default(); len],
        }
    }

    /// Records the issue cycle of `index` unless already recorded.
    pub fn record_issue(&mut self, index: usize, cycle: u64) {
        if let Some(entry) = self.entries.get_mut(index) {
            let _ = entry.issue.get_or_insert(cycle);
        }
    }

    /// Records a commit in `cycle`: execution completed in `cycle - 1`, the
    /// result was written in `cycle`. Ignored if already recorded.
    pub fn record_commit(&mut self, index: usize, cycle: u64) {
        if let Some(entry) = self.entries.get_mut(index) {
            if entry.exec_complete.is_none() {
                entry.exec_complete = Some(cycle - 1);
                entry.write_result = Some(cycle);
            }
        }
    }

    /// Timing of instruction `index`.
    pub fn get(&self, index: usize) -> Option<&InstructionTiming> {
        self.entries.get(index)
    }

    /// Number of instructions tracked.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table tracks no instructions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in program order.
    pub fn iter(&self) -> std::slice::Iter<'_, InstructionTiming> {
        self.entries.iter()
    }
}
