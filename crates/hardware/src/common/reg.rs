//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 committed
//! register values of the machine. It provides:
//! 1. **Storage:** 32 unsigned 32-bit registers, all initialised to zero.
//! 2. **Access:** Indexed reads and writes; register 0 is an ordinary register.
//! 3. **Observability:** Iteration and dumping of the full register state.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use super::constants::NUM_REGS;

/// Committed values of all architectural registers.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 32`; the decoder never produces such an index.
    #[inline]
    pub const fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a register.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Iterates over `(index, value)` pairs in register order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.regs.iter().copied().enumerate()
    }

    /// Returns the raw register values.
    pub const fn as_array(&self) -> &[u32; NUM_REGS] {
        &self.regs
    }

    /// Writes every register as `R[nn]=xxxxxxxx`, one per line.
    ///
    /// # Errors
    ///
    /// Propagates any error from the writer.
    pub fn dump(&self, w: &mut dyn Write) -> io::Result<()> {
        for (i, val) in self.iter() {
            writeln!(w, "R[{i:02}]={val:08x}")?;
        }
        Ok(())
    }
}

impl From<[u32; NUM_REGS]> for RegisterFile {
    fn from(regs: [u32; NUM_REGS]) -> Self {
        Self { regs }
    }
}

impl fmt::Debug for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only non-zero registers, to keep assertion diffs readable.
        f.debug_map()
            .entries(self.iter().filter(|&(_, v)| v != 0).map(|(i, v)| (format!("R{i}"), v)))
            .finish()
    }
}
