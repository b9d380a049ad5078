//! Plain-text run reports.
//!
//! Each writer emits one fixed line format, so logs from different runs
//! can be compared with `diff`.

use std::io::{self, Write};

use crate::common::RegisterFile;
use crate::core::pipeline::engine::Retirement;
use crate::core::pipeline::timing::InstructionTiming;

/// Writes `issue,exec_complete,write_result` per instruction, in program
/// order. Missing timestamps print as `0`.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_timing_log(w: &mut dyn Write, timing: &[InstructionTiming]) -> io::Result<()> {
    for t in timing {
        writeln!(
            w,
            "{},{},{}",
            t.issue.unwrap_or(0),
            t.exec_complete.unwrap_or(0),
            t.write_result.unwrap_or(0)
        )?;
    }
    Ok(())
}

/// Writes all 32 registers as `R[NN]=xxxxxxxx`.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_register_dump(w: &mut dyn Write, regs: &RegisterFile) -> io::Result<()> {
    regs.dump(w)
}

/// Writes one `CC: R[NN] = xxxxxxxx` line per retirement.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_retire_log(w: &mut dyn Write, retired: &[Retirement]) -> io::Result<()> {
    for r in retired {
        writeln!(w, "{:02}: R[{:02}] = {:08x}", r.cycle, r.dest, r.value)?;
    }
    Ok(())
}
