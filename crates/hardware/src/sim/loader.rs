//! Program Loader.
//!
//! This module turns program text into a validated [`Program`]. It performs:
//! 1. **File loading:** Reads the program file from disk.
//! 2. **Decoding:** One instruction per non-blank line.
//! 3. **Validation:** Rejects jumps whose target lies before the first instruction.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::SimError;
use crate::isa::{Program, decode_program};

/// Decodes and validates program text.
///
/// # Errors
///
/// Returns [`SimError::Decode`] for the first malformed line and
/// [`SimError::Program`] if validation fails.
pub fn parse_program(text: &str) -> Result<Program, SimError> {
    let insts = decode_program(text)?;
    Ok(Program::new(insts)?)
}

/// Reads, decodes and validates the program file at `path`.
///
/// # Errors
///
/// Returns [`SimError::Io`] naming `path` if the file cannot be read, and
/// otherwise the errors of [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
    let program = parse_program(&text)?;
    debug!(path = %path.display(), instructions = program.len(), "loaded program");
    Ok(program)
}
