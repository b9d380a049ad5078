//! Error definitions for the simulator.
//!
//! This module defines every recoverable failure the simulator can report. It provides:
//! 1. **Decode Errors:** Malformed lines in the textual instruction notation.
//! 2. **Program Errors:** Instruction sequences that decode but cannot be run.
//! 3. **Configuration Errors:** Pool sizes or latencies the timing model cannot honour.
//! 4. **Simulation Errors:** The top-level error returned by loaders and `Simulator::run`.
//!
//! Structural and data hazards are never errors; they are stalls handled by the scheduler.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::isa::FuncClass;

/// The reason a single line failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// The mnemonic is not one of `ADD`, `SUB`, `MUL`, `DIV`, `LD`, `JUMP`.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// The mnemonic was recognised but took the wrong number of operands.
    #[error("`{mnemonic}` expects {expected} operands, found {found}")]
    OperandCount {
        /// Mnemonic as written in the source line.
        mnemonic: String,
        /// Number of operands the mnemonic takes.
        expected: usize,
        /// Number of operands present on the line.
        found: usize,
    },

    /// A register operand was not of the form `R<n>` with `n < 32`.
    #[error("invalid register `{0}`")]
    InvalidRegister(String),

    /// An immediate or offset field was not valid hexadecimal.
    #[error("invalid hexadecimal value `{0}`")]
    InvalidImmediate(String),
}

/// A decode failure tied to its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind} (in `{text}`)")]
pub struct DecodeError {
    /// 1-based line number of the offending line.
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
    /// What was wrong with it.
    #[source]
    pub kind: DecodeErrorKind,
}

/// A decoded instruction sequence that cannot be simulated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// A jump whose taken target lies before the first instruction.
    #[error("jump at index {index} with offset {offset} targets before the start of the program")]
    JumpBeforeStart {
        /// Index of the jump instruction.
        index: usize,
        /// Its signed branch offset.
        offset: i32,
    },

    /// An instruction names a register outside the register file.
    #[error("instruction at index {index} names register R{reg}, outside the register file")]
    RegisterOutOfRange {
        /// Index of the offending instruction.
        index: usize,
        /// The out-of-range register number.
        reg: usize,
    },
}

/// Invalid simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A reservation-station class was configured with no stations.
    #[error("reservation station count for {0:?} must be positive")]
    NoStations(FuncClass),

    /// An execution-unit class was configured with no units.
    #[error("execution unit count for {0:?} must be positive")]
    NoUnits(FuncClass),

    /// An operation latency of zero cycles.
    #[error("latency `{0}` must be at least one cycle")]
    ZeroLatency(&'static str),

    /// The JSON configuration could not be parsed.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program text failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded program failed validation.
    #[error(transparent)]
    Program(#[from] ProgramError),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The run did not drain within the configured cycle limit.
    #[error("simulation did not finish within {limit} cycles")]
    CycleLimit {
        /// The configured `max_cycles`.
        limit: u64,
    },

    /// The trace sink rejected a write.
    #[error("failed to write trace: {0}")]
    Trace(#[source] io::Error),

    /// A file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl SimError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
