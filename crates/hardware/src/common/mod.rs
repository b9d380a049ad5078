//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Register count.
//! 2. **Error Handling:** Decode, program, configuration, and top-level simulation errors.
//! 3. **Register Management:** The architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::NUM_REGS;
pub use error::{ConfigError, DecodeError, DecodeErrorKind, ProgramError, SimError};
pub use reg::RegisterFile;
