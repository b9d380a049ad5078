//! Machine-wide constants.

/// Number of architectural registers.
pub const NUM_REGS: usize = 32;
