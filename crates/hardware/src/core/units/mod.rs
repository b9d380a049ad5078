//! Execution units and functional components.
//!
//! This module contains the execution-unit pool and the combinational logic
//! each unit applies when it accepts an operation.

/// Arithmetic and jump-comparison logic.
pub mod alu;

/// Execution unit pool: dispatch, countdown, commit.
pub mod exec;

pub use exec::{CommitEvent, ExecutionUnit, InFlight, UnitId, UnitPool};
