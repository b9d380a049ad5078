//! Processor core.
//!
//! This module contains the scheduling pipeline and the execution units it
//! drives.

/// Scheduling pipeline (stations, renaming, timing, backends).
pub mod pipeline;

/// Execution units and operation semantics.
pub mod units;

pub use self::pipeline::backend::inorder::InOrderEngine;
pub use self::pipeline::backend::o3::Scheduler;
pub use self::pipeline::engine::{BackendType, EngineDispatch, ExecutionEngine, Retirement};
