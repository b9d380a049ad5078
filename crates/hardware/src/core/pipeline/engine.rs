//! Execution engine traits and backend type erasure.
//!
//! This module defines the seam between the simulator and its backends:
//! 1. **`ExecutionEngine`:** one-cycle stepping plus read access to results.
//! 2. **`BackendType`:** configuration-level backend selection.
//! 3. **`EngineDispatch`:** enum dispatch for type-erased backend storage.

use serde::{Deserialize, Serialize};

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::backend::inorder::InOrderEngine;
use crate::core::pipeline::backend::o3::Scheduler;
use crate::core::pipeline::timing::TimingTable;
use crate::core::pipeline::trace::Snapshot;
use crate::isa::Program;
use crate::stats::SimStats;

/// Backend type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum BackendType {
    /// Reference interpreter: strict program order, one instruction per cycle.
    InOrder,
    /// Tomasulo scheduler (default).
    #[default]
    OutOfOrder,
}

/// A register-writing instruction whose result left the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Retirement {
    /// Cycle of the write.
    pub cycle: u64,
    /// Index of the instruction in the program.
    pub index: usize,
    /// Destination register.
    pub dest: usize,
    /// Value produced. Under Tomasulo this is reported even when a newer
    /// writer of `dest` kept the value out of the register file.
    pub value: u32,
}

/// A backend that executes a [`Program`] one cycle at a time.
pub trait ExecutionEngine {
    /// Runs one cycle. Returns `false`, doing nothing, once the program has drained.
    fn tick(&mut self) -> bool;

    /// Returns `true` once there is nothing left to execute.
    fn is_done(&self) -> bool;

    /// Number of the last cycle executed (0 before the first tick).
    fn cycle(&self) -> u64;

    /// Architectural register values.
    fn registers(&self) -> &RegisterFile;

    /// Retirements so far, in the order they happened.
    fn retired(&self) -> &[Retirement];

    /// Counters for the run so far.
    fn stats(&self) -> &SimStats;

    /// Per-instruction issue/complete/write timing, if the backend models it.
    fn timing(&self) -> Option<&TimingTable> {
        None
    }

    /// Diagnostic view of internal state, if the backend has any.
    fn snapshot(&self) -> Option<Snapshot> {
        None
    }
}

/// Type-erased backend.
#[derive(Debug)]
pub enum EngineDispatch {
    /// Reference interpreter.
    InOrder(Box<InOrderEngine>),
    /// Tomasulo scheduler.
    OutOfOrder(Box<Scheduler>),
}

impl EngineDispatch {
    /// Builds the backend selected by `config.general.backend`.
    pub fn new(program: Program, config: &Config) -> Self {
        match config.general.backend {
            BackendType::InOrder => Self::InOrder(Box::new(InOrderEngine::new(program))),
            BackendType::OutOfOrder => Self::OutOfOrder(Box::new(Scheduler::new(program, config))),
        }
    }

    /// Shared access to the backend.
    pub fn engine(&self) -> &dyn ExecutionEngine {
        match self {
            Self::InOrder(e) => e.as_ref(),
            Self::OutOfOrder(s) => s.as_ref(),
        }
    }

    /// Exclusive access to the backend.
    pub fn engine_mut(&mut self) -> &mut dyn ExecutionEngine {
        match self {
            Self::InOrder(e) => e.as_mut(),
            Self::OutOfOrder(s) => s.as_mut(),
        }
    }
}
