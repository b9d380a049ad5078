//! Simulator: owns the configured backend and drives it to completion.

use std::io::Write;

use serde::Serialize;
use tracing::info;

use crate::common::{ConfigError, RegisterFile, SimError};
use crate::config::Config;
use crate::core::pipeline::engine::{EngineDispatch, ExecutionEngine, Retirement};
use crate::core::pipeline::timing::InstructionTiming;
use crate::isa::Program;
use crate::stats::SimStats;

/// Everything a finished run produced.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    /// Cycles executed.
    pub cycles: u64,
    /// Final architectural registers.
    pub registers: RegisterFile,
    /// Per-instruction timing in program order. Empty for the reference
    /// interpreter, which has no timing model.
    pub timing: Vec<InstructionTiming>,
    /// Retirements in the order they happened.
    pub retired: Vec<Retirement>,
    /// Run counters.
    pub stats: SimStats,
}

/// Top-level simulator: a backend plus run limits.
#[derive(Debug)]
pub struct Simulator {
    engine: EngineDispatch,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Validates `config` and builds the backend it selects.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by [`Config::validate`].
    pub fn new(program: Program, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            engine: EngineDispatch::new(program, config),
            max_cycles: config.general.max_cycles,
        })
    }

    /// The underlying backend.
    pub fn engine(&self) -> &dyn ExecutionEngine {
        self.engine.engine()
    }

    /// Advances one cycle. Returns `false` once the program has drained.
    pub fn tick(&mut self) -> bool {
        self.engine.engine_mut().tick()
    }

    /// Runs until the program drains.
    ///
    /// When `trace` is supplied, the backend's snapshot is written to it at
    /// the end of every cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] if work remains once `max_cycles`
    /// have run, and [`SimError::Trace`] if the trace sink fails.
    pub fn run(&mut self, mut trace: Option<&mut dyn Write>) -> Result<RunReport, SimError> {
        loop {
            let engine = self.engine.engine_mut();
            if let Some(limit) = self.max_cycles {
                if engine.cycle() >= limit && !engine.is_done() {
                    return Err(SimError::CycleLimit { limit });
                }
            }
            if !engine.tick() {
                break;
            }
            if let Some(w) = trace.as_deref_mut() {
                if let Some(snapshot) = engine.snapshot() {
                    write!(w, "{snapshot}").map_err(SimError::Trace)?;
                }
            }
        }
        if let Some(w) = trace {
            w.flush().map_err(SimError::Trace)?;
        }

        let report = self.report();
        info!(
            cycles = report.cycles,
            committed = report.stats.instructions_committed,
            ipc = report.stats.ipc(),
            "run complete"
        );
        Ok(report)
    }

    /// Snapshot of the run so far.
    pub fn report(&self) -> RunReport {
        let engine = self.engine.engine();
        RunReport {
            cycles: engine.cycle(),
            registers: *engine.registers(),
            timing: engine
                .timing()
                .map(|t| t.iter().copied().collect())
                .unwrap_or_default(),
            retired: engine.retired().to_vec(),
            stats: engine.stats().clone(),
        }
    }
}
