//! Tomasulo backend.
//!
//! Every cycle runs three phases in a fixed order:
//! 1. **Writeback** (`writeback.rs`): units count down, finished units commit,
//!    free their station and broadcast on the common data bus.
//! 2. **Issue** (`issue.rs`): the next instruction in program order takes a
//!    free station of its class and snapshots its operands through the
//!    register status table.
//! 3. **Dispatch** (`dispatch.rs`): idle units pick up the first ready station
//!    of their class.
//!
//! Issue stops while a jump is in flight; there is no speculation.

mod dispatch;
mod issue;
mod writeback;

use tracing::trace;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::engine::{ExecutionEngine, Retirement};
use crate::core::pipeline::scoreboard::RegisterStatusTable;
use crate::core::pipeline::station::StationPool;
use crate::core::pipeline::timing::TimingTable;
use crate::core::pipeline::trace::{Snapshot, StationView, UnitView};
use crate::core::units::UnitPool;
use crate::isa::Program;
use crate::stats::SimStats;

/// Cycle-driven Tomasulo scheduler.
#[derive(Debug)]
pub struct Scheduler {
    program: Program,
    stations: StationPool,
    units: UnitPool,
    status: RegisterStatusTable,
    timing: TimingTable,
    pc: usize,
    branch_stall: bool,
    cycle: u64,
    stats: SimStats,
    retired: Vec<Retirement>,
}

impl Scheduler {
    /// Creates a scheduler for `program` with pools and latencies from `config`.
    ///
    /// `config` is expected to have passed [`Config::validate`].
    pub fn new(program: Program, config: &Config) -> Self {
        let timing = TimingTable::new(program.len());
        Self {
            program,
            stations: StationPool::new(&config.stations),
            units: UnitPool::new(&config.units, config.latency),
            status: RegisterStatusTable::new(),
            timing,
            pc: 0,
            branch_stall: false,
            cycle: 0,
            stats: SimStats::default(),
            retired: Vec::new(),
        }
    }

    /// Index of the next instruction to issue.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Returns `true` while a jump is in flight.
    pub const fn branch_stalled(&self) -> bool {
        self.branch_stall
    }

    /// Reservation stations.
    pub const fn stations(&self) -> &StationPool {
        &self.stations
    }

    /// Execution units.
    pub const fn units(&self) -> &UnitPool {
        &self.units
    }

    /// Register status table.
    pub const fn status(&self) -> &RegisterStatusTable {
        &self.status
    }
}

impl ExecutionEngine for Scheduler {
    fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.cycle += 1;
        self.stats.cycles = self.cycle;
        trace!(cycle = self.cycle, pc = self.pc, "tick");

        self.writeback();
        self.issue();
        self.dispatch();
        true
    }

    /// Every instruction has issued or been jumped over, and every station
    /// has drained.
    fn is_done(&self) -> bool {
        self.pc >= self.program.len() && self.stations.is_empty()
    }

    fn cycle(&self) -> u64 {
        self.cycle
    }

    fn registers(&self) -> &RegisterFile {
        self.status.values()
    }

    fn retired(&self) -> &[Retirement] {
        &self.retired
    }

    fn stats(&self) -> &SimStats {
        &self.stats
    }

    fn timing(&self) -> Option<&TimingTable> {
        Some(&self.timing)
    }

    fn snapshot(&self) -> Option<Snapshot> {
        let stations = self
            .stations
            .iter_occupied()
            .map(|(tag, class, entry)| StationView { tag, class, entry: entry.clone() })
            .collect();
        let units = self
            .units
            .iter_busy()
            .map(|(id, class, flight)| UnitView { id, class, flight: flight.clone() })
            .collect();
        Some(Snapshot {
            cycle: self.cycle,
            stations,
            units,
            pending: self.status.iter_pending().collect(),
        })
    }
}
