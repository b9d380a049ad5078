//! Execution Unit Pool.
//!
//! Each unit services one reservation station at a time. It provides:
//! 1. **Dispatch:** Latch a ready station's operands, compute the result, start the countdown.
//! 2. **Countdown:** One decrement per writeback phase while the counter is non-zero.
//! 3. **Commit:** When the counter is already zero, emit a [`CommitEvent`] and go idle.
//!
//! A unit dispatched at cycle `C` with latency `L` therefore commits at `C + L + 1`.

use serde::Serialize;

use crate::config::{LatencyConfig, UnitConfig};
use crate::core::pipeline::station::{StationEntry, StationTag};
use crate::core::units::alu::{self, BranchOutcome};
use crate::isa::{FuncClass, Opcode};

/// Identity of an execution unit (its slot index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UnitId(pub usize);

/// Operation in flight on a busy unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InFlight {
    /// Station being serviced; also the tag broadcast on commit.
    pub station: StationTag,
    /// Operation.
    pub op: Opcode,
    /// Resolved `vj`, `vk`.
    pub operands: [u32; 2],
    /// Precomputed result.
    pub result: u32,
    /// Jump outcome, for jumps.
    pub branch: Option<BranchOutcome>,
    /// Cycles left before commit.
    pub remaining: u32,
    /// Destination register, if the operation writes one.
    pub dest: Option<usize>,
    /// Index of the originating instruction.
    pub inst_index: usize,
}

/// Emitted by a unit in the writeback phase it commits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitEvent {
    /// Committing unit.
    pub unit: UnitId,
    /// Station that issued the operation; the tag to broadcast.
    pub station: StationTag,
    /// Operation.
    pub op: Opcode,
    /// Result value.
    pub result: u32,
    /// Destination register, if any.
    pub dest: Option<usize>,
    /// Index of the originating instruction.
    pub inst_index: usize,
    /// Jump outcome, for jumps.
    pub branch: Option<BranchOutcome>,
}

/// One execution unit.
#[derive(Clone, Debug)]
pub struct ExecutionUnit {
    /// Fixed functional class.
    pub class: FuncClass,
    /// Operation in flight, if busy.
    pub busy: Option<InFlight>,
}

/// The full set of execution units, laid out class by class like the stations.
#[derive(Clone, Debug)]
pub struct UnitPool {
    units: Vec<ExecutionUnit>,
    latency: LatencyConfig,
}

impl UnitPool {
    /// Creates an idle pool sized by `config`.
    pub fn new(config: &UnitConfig, latency: LatencyConfig) -> Self {
        let units = FuncClass::ALL
            .into_iter()
            .flat_map(|class| {
                std::iter::repeat_n(ExecutionUnit { class, busy: None }, config.count(class))
            })
            .collect();
        Self { units, latency }
    }

    /// Total number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the pool has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Class of unit `id`.
    pub fn class(&self, id: UnitId) -> Option<FuncClass> {
        self.units.get(id.0).map(|u| u.class)
    }

    /// Returns `true` if unit `id` exists and has nothing in flight.
    pub fn is_idle(&self, id: UnitId) -> bool {
        self.units.get(id.0).is_some_and(|u| u.busy.is_none())
    }

    /// Operation in flight on unit `id`.
    pub fn in_flight(&self, id: UnitId) -> Option<&InFlight> {
        self.units.get(id.0)?.busy.as_ref()
    }

    /// Starts `entry` (held by `station`) on unit `id` and marks it dispatched.
    ///
    /// Returns `false`, changing nothing, unless the unit is idle, the entry
    /// is undispatched, and both of its operands are ready.
    pub fn dispatch(&mut self, id: UnitId, station: StationTag, entry: &mut StationEntry) -> bool {
        let Some(unit) = self.units.get_mut(id.0) else {
            return false;
        };
        if unit.busy.is_some() || entry.dispatched {
            return false;
        }
        let Some([a, b]) = entry.ready_values() else {
            return false;
        };

        let exec = alu::execute(entry.op, a, b, entry.offset, &self.latency);
        entry.dispatched = true;
        unit.busy = Some(InFlight {
            station,
            op: entry.op,
            operands: [a, b],
            result: exec.result,
            branch: exec.branch,
            remaining: exec.latency,
            dest: entry.dest,
            inst_index: entry.inst_index,
        });
        true
    }

    /// Writeback-phase step for unit `id`.
    ///
    /// A busy unit whose countdown is already zero commits and goes idle;
    /// otherwise the countdown is decremented. Idle units do nothing.
    pub fn tick_and_maybe_commit(&mut self, id: UnitId) -> Option<CommitEvent> {
        let unit = self.units.get_mut(id.0)?;
        let flight = unit.busy.as_mut()?;
        if flight.remaining > 0 {
            flight.remaining -= 1;
            return None;
        }

        let done = unit.busy.take()?;
        Some(CommitEvent {
            unit: id,
            station: done.station,
            op: done.op,
            result: done.result,
            dest: done.dest,
            inst_index: done.inst_index,
            branch: done.branch,
        })
    }

    /// Iterates over busy units in index order.
    pub fn iter_busy(&self) -> impl Iterator<Item = (UnitId, FuncClass, &InFlight)> {
        self.units
            .iter()
            .enumerate()
            .filter_map(|(i, u)| u.busy.as_ref().map(|f| (UnitId(i), u.class, f)))
    }

    /// Unit ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = UnitId> + use<> {
        (0..self.units.len()).map(UnitId)
    }
}
