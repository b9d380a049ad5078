//! Reservation Station Pool.
//!
//! Holds issued-but-not-committed instructions together with the state of
//! their two source operands. It provides:
//! 1. **Allocation:** Lowest-index free station of the requested class.
//! 2. **Operand Capture:** Each operand is either a value or the tag of the station producing it.
//! 3. **Broadcast:** The common data bus resolves every operand waiting on a committing tag.
//! 4. **Selection:** Lowest-index ready, undispatched station of a class.
//!
//! A station's slot index is also its tag: other stations and the register
//! status table refer to a pending producer only by this index.

use std::fmt;

use serde::Serialize;

use crate::config::StationConfig;
use crate::isa::{FuncClass, Opcode};

/// Identity of a reservation station, used as the renaming tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StationTag(pub usize);

impl fmt::Display for StationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of one source operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Operand {
    /// Value resolved.
    Ready(u32),
    /// Waiting for the station with this tag to commit.
    Waiting(StationTag),
}

impl Operand {
    /// Resolved value, if any.
    #[inline]
    pub const fn value(self) -> Option<u32> {
        match self {
            Self::Ready(v) => Some(v),
            Self::Waiting(_) => None,
        }
    }

    /// Returns `true` once the value is known.
    #[inline]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Contents of an occupied station.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationEntry {
    /// Operation to perform.
    pub op: Opcode,
    /// Destination register; `None` for a jump.
    pub dest: Option<usize>,
    /// `vj/qj` and `vk/qk`.
    pub operands: [Operand; 2],
    /// Branch offset (jumps only).
    pub offset: i32,
    /// Set once an execution unit has taken this entry.
    pub dispatched: bool,
    /// Index of the originating instruction in the program.
    pub inst_index: usize,
}

impl StationEntry {
    /// Both operand values, once resolved.
    pub const fn ready_values(&self) -> Option<[u32; 2]> {
        match self.operands {
            [Operand::Ready(a), Operand::Ready(b)] => Some([a, b]),
            _ => None,
        }
    }
}

/// One reservation station slot.
#[derive(Clone, Debug)]
pub struct ReservationStation {
    /// Fixed functional class.
    pub class: FuncClass,
    /// Occupant, if any.
    pub entry: Option<StationEntry>,
}

/// The full set of reservation stations.
///
/// Slots are laid out class by class (`AddSub`, `MulDiv`, `LoadBuffer`), so
/// with the default sizes tags 0-5 are adders, 6-8 multipliers and 9-11 load
/// buffers.
#[derive(Clone, Debug)]
pub struct StationPool {
    stations: Vec<ReservationStation>,
}

impl StationPool {
    /// Creates an empty pool sized by `config`.
    pub fn new(config: &StationConfig) -> Self {
        let stations = FuncClass::ALL
            .into_iter()
            .flat_map(|class| {
                std::iter::repeat_n(ReservationStation { class, entry: None }, config.count(class))
            })
            .collect();
        Self { stations }
    }

    /// Total number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns `true` if no station is occupied.
    pub fn is_empty(&self) -> bool {
        self.stations.iter().all(|s| s.entry.is_none())
    }

    /// Number of occupied stations.
    pub fn occupied(&self) -> usize {
        self.stations.iter().filter(|s| s.entry.is_some()).count()
    }

    /// Places `entry` in the lowest-index free station of `class`.
    ///
    /// Returns `None` (and drops `entry`) when every station of the class is
    /// busy; the caller retries next cycle.
    pub fn allocate(&mut self, class: FuncClass, entry: StationEntry) -> Option<StationTag> {
        let (idx, slot) = self
            .stations
            .iter_mut()
            .enumerate()
            .find(|(_, s)| s.class == class && s.entry.is_none())?;
        slot.entry = Some(entry);
        Some(StationTag(idx))
    }

    /// Occupant of `tag`.
    pub fn get(&self, tag: StationTag) -> Option<&StationEntry> {
        self.stations.get(tag.0)?.entry.as_ref()
    }

    /// Mutable occupant of `tag`.
    pub fn get_mut(&mut self, tag: StationTag) -> Option<&mut StationEntry> {
        self.stations.get_mut(tag.0)?.entry.as_mut()
    }

    /// Class of the station at `tag`.
    pub fn class(&self, tag: StationTag) -> Option<FuncClass> {
        self.stations.get(tag.0).map(|s| s.class)
    }

    /// Common data bus: every operand waiting on `tag` becomes `Ready(value)`.
    pub fn mark_ready(&mut self, tag: StationTag, value: u32) {
        for entry in self.stations.iter_mut().filter_map(|s| s.entry.as_mut()) {
            for operand in &mut entry.operands {
                if *operand == Operand::Waiting(tag) {
                    *operand = Operand::Ready(value);
                }
            }
        }
    }

    /// Releases the station at `tag`.
    pub fn free(&mut self, tag: StationTag) {
        if let Some(slot) = self.stations.get_mut(tag.0) {
            debug_assert!(slot.entry.is_some(), "freeing idle station {tag}");
            slot.entry = None;
        }
    }

    /// Lowest-index occupied station of `class` that is undispatched and has
    /// both operands ready.
    pub fn first_ready(&self, class: FuncClass) -> Option<StationTag> {
        self.stations
            .iter()
            .position(|s| {
                s.class == class
                    && s.entry
                        .as_ref()
                        .is_some_and(|e| !e.dispatched && e.ready_values().is_some())
            })
            .map(StationTag)
    }

    /// Iterates over occupied stations in tag order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (StationTag, FuncClass, &StationEntry)> {
        self.stations
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.entry.as_ref().map(|e| (StationTag(i), s.class, e)))
    }
}
