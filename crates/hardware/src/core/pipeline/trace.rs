//! Per-cycle diagnostic snapshot.
//!
//! A [`Snapshot`] is a read-only copy of every occupied station, every busy
//! execution unit and every pending register at the end of a cycle. Its
//! `Display` output is the text trace layout:
//!
//! ```text
//! Cycle: 3
//! Reservation Stations:
//! Ars 0: ADD qj=00000009 qk=0000000a
//! LB 9: LOAD vj=00000005
//! Execution Unit:
//! Load 5: LOAD rd=01 vj=00000005 cycles=1
//! Register Status:
//! R[01]=9 R[03]=0
//! ```

use std::fmt;

use crate::core::pipeline::station::{Operand, StationEntry, StationTag};
use crate::core::units::{InFlight, UnitId};
use crate::isa::FuncClass;

/// Snapshot of one occupied station.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationView {
    /// Station tag.
    pub tag: StationTag,
    /// Station class.
    pub class: FuncClass,
    /// Station contents.
    pub entry: StationEntry,
}

/// Snapshot of one busy execution unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitView {
    /// Unit id.
    pub id: UnitId,
    /// Unit class.
    pub class: FuncClass,
    /// Operation in flight.
    pub flight: InFlight,
}

/// Scheduler state at the end of one cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Cycle number.
    pub cycle: u64,
    /// Occupied stations in tag order.
    pub stations: Vec<StationView>,
    /// Busy units in id order.
    pub units: Vec<UnitView>,
    /// `(register, pending tag)` for every renamed register.
    pub pending: Vec<(usize, StationTag)>,
}

const fn station_label(class: FuncClass) -> &'static str {
    match class {
        FuncClass::AddSub => "Ars",
        FuncClass::MulDiv => "Mrs",
        FuncClass::LoadBuffer => "LB",
    }
}

const fn unit_label(class: FuncClass) -> &'static str {
    match class {
        FuncClass::AddSub => "Add",
        FuncClass::MulDiv => "Mult",
        FuncClass::LoadBuffer => "Load",
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, name: char, operand: Operand) -> fmt::Result {
    match operand {
        Operand::Ready(v) => write!(f, " v{name}={v:08x}"),
        Operand::Waiting(tag) => write!(f, " q{name}={:08x}", tag.0),
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cycle: {}", self.cycle)?;

        writeln!(f, "Reservation Stations:")?;
        for s in &self.stations {
            write!(f, "{} {}: {}", station_label(s.class), s.tag, s.entry.op.name())?;
            write_operand(f, 'j', s.entry.operands[0])?;
            if s.class != FuncClass::LoadBuffer {
                write_operand(f, 'k', s.entry.operands[1])?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Execution Unit:")?;
        for u in &self.units {
            write!(f, "{} {}: {}", unit_label(u.class), u.id.0, u.flight.op.name())?;
            if let Some(rd) = u.flight.dest {
                write!(f, " rd={rd:02}")?;
            }
            write!(f, " vj={:08x}", u.flight.operands[0])?;
            if u.class != FuncClass::LoadBuffer {
                write!(f, " vk={:08x}", u.flight.operands[1])?;
            }
            writeln!(f, " cycles={}", u.flight.remaining)?;
        }

        writeln!(f, "Register Status:")?;
        for (reg, tag) in &self.pending {
            write!(f, "R[{reg:02}]={tag} ")?;
        }
        writeln!(f)?;
        writeln!(f)
    }
}
