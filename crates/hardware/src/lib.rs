//! Tomasulo scheduling simulator library.
//!
//! This crate implements a cycle-driven model of Tomasulo's algorithm over a
//! six-operation instruction set, with the following:
//! 1. **ISA:** Instruction records, a text decoder and disassembler, and validated programs.
//! 2. **Core:** Reservation stations, execution units, the register status table and the
//!    per-cycle writeback/issue/dispatch scheduler, plus an in-order reference interpreter.
//! 3. **Simulation:** Configuration, the run loop, program loading, reports and statistics.
//!
//! ```
//! use tomasim_core::{Config, Simulator, sim::parse_program};
//!
//! let program = parse_program("LD,R1,5\nLD,R2,3\nADD,R3,R1,R2\n").unwrap();
//! let mut sim = Simulator::new(program, &Config::default()).unwrap();
//! let report = sim.run(None).unwrap();
//! assert_eq!(report.registers.read(3), 8);
//! assert_eq!(report.cycles, 10);
//! ```

/// Common types and constants (registers, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Scheduler core (stations, units, renaming, backends).
pub mod core;
/// Instruction set (records, decoder, disassembler, programs).
pub mod isa;
/// Run loop, program loading and reports.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Error type returned by loading and running.
pub use crate::common::SimError;
