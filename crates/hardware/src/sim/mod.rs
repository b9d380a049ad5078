//! Simulation driver, program loading and report output.
//!
//! Provides the [`Simulator`] run loop, helpers that turn program files into
//! validated [`Program`](crate::isa::Program)s, and the writers that render a
//! finished run in the plain-text formats of the command-line tool.

pub mod loader;
pub mod report;
pub mod simulator;

pub use loader::{load_program, parse_program};
pub use simulator::{RunReport, Simulator};
