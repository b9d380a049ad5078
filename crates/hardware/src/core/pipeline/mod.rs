//! Scheduling machinery.
//!
//! This module contains everything the cycle loop touches:
//! 1. **Stations:** The reservation-station pool and its operand slots.
//! 2. **Scoreboard:** The register status table used for renaming.
//! 3. **Timing:** Per-instruction issue/complete/write cycles.
//! 4. **Trace:** Per-cycle diagnostic snapshots.
//! 5. **Engine:** The backend trait and the two backends that implement it.

/// Execution backends (Tomasulo scheduler and reference interpreter).
pub mod backend;

/// Backend trait, selection and type erasure.
pub mod engine;

/// Register status table.
pub mod scoreboard;

/// Reservation stations.
pub mod station;

/// Per-instruction timing records.
pub mod timing;

/// Diagnostic snapshots.
pub mod trace;
