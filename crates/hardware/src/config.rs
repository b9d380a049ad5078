//! Configuration system for the simulator.
//!
//! This module defines all configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline pool sizes and operation latencies.
//! 2. **Structures:** Hierarchical config for general options, station pools, unit pools, and latencies.
//! 3. **Validation:** Rejection of configurations the timing model cannot honour.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.
//! Every field is optional in JSON; missing fields take the defaults below.

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::core::pipeline::engine::BackendType;
use crate::isa::{FuncClass, Opcode};

/// Default configuration constants for the simulator.
mod defaults {
    /// Add/subtract reservation stations (also hold jumps).
    pub const ADD_SUB_STATIONS: usize = 6;

    /// Multiply/divide reservation stations.
    pub const MUL_DIV_STATIONS: usize = 3;

    /// Load buffers.
    pub const LOAD_BUFFERS: usize = 3;

    /// Adder execution units.
    pub const ADD_SUB_UNITS: usize = 3;

    /// Multiplier execution units.
    pub const MUL_DIV_UNITS: usize = 2;

    /// Load execution units.
    pub const LOAD_UNITS: usize = 2;

    /// Cycles an `ADD` or `SUB` counts down after dispatch.
    pub const ADD_SUB_LATENCY: u32 = 3;

    /// Cycles a `MUL` counts down after dispatch.
    pub const MUL_LATENCY: u32 = 4;

    /// Cycles a `DIV` counts down after dispatch.
    pub const DIV_LATENCY: u32 = 4;

    /// Cycles a `DIV` by zero counts down; it only passes the dividend through.
    pub const DIV_BY_ZERO_LATENCY: u32 = 1;

    /// Cycles an `LD` counts down after dispatch.
    pub const LOAD_LATENCY: u32 = 3;

    /// Cycles a `JUMP` comparison counts down after dispatch.
    pub const JUMP_LATENCY: u32 = 1;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Backend selection, tracing, cycle limit.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Reservation station counts per class.
    #[serde(default)]
    pub stations: StationConfig,
    /// Execution unit counts per class.
    #[serde(default)]
    pub units: UnitConfig,
    /// Per-operation latencies.
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// Run-wide options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Which backend executes the program.
    #[serde(default)]
    pub backend: BackendType,

    /// Emit a diagnostic snapshot every cycle.
    #[serde(default)]
    pub trace: bool,

    /// Abort the run once this many cycles have elapsed without draining.
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Reservation station counts.
#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    /// `AddSub` stations.
    #[serde(default = "StationConfig::default_add_sub")]
    pub add_sub: usize,

    /// `MulDiv` stations.
    #[serde(default = "StationConfig::default_mul_div")]
    pub mul_div: usize,

    /// `LoadBuffer` stations.
    #[serde(default = "StationConfig::default_load_buffer")]
    pub load_buffer: usize,
}

impl StationConfig {
    fn default_add_sub() -> usize {
        defaults::ADD_SUB_STATIONS
    }

    fn default_mul_div() -> usize {
        defaults::MUL_DIV_STATIONS
    }

    fn default_load_buffer() -> usize {
        defaults::LOAD_BUFFERS
    }

    /// Number of stations of the given class.
    pub const fn count(&self, class: FuncClass) -> usize {
        match class {
            FuncClass::AddSub => self.add_sub,
            FuncClass::MulDiv => self.mul_div,
            FuncClass::LoadBuffer => self.load_buffer,
        }
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            add_sub: defaults::ADD_SUB_STATIONS,
            mul_div: defaults::MUL_DIV_STATIONS,
            load_buffer: defaults::LOAD_BUFFERS,
        }
    }
}

/// Execution unit counts.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitConfig {
    /// Adder units.
    #[serde(default = "UnitConfig::default_add_sub")]
    pub add_sub: usize,

    /// Multiplier units.
    #[serde(default = "UnitConfig::default_mul_div")]
    pub mul_div: usize,

    /// Load units.
    #[serde(default = "UnitConfig::default_load_buffer")]
    pub load_buffer: usize,
}

impl UnitConfig {
    fn default_add_sub() -> usize {
        defaults::ADD_SUB_UNITS
    }

    fn default_mul_div() -> usize {
        defaults::MUL_DIV_UNITS
    }

    fn default_load_buffer() -> usize {
        defaults::LOAD_UNITS
    }

    /// Number of units of the given class.
    pub const fn count(&self, class: FuncClass) -> usize {
        match class {
            FuncClass::AddSub => self.add_sub,
            FuncClass::MulDiv => self.mul_div,
            FuncClass::LoadBuffer => self.load_buffer,
        }
    }
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            add_sub: defaults::ADD_SUB_UNITS,
            mul_div: defaults::MUL_DIV_UNITS,
            load_buffer: defaults::LOAD_UNITS,
        }
    }
}

/// Countdown, in cycles, an execution unit starts at when it accepts an operation.
///
/// A unit dispatched at cycle `C` with latency `L` commits at cycle `C + L + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LatencyConfig {
    /// `ADD` and `SUB`.
    #[serde(default = "LatencyConfig::default_add_sub")]
    pub add_sub: u32,

    /// `MUL`.
    #[serde(default = "LatencyConfig::default_mul")]
    pub mul: u32,

    /// `DIV` with a non-zero divisor.
    #[serde(default = "LatencyConfig::default_div")]
    pub div: u32,

    /// `DIV` with a zero divisor.
    #[serde(default = "LatencyConfig::default_div_by_zero")]
    pub div_by_zero: u32,

    /// `LD`.
    #[serde(default = "LatencyConfig::default_load")]
    pub load: u32,

    /// `JUMP`.
    #[serde(default = "LatencyConfig::default_jump")]
    pub jump: u32,
}

impl LatencyConfig {
    fn default_add_sub() -> u32 {
        defaults::ADD_SUB_LATENCY
    }

    fn default_mul() -> u32 {
        defaults::MUL_LATENCY
    }

    fn default_div() -> u32 {
        defaults::DIV_LATENCY
    }

    fn default_div_by_zero() -> u32 {
        defaults::DIV_BY_ZERO_LATENCY
    }

    fn default_load() -> u32 {
        defaults::LOAD_LATENCY
    }

    fn default_jump() -> u32 {
        defaults::JUMP_LATENCY
    }

    /// Latency of `op`; `div_by_zero` selects the fast division path.
    pub const fn of(&self, op: Opcode, div_by_zero: bool) -> u32 {
        match op {
            Opcode::Add | Opcode::Sub => self.add_sub,
            Opcode::Mul => self.mul,
            Opcode::Div if div_by_zero => self.div_by_zero,
            Opcode::Div => self.div,
            Opcode::Load => self.load,
            Opcode::Jump => self.jump,
        }
    }

    fn named(&self) -> [(&'static str, u32); 6] {
        [
            ("add_sub", self.add_sub),
            ("mul", self.mul),
            ("div", self.div),
            ("div_by_zero", self.div_by_zero),
            ("load", self.load),
            ("jump", self.jump),
        ]
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            add_sub: defaults::ADD_SUB_LATENCY,
            mul: defaults::MUL_LATENCY,
            div: defaults::DIV_LATENCY,
            div_by_zero: defaults::DIV_BY_ZERO_LATENCY,
            load: defaults::LOAD_LATENCY,
            jump: defaults::JUMP_LATENCY,
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every pool class is non-empty and every latency is at least one cycle.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for class in FuncClass::ALL {
            if self.stations.count(class) == 0 {
                return Err(ConfigError::NoStations(class));
            }
            if self.units.count(class) == 0 {
                return Err(ConfigError::NoUnits(class));
            }
        }
        if let Some((name, _)) = self.latency.named().into_iter().find(|&(_, l)| l == 0) {
            return Err(ConfigError::ZeroLatency(name));
        }
        Ok(())
    }
}
