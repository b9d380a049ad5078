//! Arithmetic and branch-comparison logic.
//!
//! Results are computed combinationally at dispatch; the execution unit then
//! only counts the latency down before committing. All arithmetic is 32-bit
//! unsigned and wrapping.

use crate::config::LatencyConfig;
use crate::isa::Opcode;

/// Outcome of a jump comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchOutcome {
    /// The compared register equalled the immediate.
    pub taken: bool,
    /// Amount added to the program counter at commit.
    ///
    /// The counter already points one past the jump when it commits, so a
    /// taken jump adds `offset - 1` and a fall-through adds 0.
    pub pc_delta: isize,
}

/// Value-level result of an operation, independent of any timing model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Value broadcast and written to the destination register.
    pub result: u32,
    /// A division whose divisor was zero; the dividend passed through.
    pub div_by_zero: bool,
    /// Set for jumps.
    pub branch: Option<BranchOutcome>,
}

/// What an execution unit latches when it accepts an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Execution {
    /// Value broadcast and written to the destination register.
    pub result: u32,
    /// Countdown before commit.
    pub latency: u32,
    /// Set for jumps.
    pub branch: Option<BranchOutcome>,
}

/// Computes `op` over resolved operands `a` (vj) and `b` (vk).
///
/// For a load, `a` is the immediate. For a jump, `a` is the compared register
/// and `b` the immediate. Division by zero is not a fault: the dividend passes
/// through unchanged.
pub fn evaluate(op: Opcode, a: u32, b: u32, offset: i32) -> Outcome {
    let (result, div_by_zero, branch) = match op {
        Opcode::Add => (a.wrapping_add(b), false, None),
        Opcode::Sub => (a.wrapping_sub(b), false, None),
        Opcode::Mul => (a.wrapping_mul(b), false, None),
        Opcode::Div => match a.checked_div(b) {
            Some(q) => (q, false, None),
            None => (a, true, None),
        },
        Opcode::Load => (a, false, None),
        Opcode::Jump => {
            let taken = a == b;
            let (result, pc_delta) = if taken {
                (offset.wrapping_sub(1) as u32, offset as isize - 1)
            } else {
                (0, 0)
            };
            (result, false, Some(BranchOutcome { taken, pc_delta }))
        }
    };
    Outcome {
        result,
        div_by_zero,
        branch,
    }
}

/// [`evaluate`], plus the countdown an execution unit runs before committing.
///
/// A division by zero takes the short `div_by_zero` latency.
pub fn execute(op: Opcode, a: u32, b: u32, offset: i32, latency: &LatencyConfig) -> Execution {
    let outcome = evaluate(op, a, b, offset);
    Execution {
        result: outcome.result,
        latency: latency.of(op, outcome.div_by_zero),
        branch: outcome.branch,
    }
}
