//! Fixed scenarios.

use pretty_assertions::assert_eq;

use crate::common::harness::{TestContext, timed};
use tomasim_core::core::pipeline::timing::InstructionTiming;

#[test]
fn test_dependent_add_waits_for_both_loads() {
    let report = TestContext::new().run("LD,R1,5\nLD,R2,3\nADD,R3,R1,R2\n");

    assert_eq!(
        report.timing,
        vec![timed(1, 4, 5), timed(2, 5, 6), timed(3, 9, 10)]
    );
    assert_eq!(report.registers.read(1), 5);
    assert_eq!(report.registers.read(2), 3);
    assert_eq!(report.registers.read(3), 8);
    assert_eq!(report.cycles, 10);
}

#[test]
fn test_taken_jump_skips_following_instruction() {
    let report = TestContext::new().run("LD,R1,1\nJUMP,1,R1,3\nADD,R2,R1,R1\n");

    // Jump waits on R1 (broadcast at 5), dispatches at 5, latency 1.
    assert_eq!(
        report.timing,
        vec![timed(1, 4, 5), timed(2, 6, 7), InstructionTiming::default()]
    );
    assert_eq!(report.registers.read(2), 0);
    assert_eq!(report.cycles, 7);
    assert_eq!(report.stats.branches_taken, 1);
}

#[test]
fn test_untaken_jump_falls_through() {
    let report = TestContext::new().run("LD,R1,2\nJUMP,1,R1,3\nADD,R2,R1,R1\n");

    // The add issues in the cycle the jump commits.
    assert_eq!(report.timing[1], timed(2, 6, 7));
    assert_eq!(report.timing[2], timed(7, 10, 11));
    assert_eq!(report.registers.read(2), 4);
    assert_eq!(report.stats.branches_not_taken, 1);
}

#[test]
fn test_backward_jump_loop() {
    // R1 counts down from 3 by R2 = 1; the jump leaves the loop once R1 hits 0.
    let src = "\
LD,R1,3
LD,R2,1
SUB,R1,R1,R2
JUMP,0,R1,2
JUMP,0,R0,-2
LD,R3,ff
";
    let report = TestContext::new().run(src);
    assert_eq!(report.registers.read(1), 0);
    assert_eq!(report.registers.read(3), 0xff);
    assert_eq!(report.stats.branches_taken, 3);
    assert_eq!(report.stats.branches_not_taken, 2);
}

#[test]
fn test_write_after_write_keeps_last_issued_value() {
    let ctx = TestContext::new().with(|c| c.latency.mul = 10);
    let report = ctx.run("LD,R2,2\nLD,R3,3\nMUL,R1,R2,R3\nADD,R4,R1,R1\nLD,R1,7\n");

    // The late MUL must not overwrite the newer load, but its reader still sees it.
    let mul = report.timing[2].write_result.unwrap();
    let load = report.timing[4].write_result.unwrap();
    assert!(load < mul);
    assert_eq!(report.registers.read(1), 7);
    assert_eq!(report.registers.read(4), 12);
}

#[test]
fn test_out_of_order_completion() {
    let ctx = TestContext::new().with(|c| c.latency.div = 20);
    let report = ctx.run("LD,R1,9\nLD,R2,3\nDIV,R3,R1,R2\nADD,R4,R0,R0\n");

    let div = report.timing[2].write_result.unwrap();
    let add = report.timing[3].write_result.unwrap();
    assert!(add < div);
    assert_eq!(report.registers.read(3), 3);
}

#[test]
fn test_division_by_zero_passes_dividend() {
    let report = TestContext::new().run("LD,R1,2a\nDIV,R2,R1,R5\n");

    // DIV dispatches at 5 when R1 arrives; latency 1.
    assert_eq!(report.timing[1], timed(2, 6, 7));
    assert_eq!(report.registers.read(2), 0x2a);
    assert_eq!(report.stats.div_by_zero, 1);
}

#[test]
fn test_register_zero_is_writable() {
    let report = TestContext::new().run("LD,R0,1\nADD,R1,R0,R0\n");
    assert_eq!(report.registers.read(0), 1);
    assert_eq!(report.registers.read(1), 2);
}

#[test]
fn test_wrapping_arithmetic() {
    let report = TestContext::new().run("LD,R1,ffffffff\nLD,R2,2\nADD,R3,R1,R2\nSUB,R4,R0,R2\n");
    assert_eq!(report.registers.read(3), 1);
    assert_eq!(report.registers.read(4), 0xffff_fffe);
}

#[test]
fn test_retirements_follow_commit_order() {
    let ctx = TestContext::new().with(|c| c.latency.mul = 10);
    let report = ctx.run("MUL,R1,R0,R0\nLD,R2,4\n");
    let order: Vec<usize> = report.retired.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![1, 0]);
}
