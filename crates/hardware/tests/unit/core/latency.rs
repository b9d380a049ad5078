//! Dispatch latency law: a unit dispatched at `C` with latency `L` commits at `C + L + 1`.

use rstest::rstest;

use crate::common::harness::{TestContext, timed};

#[rstest]
#[case::add("ADD,R1,R0,R0", 3)]
#[case::sub("SUB,R1,R0,R0", 3)]
#[case::mul("MUL,R1,R0,R0", 4)]
#[case::div_by_zero("DIV,R1,R0,R0", 1)]
#[case::load("LD,R1,5", 3)]
#[case::jump_not_taken("JUMP,1,R0,1", 1)]
fn test_default_latency(#[case] src: &str, #[case] latency: u64) {
    let report = TestContext::new().run(src);
    assert_eq!(report.timing[0], timed(1, 1 + latency, 2 + latency));
    assert_eq!(report.cycles, 2 + latency);
}

#[rstest]
fn test_configured_add_latency(#[values(1, 2, 7)] latency: u32) {
    let ctx = TestContext::new().with(|c| c.latency.add_sub = latency);
    let report = ctx.run("ADD,R1,R0,R0");
    let l = u64::from(latency);
    assert_eq!(report.timing[0], timed(1, 1 + l, 2 + l));
}

#[rstest]
fn test_divide_latency_starts_at_dispatch(#[values(3, 8)] load: u32) {
    // The divide cannot dispatch until its second operand is broadcast.
    let ctx = TestContext::new().with(|c| c.latency.load = load);
    let report = ctx.run("LD,R2,6\nLD,R3,3\nDIV,R1,R2,R3\n");

    let dispatch = 2 + u64::from(load) + 1;
    assert_eq!(report.timing[1].write_result, Some(dispatch));
    assert_eq!(report.timing[2], timed(3, dispatch + 4, dispatch + 5));
    assert_eq!(report.registers.read(1), 2);
}

#[test]
fn test_operands_broadcast_in_commit_cycle_dispatch_same_cycle() {
    let report = TestContext::new().run("LD,R1,1\nADD,R2,R1,R1\n");
    // Load commits at 5; the add dispatches at 5 and commits at 9.
    assert_eq!(report.timing[1], timed(2, 8, 9));
}
