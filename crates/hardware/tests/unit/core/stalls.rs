//! Structural and branch stalls.

use pretty_assertions::assert_eq;

use crate::common::harness::{TestContext, timed};

#[test]
fn test_full_station_class_blocks_issue() {
    let ctx = TestContext::new().with(|c| c.stations.load_buffer = 1);
    let report = ctx.run("LD,R1,1\nLD,R2,2\n");

    // The second load waits for the first to free its buffer at cycle 5.
    assert_eq!(report.timing, vec![timed(1, 4, 5), timed(5, 8, 9)]);
    assert_eq!(report.stats.stalls_structural, 3);
}

#[test]
fn test_stall_on_one_class_blocks_all_later_issue() {
    let ctx = TestContext::new().with(|c| c.stations.mul_div = 1);
    let report = ctx.run("MUL,R1,R0,R0\nMUL,R2,R0,R0\nADD,R3,R0,R0\n");

    // Issue is in order, so the add queues behind the second multiply.
    assert_eq!(report.timing[1].issue, Some(6));
    assert_eq!(report.timing[2].issue, Some(7));
}

#[test]
fn test_busy_units_leave_ready_stations_waiting() {
    let ctx = TestContext::new().with(|c| c.units.add_sub = 1);
    let report = ctx.run("ADD,R1,R0,R0\nADD,R2,R0,R0\n");

    // One adder: the second add dispatches when the first commits at 5.
    assert_eq!(report.timing, vec![timed(1, 4, 5), timed(2, 8, 9)]);
}

#[test]
fn test_lowest_unit_and_station_win() {
    let ctx = TestContext::new().with(|c| c.units.add_sub = 1);
    let (_, trace) = ctx.run_traced("ADD,R1,R0,R0\n");
    assert!(trace.contains("Ars 0: ADD vj=00000000 vk=00000000\n"));
    assert!(trace.contains("Add 0: ADD rd=01 vj=00000000 vk=00000000 cycles=3\n"));
}

#[test]
fn test_branch_stall_counted_per_blocked_cycle() {
    let report = TestContext::new().run("JUMP,1,R0,1\nLD,R1,1\n");

    // Jump commits at 3; cycle 2 is the only blocked issue slot.
    assert_eq!(report.stats.stalls_branch, 1);
    assert_eq!(report.timing[1].issue, Some(3));
}

#[test]
fn test_jump_occupies_add_sub_station() {
    let ctx = TestContext::new().with(|c| c.stations.add_sub = 1);
    let report = ctx.run("JUMP,1,R0,1\nADD,R1,R0,R0\n");
    assert_eq!(report.timing[1].issue, Some(3));
    assert_eq!(report.stats.stalls_structural, 0);
}
