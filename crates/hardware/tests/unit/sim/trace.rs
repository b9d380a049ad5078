use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

fn cycle_blocks(trace: &str) -> Vec<String> {
    trace
        .split("Cycle: ")
        .skip(1)
        .map(|block| format!("Cycle: {block}"))
        .collect()
}

#[test]
fn test_trace_layout_first_cycles() {
    let (_, trace) = TestContext::new().run_traced("LD,R1,5\nLD,R2,3\nADD,R3,R1,R2\n");
    let cycles = cycle_blocks(&trace);
    assert_eq!(cycles.len(), 10);

    assert_eq!(
        cycles[0],
        "Cycle: 1\n\
         Reservation Stations:\n\
         LB 9: LOAD vj=00000005\n\
         Execution Unit:\n\
         Load 5: LOAD rd=01 vj=00000005 cycles=3\n\
         Register Status:\n\
         R[01]=9 \n\n"
    );
    assert_eq!(
        cycles[2],
        "Cycle: 3\n\
         Reservation Stations:\n\
         Ars 0: ADD qj=00000009 qk=0000000a\n\
         LB 9: LOAD vj=00000005\n\
         LB 10: LOAD vj=00000003\n\
         Execution Unit:\n\
         Load 5: LOAD rd=01 vj=00000005 cycles=1\n\
         Load 6: LOAD rd=02 vj=00000003 cycles=2\n\
         Register Status:\n\
         R[01]=9 R[02]=10 R[03]=0 \n\n"
    );
}

#[test]
fn test_trace_shows_jump_without_destination() {
    let (_, trace) = TestContext::new().run_traced("JUMP,1,R0,1\n");
    assert!(trace.contains("Ars 0: JUMP vj=00000000 vk=00000001\n"));
    assert!(trace.contains("Add 0: JUMP vj=00000000 vk=00000001 cycles=1\n"));
}

#[test]
fn test_last_cycle_is_empty() {
    let (report, trace) = TestContext::new().run_traced("LD,R1,5\n");
    let blocks = cycle_blocks(&trace);
    let last = blocks.last().unwrap();
    assert_eq!(
        *last,
        format!(
            "Cycle: {}\nReservation Stations:\nExecution Unit:\nRegister Status:\n\n\n",
            report.cycles
        )
    );
}
