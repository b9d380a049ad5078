//! Randomized properties.
//!
//! Programs use four registers, small immediates (so jump comparisons are
//! often equal) and forward jumps only, so every run drains.

use proptest::prelude::*;

use crate::common::harness::TestContext;
use tomasim_core::config::Config;
use tomasim_core::isa::{ArithOp, Instruction};

fn arith_op() -> impl Strategy<Value = ArithOp> {
    prop_oneof![
        Just(ArithOp::Add),
        Just(ArithOp::Sub),
        Just(ArithOp::Mul),
        Just(ArithOp::Div),
    ]
}

fn instruction() -> impl Strategy<Value = Instruction> {
    prop_oneof![
        3 => (0..4usize, 0..4u32).prop_map(|(rd, imm)| Instruction::Load { rd, imm }),
        4 => (arith_op(), 0..4usize, 0..4usize, 0..4usize)
            .prop_map(|(op, rd, rs1, rs2)| Instruction::Arith { op, rd, rs1, rs2 }),
        1 => (0..4usize, 0..3u32, 1..=3i32)
            .prop_map(|(rs, imm, offset)| Instruction::Jump { rs, imm, offset }),
    ]
}

fn program() -> impl Strategy<Value = Vec<Instruction>> {
    prop::collection::vec(instruction(), 1..24)
}

prop_compose! {
    fn small_machine()(
        stations in prop::array::uniform3(1..3usize),
        units in prop::array::uniform3(1..3usize),
        latencies in prop::array::uniform6(1..6u32),
    ) -> Config {
        let mut config = Config::default();
        [config.stations.add_sub, config.stations.mul_div, config.stations.load_buffer] = stations;
        [config.units.add_sub, config.units.mul_div, config.units.load_buffer] = units;
        [
            config.latency.add_sub,
            config.latency.mul,
            config.latency.div,
            config.latency.div_by_zero,
            config.latency.load,
            config.latency.jump,
        ] = latencies;
        config
    }
}

proptest! {
    #[test]
    fn property_final_registers_match_reference(insts in program(), config in small_machine()) {
        let tomasulo = TestContext::new().with(|c| *c = config).run_insts(insts.clone());
        let reference = TestContext::new().reference().run_insts(insts);
        prop_assert_eq!(tomasulo.registers, reference.registers);
    }

    #[test]
    fn property_timing_is_ordered(insts in program(), config in small_machine()) {
        let report = TestContext::new().with(|c| *c = config).run_insts(insts);
        for t in &report.timing {
            match (t.issue, t.exec_complete, t.write_result) {
                (Some(i), Some(e), Some(w)) => {
                    prop_assert!(i < e);
                    prop_assert_eq!(w, e + 1);
                }
                (None, None, None) => {}
                other => prop_assert!(false, "partially recorded timing {:?}", other),
            }
        }
    }

    #[test]
    fn property_issue_follows_program_order(insts in program(), config in small_machine()) {
        let report = TestContext::new().with(|c| *c = config).run_insts(insts);
        let issued: Vec<u64> = report.timing.iter().filter_map(|t| t.issue).collect();
        prop_assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn property_jump_blocks_issue_until_commit(insts in program(), config in small_machine()) {
        let report = TestContext::new().with(|c| *c = config).run_insts(insts.clone());
        for (j, inst) in insts.iter().enumerate() {
            if !inst.is_jump() {
                continue;
            }
            let (Some(jump_issue), Some(jump_write)) =
                (report.timing[j].issue, report.timing[j].write_result)
            else {
                continue;
            };
            for t in &report.timing {
                if let Some(issue) = t.issue {
                    if issue > jump_issue {
                        prop_assert!(issue >= jump_write);
                    }
                }
            }
        }
    }

    #[test]
    fn property_every_issued_instruction_commits(insts in program()) {
        let report = TestContext::new().run_insts(insts);
        let issued = report.timing.iter().filter(|t| t.issue.is_some()).count() as u64;
        prop_assert_eq!(report.stats.instructions_issued, issued);
        prop_assert_eq!(report.stats.instructions_committed, issued);
    }
}
