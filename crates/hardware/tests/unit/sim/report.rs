use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;
use tomasim_core::sim::report::{write_register_dump, write_retire_log, write_timing_log};

fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_timing_log_for_scenario() {
    let report = TestContext::new().run("LD,R1,5\nLD,R2,3\nADD,R3,R1,R2\n");
    let text = render(|w| write_timing_log(w, &report.timing));
    assert_eq!(text, "1,4,5\n2,5,6\n3,9,10\n");
}

#[test]
fn test_timing_log_for_skipped_instruction() {
    let report = TestContext::new().run("LD,R1,1\nJUMP,1,R1,3\nADD,R2,R1,R1\n");
    let text = render(|w| write_timing_log(w, &report.timing));
    assert_eq!(text, "1,4,5\n2,6,7\n0,0,0\n");
}

#[test]
fn test_register_dump_after_run() {
    let report = TestContext::new().run("LD,R1,5\nLD,R2,3\nADD,R3,R1,R2\n");
    let text = render(|w| write_register_dump(w, &report.registers));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(&lines[..4], ["R[00]=00000000", "R[01]=00000005", "R[02]=00000003", "R[03]=00000008"]);
}

#[test]
fn test_reference_retire_log() {
    let report = TestContext::new()
        .reference()
        .run("LD,R1,1\nJUMP,1,R1,2\nLD,R2,7\nADD,R3,R1,R1\n");
    let text = render(|w| write_retire_log(w, &report.retired));
    assert_eq!(text, "01: R[01] = 00000001\n03: R[03] = 00000002\n");
}
