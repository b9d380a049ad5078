use tomasim_core::Simulator;
use tomasim_core::config::Config;
use tomasim_core::core::BackendType;
use tomasim_core::core::pipeline::timing::InstructionTiming;
use tomasim_core::isa::{Instruction, Program};
use tomasim_core::sim::{RunReport, parse_program};

/// Installs a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; output is captured by the test runner.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext {
    pub config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        init_tracing();
        Self {
            config: Config::default(),
        }
    }

    /// Selects the in-order reference interpreter.
    pub fn reference(mut self) -> Self {
        self.config.general.backend = BackendType::InOrder;
        self
    }

    /// Applies an arbitrary configuration tweak.
    pub fn with(mut self, f: impl FnOnce(&mut Config)) -> Self {
        f(&mut self.config);
        self
    }

    /// Parses `src` and runs it to completion.
    pub fn run(&self, src: &str) -> RunReport {
        let program = parse_program(src).expect("program should parse");
        self.run_program(program)
    }

    /// Runs already-built instructions to completion.
    pub fn run_insts(&self, insts: Vec<Instruction>) -> RunReport {
        let program = Program::new(insts).expect("program should validate");
        self.run_program(program)
    }

    /// Runs `src` and returns the text trace alongside the report.
    pub fn run_traced(&self, src: &str) -> (RunReport, String) {
        let program = parse_program(src).expect("program should parse");
        let mut sim = Simulator::new(program, &self.config).expect("config should validate");
        let mut out = Vec::new();
        let report = sim.run(Some(&mut out)).expect("run should drain");
        (report, String::from_utf8(out).expect("trace is utf-8"))
    }

    fn run_program(&self, program: Program) -> RunReport {
        let mut sim = Simulator::new(program, &self.config).expect("config should validate");
        sim.run(None).expect("run should drain")
    }
}

/// Shorthand for a fully-recorded timing row.
pub const fn timed(issue: u64, exec_complete: u64, write_result: u64) -> InstructionTiming {
    InstructionTiming {
        issue: Some(issue),
        exec_complete: Some(exec_complete),
        write_result: Some(write_result),
    }
}
