//! Tomasulo scheduling simulator CLI.
//!
//! This binary provides the command-line entry points. It performs:
//! 1. **Tomasulo run:** Schedule a program, then write the per-instruction timing log and
//!    optionally the per-cycle trace, the final register dump, statistics and a JSON report.
//! 2. **Reference run:** Execute the program in order and write the retirement log.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tomasim_core::config::Config;
use tomasim_core::core::BackendType;
use tomasim_core::isa::Program;
use tomasim_core::sim::{RunReport, load_program, report};
use tomasim_core::{SimError, Simulator};

/// Cycle limit applied when neither `--max-cycles` nor the configuration sets one.
const DEFAULT_MAX_CYCLES: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(
    name = "tomasim",
    author,
    version,
    about = "Tomasulo out-of-order scheduling simulator",
    long_about = "Schedule a program with Tomasulo's algorithm and report when each instruction issued, finished executing and wrote its result.\n\nExamples:\n  tomasim run prog.txt timing.log\n  tomasim run prog.txt timing.log trace.log regs.log --stats\n  tomasim reference prog.txt reference.log"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program on the Tomasulo scheduler.
    Run(RunArgs),

    /// Run a program on the in-order reference interpreter.
    Reference {
        /// Program file, one instruction per line.
        input: PathBuf,

        /// Retirement log: `cycle: R[rd] = value` per executed instruction.
        log: PathBuf,
    },
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Reference { input, log } => cmd_reference(&input, &log),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Program file, one instruction per line.
    input: PathBuf,

    /// Timing log: `issue,exec_complete,write_result` per instruction.
    log: PathBuf,

    /// Per-cycle trace of stations, units and register status.
    trace: Option<PathBuf>,

    /// Final register dump.
    reg: Option<PathBuf>,

    /// JSON configuration file (pool sizes, latencies, limits).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort if the program has not drained after this many cycles.
    ///
    /// Overrides `general.max_cycles` from the configuration. When neither is
    /// set the limit is 1000000, so a jump that always loops back still stops.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print run statistics to stdout.
    #[arg(long)]
    stats: bool,

    /// Write the full run report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn read_config(path: Option<&Path>) -> Result<Config, SimError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
    Ok(Config::from_json(&text)?)
}

fn load(path: &Path) -> Result<Program, SimError> {
    let program = load_program(path)?;
    println!("Parsed {} instructions", program.len());
    Ok(program)
}

fn create(path: &Path) -> Result<BufWriter<File>, SimError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| SimError::io(path, e))
}

/// Creates `path`, hands it to `f`, and flushes, attributing any I/O error to `path`.
fn write_file(
    path: &Path,
    f: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> Result<(), SimError> {
    let mut w = create(path)?;
    f(&mut w)
        .and_then(|()| w.flush())
        .map_err(|e| SimError::io(path, e))
}

fn cmd_run(args: &RunArgs) -> Result<(), SimError> {
    let mut config = read_config(args.config.as_deref())?;
    config.general.backend = BackendType::OutOfOrder;
    config.general.max_cycles = args
        .max_cycles
        .or(config.general.max_cycles)
        .or(Some(DEFAULT_MAX_CYCLES));

    debug!(?config, "configuration");

    let program = load(&args.input)?;
    let mut sim = Simulator::new(program, &config)?;

    let run = match &args.trace {
        Some(path) => {
            let mut w = create(path)?;
            sim.run(Some(&mut w)).map_err(|e| match e {
                SimError::Trace(source) => SimError::io(path, source),
                other => other,
            })?
        }
        None if config.general.trace => sim.run(Some(&mut io::stdout().lock()))?,
        None => sim.run(None)?,
    };

    write_file(&args.log, |w| report::write_timing_log(w, &run.timing))?;
    if let Some(path) = &args.reg {
        write_file(path, |w| report::write_register_dump(w, &run.registers))?;
    }
    if let Some(path) = &args.report {
        write_report(path, &run)?;
    }
    if args.stats {
        run.stats
            .print(&mut io::stdout().lock())
            .map_err(|e| SimError::io("<stdout>", e))?;
    }
    Ok(())
}

fn write_report(path: &Path, run: &RunReport) -> Result<(), SimError> {
    write_file(path, |w| {
        serde_json::to_writer_pretty(&mut *w, run)?;
        writeln!(w)
    })
}

fn cmd_reference(input: &Path, log: &Path) -> Result<(), SimError> {
    let mut config = Config::default();
    config.general.backend = BackendType::InOrder;
    config.general.max_cycles = Some(DEFAULT_MAX_CYCLES);

    let program = load(input)?;
    let mut sim = Simulator::new(program, &config)?;
    let run = sim.run(None)?;
    write_file(log, |w| report::write_retire_log(w, &run.retired))
}
