//! Markov prefetcher simulator CLI.
//!
//! This binary provides a single entry point for driving the predictor. It
//! performs:
//! 1. **Pattern run:** Generate a synthetic reference stream (sequential,
//!    strided, interleaved, random, repeated) and feed it to the predictor.
//! 2. **Trace run:** Load an address trace from disk and replay it.
//! 3. **Reporting:** Per-reference trace lines, final statistics, and an
//!    optional table/history dump.

use clap::{Parser, Subcommand};
use std::process;

use markov_core::config::{Config, Model, PatternKind};
use markov_core::patterns;
use markov_core::sim::loader;
use markov_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "mpf",
    author,
    version,
    about = "Markov prefetcher simulator",
    long_about = "Feed a synthetic pattern or an address trace to the Markov prefetcher.\n\nConfiguration is JSON-first (see the Python API); the CLI uses built-in defaults plus flags.\n\nExamples:\n  mpf run\n  mpf run -p repeated -l 12 --trace\n  mpf run --trace-file traces/qsort.txt --model staged --dump"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a synthetic pattern or a trace file through the predictor.
    Run {
        /// Pattern kind: sequential, strided, interleaved, random, repeated.
        #[arg(short, long)]
        pattern: Option<String>,

        /// Address-trace file to replay instead of a synthetic pattern.
        #[arg(long)]
        trace_file: Option<String>,

        /// Number of references to generate.
        #[arg(short, long)]
        length: Option<usize>,

        /// Stride for the strided pattern.
        #[arg(long)]
        stride: Option<usize>,

        /// Period for the repeated pattern.
        #[arg(long)]
        period: Option<usize>,

        /// Seed for the random pattern.
        #[arg(long)]
        seed: Option<u64>,

        /// Execution model: reference or staged.
        #[arg(short, long)]
        model: Option<String>,

        /// Address-space size N.
        #[arg(long)]
        address_space: Option<usize>,

        /// History window size W.
        #[arg(long)]
        window: Option<usize>,

        /// Transition-counter width B in bits.
        #[arg(long)]
        counter_bits: Option<u32>,

        /// Print one line per processed reference.
        #[arg(short, long)]
        trace: bool,

        /// Dump the history window and transition table after the run.
        #[arg(short, long)]
        dump: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            pattern,
            trace_file,
            length,
            stride,
            period,
            seed,
            model,
            address_space,
            window,
            counter_bits,
            trace,
            dump,
        }) => {
            let config = build_config(
                pattern,
                length,
                stride,
                period,
                seed,
                model,
                address_space,
                window,
                counter_bits,
                trace,
            );
            cmd_run(&config, trace_file, dump);
        }
        None => {
            eprintln!("Markov Prefetcher Simulator — pass a subcommand");
            eprintln!();
            eprintln!("  mpf run                          Default sequential pattern");
            eprintln!("  mpf run -p repeated --trace      Repeated pattern, per-reference lines");
            eprintln!("  mpf run --trace-file <file>      Replay an address trace");
            eprintln!("  mpf run --model staged --dump    Staged model, final state dump");
            eprintln!();
            eprintln!("  mpf --help  for full options");
            process::exit(1);
        }
    }
}

/// Builds the run configuration from defaults plus explicit flag overrides.
#[allow(clippy::too_many_arguments)]
fn build_config(
    pattern: Option<String>,
    length: Option<usize>,
    stride: Option<usize>,
    period: Option<usize>,
    seed: Option<u64>,
    model: Option<String>,
    address_space: Option<usize>,
    window: Option<usize>,
    counter_bits: Option<u32>,
    trace: bool,
) -> Config {
    let mut config = Config::default();
    config.general.trace_references = trace;

    if let Some(name) = pattern {
        config.pattern.kind = parse_pattern(&name);
    }
    if let Some(name) = model {
        config.general.model = parse_model(&name);
    }
    if let Some(v) = length {
        config.pattern.length = v;
    }
    if let Some(v) = stride {
        config.pattern.stride = v;
    }
    if let Some(v) = period {
        config.pattern.period = v;
    }
    if let Some(v) = seed {
        config.pattern.seed = v;
    }
    if let Some(v) = address_space {
        config.predictor.address_space = v;
    }
    if let Some(v) = window {
        config.predictor.history_window = v;
    }
    if let Some(v) = counter_bits {
        config.predictor.counter_bits = v;
    }
    config
}

/// Parses a pattern name; exits with guidance on an unknown kind.
fn parse_pattern(name: &str) -> PatternKind {
    match name.to_ascii_lowercase().as_str() {
        "sequential" => PatternKind::Sequential,
        "strided" => PatternKind::Strided,
        "interleaved" => PatternKind::Interleaved,
        "random" => PatternKind::Random,
        "repeated" => PatternKind::Repeated,
        other => {
            eprintln!(
                "Error: unknown pattern '{}' (expected sequential, strided, interleaved, random, repeated)",
                other
            );
            process::exit(1);
        }
    }
}

/// Parses a model name; exits with guidance on an unknown model.
fn parse_model(name: &str) -> Model {
    match name.to_ascii_lowercase().as_str() {
        "reference" => Model::Reference,
        "staged" => Model::Staged,
        other => {
            eprintln!(
                "Error: unknown model '{}' (expected reference or staged)",
                other
            );
            process::exit(1);
        }
    }
}

/// Runs the simulator over the selected reference stream and reports.
fn cmd_run(config: &Config, trace_file: Option<String>, dump: bool) {
    let sequence = if let Some(path) = trace_file {
        println!("[*] Trace replay: {}", path);
        match loader::load_trace(&path, config.predictor.address_space) {
            Ok(sequence) => sequence,
            Err(e) => {
                eprintln!("\n[!] FATAL: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!(
            "[*] Pattern run: {:?} ({} references)",
            config.pattern.kind, config.pattern.length
        );
        patterns::generate(&config.pattern, config.predictor.address_space)
    };

    println!(
        "  Model: {:?}  N: {}  W: {}  B: {} bits",
        config.general.model,
        config.predictor.address_space,
        config.predictor.history_window,
        config.predictor.counter_bits
    );
    println!();

    let mut sim = Simulator::new(config);
    sim.run(&sequence);

    sim.stats.print();
    if dump {
        sim.dump_state();
    }
}
