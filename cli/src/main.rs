mod commands;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jrandom_core::{StreamConfig, DEFAULT_ULP_TOLERANCE};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jrandom")]
#[command(version)]
#[command(about = "Generate and compare java.util.Random-compatible sequences", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the canonical 7-values-per-round stream
    #[command(alias = "gen")]
    Generate {
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i64,
        #[arg(short, long)]
        rounds: usize,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print plain nextInt() values, one per line
    Ints {
        #[arg(short, long, default_value_t = 12345, allow_negative_numbers = true)]
        seed: i64,
        #[arg(short, long, default_value_t = 100)]
        count: usize,
    },
    /// Diff two streams, tolerating small ULP drift in double fields
    Compare {
        expected: PathBuf,
        actual: PathBuf,
        #[arg(short, long, default_value_t = DEFAULT_ULP_TOLERANCE)]
        tolerance: u64,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    let stdout = io::stdout();

    match cli.command {
        Commands::Generate {
            seed,
            rounds,
            output,
        } => {
            let config = StreamConfig::new(seed, rounds);
            // Don't leave an empty file behind for a config that can't run
            config.validate()?;
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    commands::generate(&config, &mut BufWriter::new(file))?
                }
                None => commands::generate(&config, &mut BufWriter::new(stdout.lock()))?,
            };
            Ok(commands::EXIT_OK)
        }
        Commands::Ints { seed, count } => {
            commands::ints(seed, count, &mut BufWriter::new(stdout.lock()))?;
            Ok(commands::EXIT_OK)
        }
        Commands::Compare {
            expected,
            actual,
            tolerance,
        } => commands::compare_files(&expected, &actual, tolerance, &mut stdout.lock()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(commands::EXIT_ERROR)
        }
    }
}
