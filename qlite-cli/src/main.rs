//! qlite - quantum circuit runner
//! Command-line interface for running circuits on the qlite state-vector simulator

mod input;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use input::{CONFIG_FILE, Overrides, load_circuit, resolve_config};
use qlite_sim::{DEFAULT_DEVICE_NAME, Device, GateKind, MAX_WIRES, MIN_WIRES, ProbabilityRule};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qlite")]
#[command(author = "Silvano Neto <dev@silvanoneto.com>")]
#[command(version = "2026.10.17")]
#[command(about = "qlite - exact state-vector simulation of 1-7 qubit circuits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a circuit file and print measurement probabilities
    Run {
        /// Circuit file (.json): {"wires": N, "ops": [...]} or a bare op array
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of wires (required for bare op arrays, overrides the file)
        #[arg(short, long)]
        wires: Option<usize>,

        /// Device configuration (.toml); defaults to ./qlite.toml when present
        #[arg(short, long, value_name = "CONFIG", env = "QLITE_CONFIG")]
        config: Option<PathBuf>,

        /// Square only the real part of each amplitude (legacy behavior)
        #[arg(long)]
        real_part_only: bool,

        /// Skip unknown gate names instead of failing
        #[arg(long)]
        ignore_unknown: bool,

        /// Print probabilities as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List supported gates
    Gates,

    /// Show information about qlite
    Info,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qlite=info,qlite_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            wires,
            config,
            real_part_only,
            ignore_unknown,
            json,
        } => {
            let overrides = Overrides {
                real_part_only,
                ignore_unknown,
            };
            run_command(&input, wires, config.as_deref(), overrides, json)
        }
        Commands::Gates => {
            print_gates();
            Ok(())
        }
        Commands::Info => {
            print_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Run
// ============================================================================

fn run_command(
    input: &Path,
    wires: Option<usize>,
    config: Option<&Path>,
    overrides: Overrides,
    json: bool,
) -> Result<()> {
    let config = resolve_config(config, overrides)?;
    let circuit = load_circuit(input, wires)?;
    let name = circuit.name.as_deref().unwrap_or(DEFAULT_DEVICE_NAME);

    let mut device = Device::with_config(name, circuit.wires, config)?;
    let probs = device.run_wire(&circuit.ops)?;
    tracing::info!(device = name, wires = circuit.wires, gates = circuit.ops.len(), "circuit completed");

    if json {
        println!("{}", serde_json::to_string(&probs)?);
    } else {
        if device.config().probability_rule == ProbabilityRule::RealPartOnly {
            println!("{}", "note: real-part-only probabilities (legacy rule)".yellow());
        }
        print!("{}", render::table(&probs, circuit.wires));
    }

    Ok(())
}

// ============================================================================
// Info
// ============================================================================

fn print_gates() {
    println!("{}", "Supported gates:".bold());
    for kind in GateKind::ALL {
        let mut name = kind.name().to_string();
        for alias in kind.aliases() {
            name.push_str(" / ");
            name.push_str(alias);
        }
        let angle = if kind.takes_angle() { "angle" } else { "" };
        println!("  {:<14} wires: {}  {}", name.cyan(), kind.arity(), angle.dimmed());
    }
}

fn print_info() {
    println!("{}", "qlite - state-vector quantum circuit simulator".bold());
    println!();
    println!("{}", "Limits:".bold());
    println!("  • {} to {} wires (state dimension up to {})", MIN_WIRES, MAX_WIRES, 1 << MAX_WIRES);
    println!("  • exact probabilities only (no shots, no noise)");
    println!();
    println!("{}", "Circuit format:".bold());
    println!("  {{ \"wires\": 2, \"ops\": [");
    println!("      {{ \"gate\": \"Hadamard\", \"wires\": [0] }},");
    println!("      {{ \"gate\": \"CNOT\", \"wires\": [0, 1] }}");
    println!("  ] }}");
    println!();
    println!("{}", "Commands:".bold());
    println!("  qlite run bell.json              # Print probabilities");
    println!("  qlite run ops.json --wires 3     # Bare op array");
    println!("  qlite run bell.json --json       # JSON output");
    println!("  qlite gates                      # List gates");
    println!();
    println!("Config: ./{} or --config / QLITE_CONFIG", CONFIG_FILE);
}
