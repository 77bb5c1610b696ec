//! Little Man Computer CLI.
//!
//! This binary assembles a program file and runs it. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON file, then flag overrides.
//! 2. **Devices:** Each `--write-device` path becomes a character-file device, in order.
//! 3. **Run:** Assembles, loads, and executes; a run-time fault prints a diagnostic dump.
//!
//! Exit status is 1 for configuration, I/O, or assembly errors. A run-time
//! fault is reported on stdout and the process still exits 0.

use clap::Parser;
use std::path::PathBuf;
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use lmc_core::isa::disasm;
use lmc_core::soc::devices::CharFileDevice;
use lmc_core::{LmcError, MachineBuilder, MachineConfig, RunOutcome};

/// Operand width used by the command line when neither flag nor file sets one.
const CLI_OPERAND_BITS: u32 = 28;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "lmc",
    author,
    version,
    about = "Little Man Computer assembler and emulator",
    long_about = "Assemble a mnemonic source file and run it.\n\nExamples:\n  lmc programs/add.lmc\n  lmc programs/hello_device.lmc --write-device out.txt\n  RUST_LOG=lmc_core=trace lmc programs/countdown.lmc --trace"
)]
struct Cli {
    /// Assembly source file.
    program: PathBuf,

    /// Attach a character-file device (repeatable; indices follow flag order).
    #[arg(long = "write-device", value_name = "PATH")]
    write_devices: Vec<PathBuf>,

    /// JSON machine configuration; flags below override it.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Memory size in words.
    #[arg(long)]
    memory_size: Option<usize>,

    /// Width of the opcode field in bits.
    #[arg(long)]
    opcode_bits: Option<u32>,

    /// Width of the operand field in bits.
    #[arg(long)]
    operand_bits: Option<u32>,

    /// Stop after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Address to start execution at.
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Emit a trace event per instruction (visible with RUST_LOG=trace).
    #[arg(long)]
    trace: bool,

    /// Print the assembled image as a listing instead of running it.
    #[arg(long)]
    disasm: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Resolves the configuration: file (or defaults with the CLI operand width), then flags.
fn load_config(cli: &Cli) -> Result<MachineConfig, LmcError> {
    let mut config = match &cli.config {
        Some(path) => MachineConfig::from_json(&fs::read_to_string(path)?)?,
        None => MachineConfig {
            operand_bits: Some(CLI_OPERAND_BITS),
            ..MachineConfig::default()
        },
    };
    if let Some(size) = cli.memory_size {
        config.memory_size = size;
    }
    if let Some(bits) = cli.opcode_bits {
        config.opcode_bits = bits;
    }
    if let Some(bits) = cli.operand_bits {
        config.operand_bits = Some(bits);
    }
    if cli.max_steps.is_some() {
        config.max_steps = cli.max_steps;
    }
    config.trace_instructions |= cli.trace;
    config.device_io |= !cli.write_devices.is_empty();
    Ok(config)
}

/// Builds the machine, assembles the program, and runs or lists it.
fn run(cli: &Cli) -> Result<(), LmcError> {
    let config = load_config(cli)?;
    let source = fs::read_to_string(&cli.program)?;

    let mut builder = MachineBuilder::new(config);
    for path in &cli.write_devices {
        builder = builder.device(Box::new(CharFileDevice::create(path)?));
    }
    let mut machine = builder.build()?;
    let image = machine.assemble_and_load(&source)?;

    if cli.disasm {
        let words = &machine.cpu().memory()[image.base..image.end()];
        println!("{}", disasm::listing(words, machine.table(), machine.layout()));
        return Ok(());
    }

    match machine.run(cli.start) {
        RunOutcome::Halted { steps } => {
            tracing::info!(steps, "program halted");
        }
        RunOutcome::Faulted(report) => {
            println!();
            println!("{report}");
        }
    }
    Ok(())
}
