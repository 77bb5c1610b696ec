use lmc_core::io::{OutputCapture, ScriptedConsole};
use lmc_core::soc::Device;
use lmc_core::{Image, Machine, MachineBuilder, MachineConfig, RunOutcome};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub struct TestContext {
    pub machine: Machine,
    output: OutputCapture,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Default configuration, no input.
    pub fn new() -> Self {
        Self::build(MachineConfig::default(), &[], Vec::new())
    }

    /// Custom configuration, no input.
    pub fn with_config(config: MachineConfig) -> Self {
        Self::build(config, &[], Vec::new())
    }

    /// Default configuration with scripted `INP` lines.
    pub fn with_input(lines: &[&str]) -> Self {
        Self::build(MachineConfig::default(), lines, Vec::new())
    }

    /// Full control: configuration, input lines, and devices in index order.
    pub fn build(config: MachineConfig, lines: &[&str], devices: Vec<Box<dyn Device>>) -> Self {
        init_tracing();
        let console = ScriptedConsole::new(lines.iter().copied());
        let output = console.output();
        let mut builder = MachineBuilder::new(config).console(Box::new(console));
        for device in devices {
            builder = builder.device(device);
        }
        let machine = builder.build().unwrap();
        Self { machine, output }
    }

    /// Assemble and load `source`, panicking on assembly errors.
    pub fn load(mut self, source: &str) -> Self {
        self.machine.assemble_and_load(source).unwrap();
        self
    }

    /// Assemble and load `source`, returning the image.
    pub fn load_image(&mut self, source: &str) -> Image {
        self.machine.assemble_and_load(source).unwrap()
    }

    /// Run from address 0.
    pub fn run(&mut self) -> RunOutcome {
        self.machine.run(0)
    }

    pub fn acc(&self) -> i64 {
        self.machine.cpu().acc
    }

    pub fn memory(&self) -> &[i64] {
        self.machine.cpu().memory()
    }

    /// Characters emitted by `OUT` so far.
    pub fn output(&self) -> String {
        self.output.contents()
    }
}
