use clap::Parser;
use pfstat_core::cli::{self, OutputFormat};
use pfstat_core::clock::BootClock;
use pfstat_core::logging::init_logging;
use pfstat_core::source::{DEFAULT_DEVICE, PfDevice};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pfstat",
    version,
    about = "pfstat: report packet filter status as a structured document"
)]
struct Cli {
    /// Path to the pf control device
    #[arg(long, env = "PFSTAT_DEVICE", default_value = DEFAULT_DEVICE)]
    device: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let device = PfDevice::new(cli.device);
    let stdout = io::stdout();

    if let Err(e) = cli::run(&device, &BootClock, cli.format, stdout.lock()) {
        tracing::debug!(error = ?e, "pfstat failed");
        eprintln!("pfstat: {e:#}");
        std::process::exit(1);
    }
}
