use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use split_file::split_file;

mod cli;

use cli::Cli;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = split_file(&cli.to_config())?;

    for output in &report.outputs {
        if report.dry_run {
            println!("Would write {} ({} bytes)", output.path.display(), output.bytes);
        } else {
            println!("Wrote {}", output.path.display());
        }
    }
    if report.outputs.is_empty() {
        println!("Nothing to write: {} is empty", cli.input.display());
    }

    Ok(())
}
