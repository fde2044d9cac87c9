//! Headstamp CLI - prepend license and attribution headers to source files
//!
//! Running the binary with no subcommand performs the default annotation
//! pass; see `headstamp --help` for the configurable form.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let machine_output = matches!(
        &cli.command,
        Some(Commands::Annotate(args)) if args.format == cli::OutputFormat::Json
    );
    let log_level = if cli.verbose {
        "debug"
    } else if machine_output {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Annotate(args)) => cli::annotate_command(*args)?,
        None => cli::annotate_command(cli::AnnotateArgs::default())?,
        Some(Commands::PrintDefaultConfig) => cli::print_default_config()?,
        Some(Commands::InitConfig(args)) => cli::init_config(args)?,
        Some(Commands::ValidateConfig(args)) => cli::validate_config(args)?,
    }

    Ok(())
}
