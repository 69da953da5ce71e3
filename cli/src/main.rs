use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod command;
pub(crate) mod config;
mod util;

use command::*;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[clap(long, short, global = true)]
    verbose: bool,

    /// Reject rows with columns the mapping table doesn't know.
    #[clap(long, global = true)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Info(Info),
    Check(Check),
    Bind(Bind),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    use Command::*;
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut config = config::load_config()?.with_env();
    config.strict |= cli.strict;
    match cli.command {
        Info(info) => info.run(),
        Check(check) => check.run(),
        Bind(bind) => bind.run(&config),
    }
}
