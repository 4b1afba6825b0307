mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::collect::CollectArgs;
use commands::validate::ValidateArgs;

#[derive(Parser, Debug)]
#[command(name = "pkc", version, about = "PKI console attribute tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Marshal raw form values into an attribute list
    Collect(CollectArgs),

    /// Validate an attribute descriptor file
    Validate(ValidateArgs),

    /// List known function group codes
    Groups,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Collect(args) => commands::collect::cmd_collect(&args),
        Command::Validate(args) => commands::validate::cmd_validate(&args),
        Command::Groups => commands::groups::cmd_groups(),
    }
}
