mod cli_bin;

use anyhow::Result;
use clap::Parser;
use cli_bin::args::{Cli, Commands};
use cli_bin::commands;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Parse(args) => commands::parse_command(args),
        Commands::Test(args) => commands::test_command(args),
        Commands::Language(args) => commands::language_command(args),
        Commands::Stringify(args) => commands::stringify_command(args),
    }
}
