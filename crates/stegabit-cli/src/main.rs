use clap::Parser;
use env_logger::Env;
use stegabit_core::StegabitError;

mod cli;
mod commands;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegabitError>;

fn main() -> CliResult<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let options = args.codec_options()?;

    match args.command {
        Commands::Hide(args) => args.run(options),
        Commands::Unveil(args) => args.run(options),
        Commands::UnveilRaw(args) => args.run(options),
        Commands::Capacity(args) => args.run(options),
    }
}
