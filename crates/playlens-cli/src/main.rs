//! Steam games and users data CLI.

use clap::{ColorChoice, Parser};
use playlens_cli::logging::{LogConfig, LogFormat, init_logging};
use playlens_ingest::DatasetPaths;
use std::io::{self, IsTerminal};

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{
    run_countreviews, run_genre, run_inspect, run_prepare, run_userdata, run_userforgenre,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));
    let paths = DatasetPaths::from_dir(&cli.data_dir);
    let exit_code = match run(&cli, &paths) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli, paths: &DatasetPaths) -> anyhow::Result<()> {
    match &cli.command {
        Command::Userdata(args) => print_json(&run_userdata(paths, &args.user_id)?)?,
        Command::Countreviews(args) => print_json(&run_countreviews(paths, &args.dates)?)?,
        Command::Genre(args) => print_json(&run_genre(paths, &args.genre)?)?,
        Command::Userforgenre(args) => print_json(&run_userforgenre(paths, &args.genre)?)?,
        Command::Prepare(args) => run_prepare(paths, args)?,
        Command::Inspect(args) => run_inspect(paths, args)?,
    }
    Ok(())
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
