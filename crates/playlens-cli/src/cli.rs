//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "playlens",
    version,
    about = "Queries over Steam games, user items, and user reviews",
    long_about = "Analytical queries over the Steam datasets: money spent per user,\n\
                  review counts per date range, genre ranks by play time, and the\n\
                  top players of a genre. The prepare subcommand cleans the raw\n\
                  CSVs the queries consume."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Directory holding users.csv, games.csv, and reviews.csv.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Money spent and recommendation percentage for one user.
    Userdata(UserdataArgs),

    /// Review count and recommendation percentage for a date range.
    Countreviews(CountreviewsArgs),

    /// Rank of a genre by aggregate play time.
    Genre(GenreNameArgs),

    /// Top five users by play time for a genre.
    Userforgenre(GenreNameArgs),

    /// Clean the raw datasets and write prepared copies.
    Prepare(PrepareArgs),

    /// Column-level statistics for one dataset.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct UserdataArgs {
    /// User ID (case sensitive).
    #[arg(value_name = "USER_ID")]
    pub user_id: String,
}

#[derive(Parser)]
pub struct CountreviewsArgs {
    /// Date range as "yyyy-mm-dd yyyy-mm-dd" (start and end, inclusive).
    #[arg(value_name = "DATES")]
    pub dates: String,
}

#[derive(Parser)]
pub struct GenreNameArgs {
    /// Genre name (case sensitive).
    #[arg(value_name = "GENRE")]
    pub genre: String,
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Where to write the prepared CSVs (default: the data directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Which dataset to inspect.
    #[arg(value_enum, value_name = "TABLE")]
    pub table: TableArg,

    /// Drill into one column: type counts, nulls, duplicates.
    #[arg(long = "column", value_name = "NAME")]
    pub column: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableArg {
    Users,
    Games,
    Reviews,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
