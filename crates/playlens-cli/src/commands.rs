//! Per-subcommand runners.

use anyhow::Result;
use playlens_clean::{check_duplicates_summary, check_none_values, column_data_types_summary};
use playlens_cli::prepare::prepare_datasets;
use playlens_cli::{envelope, report};
use playlens_ingest::{DatasetPaths, build_column_hints, decode_table};
use playlens_model::Table;
use playlens_query::QueryEngine;
use serde_json::Value;

use crate::cli::{InspectArgs, PrepareArgs, TableArg};

pub fn run_userdata(paths: &DatasetPaths, user_id: &str) -> Result<Value> {
    let engine = QueryEngine::load(paths)?;
    let (total_price, percentage) = engine.money_spent(user_id);
    Ok(envelope::userdata(total_price, percentage))
}

pub fn run_countreviews(paths: &DatasetPaths, dates: &str) -> Result<Value> {
    let engine = QueryEngine::load(paths)?;
    let (num_users, percentage) = engine.num_user_review(dates)?;
    Ok(envelope::countreviews(num_users, percentage))
}

pub fn run_genre(paths: &DatasetPaths, genre: &str) -> Result<Value> {
    let engine = QueryEngine::load(paths)?;
    let rank = engine.genre_rank(genre)?;
    Ok(envelope::genre(rank))
}

pub fn run_userforgenre(paths: &DatasetPaths, genre: &str) -> Result<Value> {
    let engine = QueryEngine::load(paths)?;
    let top_users = engine.top_users_in_genre(genre)?;
    Ok(envelope::userforgenre(genre, top_users))
}

pub fn run_prepare(paths: &DatasetPaths, args: &PrepareArgs) -> Result<()> {
    let output = match &args.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            DatasetPaths::from_dir(dir)
        }
        None => paths.clone(),
    };
    let reports = prepare_datasets(paths, &output)?;
    report::print_prepare_summary(&reports);
    Ok(())
}

pub fn run_inspect(paths: &DatasetPaths, args: &InspectArgs) -> Result<()> {
    let (name, mut table): (&str, Table) = match args.table {
        TableArg::Users => ("users", paths.load_users()?),
        TableArg::Games => ("games", paths.load_games()?),
        TableArg::Reviews => ("reviews", paths.load_reviews()?),
    };
    decode_table(&mut table);
    match &args.column {
        Some(column) => {
            let types = column_data_types_summary(&table, column)?;
            let nulls = check_none_values(&table, column, None)?;
            let duplicates = check_duplicates_summary(&table, column)?;
            report::print_column_detail(&types, &nulls, &duplicates);
        }
        None => {
            let hints = build_column_hints(&table);
            report::print_column_hints(name, &hints);
        }
    }
    Ok(())
}
