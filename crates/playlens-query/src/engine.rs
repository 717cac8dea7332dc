//! The four point queries.
//!
//! Data-quality gaps (missing user, unmatched game id, malformed date,
//! missing cell) never fail a query: they degrade to zero/skip so the API
//! always returns a well-typed answer over a dirty dataset. Structural
//! problems (bad date-range string, missing column) are terminal.

use playlens_clean::{GenreUser, calculate_total_price, correspond, correspond_total, create_dict_genre};
use playlens_ingest::{DatasetPaths, decode_cell, decode_table};
use playlens_model::{CellValue, Table};
use tracing::debug;

use crate::dates::{date_in_range, parse_date};
use crate::error::{QueryError, Result};

const USER_ID: &str = "user_id";
const ITEM_ID: &str = "item_id";
const RECOMMEND: &str = "recommend";
const ITEMS_COUNT: &str = "items_count";
const GAME_ID: &str = "id";
const PRICE: &str = "price";
const POSTED: &str = "posted";
const GENRES: &str = "genres";
const TIME_SPENT: &str = "time_spent";
const USER_URL: &str = "user_url";

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Query surface over the three datasets.
///
/// Tables handed to [`QueryEngine::new`] are used as-is; [`QueryEngine::load`]
/// reads them fresh from disk and literal-decodes every cell, which is how
/// each request obtains its own isolated snapshot.
pub struct QueryEngine {
    users: Table,
    games: Table,
    reviews: Table,
}

impl QueryEngine {
    pub fn new(users: Table, games: Table, reviews: Table) -> Self {
        Self {
            users,
            games,
            reviews,
        }
    }

    /// Load and decode the datasets from disk.
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let mut users = paths.load_users()?;
        let mut games = paths.load_games()?;
        let mut reviews = paths.load_reviews()?;
        decode_table(&mut users);
        decode_table(&mut games);
        decode_table(&mut reviews);
        Ok(Self::new(users, games, reviews))
    }

    /// Money spent by one user and their recommendation percentage.
    ///
    /// An unknown user, an empty item list, and item ids absent from the
    /// catalog all degrade to zeros; none of them is an error.
    pub fn money_spent(&self, user_id: &str) -> (f64, f64) {
        let user_row = self
            .users
            .rows
            .iter()
            .find(|row| row.cell(USER_ID).key() == user_id);

        let (items, recommend, items_count) = match user_row {
            Some(row) => (
                decode_cell(row.cell(ITEM_ID).clone()),
                decode_cell(row.cell(RECOMMEND).clone()),
                decode_cell(row.cell(ITEMS_COUNT).clone())
                    .as_f64()
                    .unwrap_or(0.0),
            ),
            None => (CellValue::Missing, CellValue::Missing, 0.0),
        };

        let mut total_price = 0.0;
        if let Some(ids) = items.as_list()
            && !ids.is_empty()
            && let Ok((price, unmatched)) =
                calculate_total_price(ids, &self.games, GAME_ID, PRICE)
        {
            debug!(user_id, unmatched = unmatched.len(), "summed item prices");
            total_price = price;
        }

        let mut num_recommended = 0usize;
        if let Some(entries) = recommend.as_list() {
            num_recommended = entries.iter().filter(|entry| entry.is_truthy()).count();
        }
        let percentage = if items_count != 0.0 {
            100.0 * (num_recommended as f64 / items_count)
        } else {
            0.0
        };

        (round2(total_price), round2(percentage))
    }

    /// Number of review records with a review posted inside the date range,
    /// and the recommendation percentage over the matching entries.
    ///
    /// `dates` holds two whitespace-separated `yyyy-mm-dd` dates; anything
    /// else is a terminal [`QueryError::InvalidDateRange`]. Malformed
    /// entries inside `posted` lists are silently skipped.
    pub fn num_user_review(&self, dates: &str) -> Result<(usize, f64)> {
        let mut tokens = dates.split_whitespace();
        let (Some(start_str), Some(end_str), None) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(QueryError::InvalidDateRange);
        };
        let start = parse_date(start_str).ok_or(QueryError::InvalidDateRange)?;
        let end = parse_date(end_str).ok_or(QueryError::InvalidDateRange)?;

        let mut reviews = self.reviews.clone();
        decode_table(&mut reviews);

        let mut count = 0usize;
        let mut positive = 0usize;
        let mut negative = 0usize;
        for row in &reviews.rows {
            let posted = row.cell(POSTED).as_list().unwrap_or(&[]);
            let (any_in_range, matching) = date_in_range(posted, start, end);
            if any_in_range {
                count += 1;
            }
            let recommend = row.cell(RECOMMEND).as_list().unwrap_or(&[]);
            for idx in matching {
                if let Some(entry) = recommend.get(idx) {
                    if entry.is_truthy() {
                        positive += 1;
                    } else {
                        negative += 1;
                    }
                }
            }
        }

        let total = positive + negative;
        let percentage = if total != 0 {
            (positive as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        Ok((count, round2(percentage)))
    }

    /// 1-based rank of a genre by descending accumulated play time, or 0
    /// when the genre is absent. Matching is exact and case-sensitive.
    pub fn genre_rank(&self, genre: &str) -> Result<usize> {
        let (totals, inconsistent) = correspond(&self.users, GENRES, TIME_SPENT)?;
        if !inconsistent.is_empty() {
            debug!(rows = inconsistent.len(), "skipped inconsistent user rows");
        }
        let mut ranked: Vec<(String, f64)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        let rank = ranked
            .iter()
            .position(|(name, _)| name == genre)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        Ok(rank)
    }

    /// The five users with the most play time in a genre, descending, ties
    /// keeping their original order. `None` when the genre is absent.
    pub fn top_users_in_genre(&self, genre: &str) -> Result<Option<Vec<GenreUser>>> {
        let (flattened, inconsistent) =
            correspond_total(&self.users, GENRES, TIME_SPENT, USER_ID, USER_URL)?;
        if !inconsistent.is_empty() {
            debug!(rows = inconsistent.len(), "skipped inconsistent user rows");
        }
        let grouped = create_dict_genre(&flattened);
        let Some(contributions) = grouped.get(genre) else {
            return Ok(None);
        };
        let mut top = contributions.clone();
        top.sort_by(|a, b| b.time_spent.total_cmp(&a.time_spent));
        top.truncate(5);
        Ok(Some(top))
    }
}
