//! Dataset locations and per-table loading.
//!
//! Paths are carried explicitly instead of process-wide constants so tests
//! can point the pipeline at synthetic tables.

use std::path::{Path, PathBuf};

use playlens_model::Table;

use crate::csv_table::read_table;
use crate::error::Result;

/// Locations of the three source CSVs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DatasetPaths {
    /// User purchase/playtime records.
    pub users: PathBuf,
    /// Games catalog.
    pub games: PathBuf,
    /// User review records.
    pub reviews: PathBuf,
}

impl DatasetPaths {
    /// Conventional file names under one data directory.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            users: dir.join("users.csv"),
            games: dir.join("games.csv"),
            reviews: dir.join("reviews.csv"),
        }
    }

    #[must_use]
    pub fn with_users(mut self, path: PathBuf) -> Self {
        self.users = path;
        self
    }

    #[must_use]
    pub fn with_games(mut self, path: PathBuf) -> Self {
        self.games = path;
        self
    }

    #[must_use]
    pub fn with_reviews(mut self, path: PathBuf) -> Self {
        self.reviews = path;
        self
    }

    pub fn load_users(&self) -> Result<Table> {
        read_table(&self.users)
    }

    pub fn load_games(&self) -> Result<Table> {
        read_table(&self.games)
    }

    pub fn load_reviews(&self) -> Result<Table> {
        read_table(&self.reviews)
    }
}
