use std::path::{Path, PathBuf};

use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

use crate::db::{books, connection, suggestions, SuggestionOutcome};
use crate::models::{Book, SuggestionRequest};
use crate::query::BookFilter;
use crate::seed::{SeedBook, SEED_BOOKS};

/// Handle to the on-disk catalog. The store keeps no open connection between
/// calls: every operation opens the database, does its work, and drops the
/// connection before returning, on success and failure alike.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    seed: &'static [SeedBook],
}

impl Store {
    /// A store backed by the SQLite file at `path`, seeded with the default
    /// catalog.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed: SEED_BOOKS,
        }
    }

    /// Replace the catalog loaded into an empty database.
    pub fn with_seed(mut self, seed: &'static [SeedBook]) -> Self {
        self.seed = seed;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        connection::open_connection(&self.path)
    }

    /// Create the tables if needed and seed an empty catalog.
    pub fn initialize(&self) -> Result<()> {
        let mut conn = self.connect()?;
        let inserted = connection::initialize(&mut conn, self.seed)?;
        info!(path = %self.path.display(), inserted, "catalog ready");
        Ok(())
    }

    /// All books, most popular first.
    pub fn list_books(&self) -> Result<Vec<Book>> {
        books::fetch_books(&self.connect()?)
    }

    /// Books matching every criterion set on `filter`.
    pub fn query_books(&self, filter: &BookFilter) -> Result<Vec<Book>> {
        books::query_books(&self.connect()?, filter)
    }

    pub fn list_genres(&self) -> Result<Vec<String>> {
        books::fetch_genres(&self.connect()?)
    }

    /// Record a patron suggestion for staff review.
    pub fn add_suggestion(&self, request: &SuggestionRequest) -> Result<SuggestionOutcome> {
        suggestions::add_suggestion(&self.connect()?, request)
    }
}
