use anyhow::{Context, Result};
use chrono::{NaiveDateTime, SubsecRound, Utc};
use rusqlite::{params, Connection};
use tracing::{info, warn};

use crate::models::{Suggestion, SuggestionError, SuggestionRequest, ValidSuggestion};

/// Result of a suggestion submission. A rejection is an expected outcome the
/// caller shows to the patron; only storage failures surface as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Accepted(Suggestion),
    Rejected(SuggestionError),
}

impl SuggestionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SuggestionOutcome::Accepted(_))
    }
}

/// Validate `request` and, when it passes, record it with the current UTC
/// time truncated to whole seconds. Rejected requests never touch the database.
pub fn add_suggestion(conn: &Connection, request: &SuggestionRequest) -> Result<SuggestionOutcome> {
    let valid = match request.validate() {
        Ok(valid) => valid,
        Err(err) => {
            warn!(reason = %err, "rejected book suggestion");
            return Ok(SuggestionOutcome::Rejected(err));
        }
    };

    let submitted_at = Utc::now().trunc_subsecs(0).naive_utc();
    let suggestion = insert_suggestion(conn, valid, submitted_at)?;
    info!(
        id = suggestion.id,
        title = %suggestion.title,
        author = %suggestion.author,
        "recorded book suggestion"
    );

    Ok(SuggestionOutcome::Accepted(suggestion))
}

fn insert_suggestion(
    conn: &Connection,
    valid: ValidSuggestion,
    submitted_at: NaiveDateTime,
) -> Result<Suggestion> {
    conn.execute(
        "INSERT INTO suggestions
            (title, author, genre, age_group, description, cover_url, submitted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            valid.title,
            valid.author,
            valid.genre,
            valid.age_group,
            valid.description,
            valid.cover_url,
            submitted_at
        ],
    )
    .context("failed to insert suggestion")?;

    let id = conn.last_insert_rowid();
    Ok(Suggestion {
        id,
        title: valid.title,
        author: valid.author,
        genre: valid.genre,
        age_group: valid.age_group,
        description: valid.description,
        cover_url: valid.cover_url,
        submitted_at,
    })
}
