//! Domain models that mirror the SQLite schema and get passed between the
//! store, the query composer, and whatever front end renders the catalog.
//! These types stay light-weight data holders; the persistence rules live in
//! `db` and the filtering rules live in `query`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use thiserror::Error;

/// Cover shown for books that were catalogued without an image.
pub const DEFAULT_COVER_IMAGE_URL: &str =
    "https://cdn.pixabay.com/photo/2018/01/17/18/43/book-3088775_960_720.jpg";

/// Descriptions longer than this many characters get an ellipsis in listings.
const SHORT_DESCRIPTION_CHARS: usize = 150;

/// Upper bound for suggested titles and authors.
pub const MAX_NAME_CHARS: usize = 100;
/// Upper bound for suggested descriptions.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Coarse audience classification. Every book and suggestion carries exactly
/// one of these.
pub enum AgeGroup {
    SmallKids,
    TeensAndAdults,
}

impl AgeGroup {
    /// All variants in the order selectors should list them.
    pub const ALL: [AgeGroup; 2] = [AgeGroup::SmallKids, AgeGroup::TeensAndAdults];

    /// The label stored in the database and shown to patrons.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::SmallKids => "Small Kids",
            AgeGroup::TeensAndAdults => "Teens & Adults",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown age group '{0}'; expected \"Small Kids\" or \"Teens & Adults\"")]
pub struct ParseAgeGroupError(pub String);

impl FromStr for AgeGroup {
    type Err = ParseAgeGroupError;

    /// Labels are matched case-insensitively so hand-typed input works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AgeGroup::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseAgeGroupError(s.to_string()))
    }
}

impl ToSql for AgeGroup {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for AgeGroup {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A catalog record available for browsing. Rows are written once by the
/// seed loader and never updated afterwards.
pub struct Book {
    /// Primary key assigned by SQLite; stable for the lifetime of the row.
    pub id: i64,
    /// Title shown in listings and matched by search.
    pub title: String,
    /// Author name, also matched by search.
    pub author: String,
    /// Free-form genre label. The set of genres is open-ended.
    pub genre: String,
    /// Audience the book is shelved for.
    pub age_group: AgeGroup,
    /// Blurb for the listing card; may be missing.
    pub description: Option<String>,
    /// Raw cover URL. Use [`Book::cover_or_default`] when rendering.
    pub cover_url: Option<String>,
    /// Seeded ranking used for ordering. Read-only after seeding.
    pub popularity: i64,
}

impl Book {
    /// Return the cover URL, falling back to the shared placeholder when the
    /// record has none (or only whitespace).
    pub fn cover_or_default(&self) -> &str {
        match self.cover_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_COVER_IMAGE_URL,
        }
    }

    /// Popularity clamped into the 1..=5 display range.
    pub fn display_popularity(&self) -> usize {
        self.popularity.clamp(1, 5) as usize
    }

    /// One star per display popularity point.
    pub fn popularity_stars(&self) -> String {
        "*".repeat(self.display_popularity())
    }

    /// Description cut down to listing length. Missing descriptions render as
    /// an empty string.
    pub fn short_description(&self) -> String {
        let description = self.description.as_deref().unwrap_or_default();
        if description.chars().count() > SHORT_DESCRIPTION_CHARS {
            let mut short: String = description.chars().take(SHORT_DESCRIPTION_CHARS).collect();
            short.push_str("...");
            short
        } else {
            description.to_string()
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A patron-submitted candidate for the catalog. Suggestions are an audit log
/// for staff review; nothing in this crate reads them back.
pub struct Suggestion {
    /// Primary key from the `suggestions` table.
    pub id: i64,
    /// Suggested title, trimmed.
    pub title: String,
    /// Suggested author, trimmed.
    pub author: String,
    /// Genre the patron picked; may be empty.
    pub genre: String,
    /// Audience the patron picked.
    pub age_group: AgeGroup,
    /// Why the patron thinks the book belongs in the collection.
    pub description: Option<String>,
    /// Optional link to a cover image.
    pub cover_url: Option<String>,
    /// UTC time the store accepted the suggestion.
    pub submitted_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw suggestion form input as typed by a patron.
pub struct SuggestionRequest {
    /// Required; at most 100 characters after trimming.
    pub title: String,
    /// Required; at most 100 characters after trimming.
    pub author: String,
    pub genre: String,
    pub age_group: AgeGroup,
    /// Optional; at most 500 characters after trimming.
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

/// Reasons a suggestion is refused before it reaches the database. The
/// messages are meant to be shown to the patron verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("Please provide at least the book title and author.")]
    MissingTitleOrAuthor,
    #[error("The {field} may be at most {max} characters long.")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Suggestion fields after trimming and validation, ready to insert.
pub struct ValidSuggestion {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub age_group: AgeGroup,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

impl SuggestionRequest {
    /// Trim the inputs and check the required fields and length limits.
    /// A title or author made only of whitespace counts as missing. Blank
    /// optional fields collapse to `None`.
    pub fn validate(&self) -> Result<ValidSuggestion, SuggestionError> {
        let title = self.title.trim();
        let author = self.author.trim();
        if title.is_empty() || author.is_empty() {
            return Err(SuggestionError::MissingTitleOrAuthor);
        }
        check_length("title", title, MAX_NAME_CHARS)?;
        check_length("author", author, MAX_NAME_CHARS)?;

        let description = non_blank(self.description.as_deref());
        if let Some(description) = &description {
            check_length("description", description, MAX_DESCRIPTION_CHARS)?;
        }

        Ok(ValidSuggestion {
            title: title.to_string(),
            author: author.to_string(),
            genre: self.genre.trim().to_string(),
            age_group: self.age_group,
            description,
            cover_url: non_blank(self.cover_url.as_deref()),
        })
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), SuggestionError> {
    if value.chars().count() > max {
        Err(SuggestionError::TooLong { field, max })
    } else {
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
