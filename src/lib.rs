//! Core library for the community library book finder: an embedded SQLite
//! catalog with filtering, a write-only suggestion log, and visit scheduling.
//!
//! The `bin` target is a thin command-line collaborator over these modules;
//! other front ends can drive [`Store`] directly.
pub mod cli;
pub mod config;
pub mod db;
pub mod models;
pub mod query;
pub mod seed;
pub mod visits;

/// The store facade most callers need.
pub use db::{Store, SuggestionOutcome};

/// Domain records and the suggestion form input.
pub use models::{AgeGroup, Book, Suggestion, SuggestionError, SuggestionRequest};

pub use query::BookFilter;
pub use visits::{schedule_visit, VisitConfirmation, VisitError, VisitRequest};
