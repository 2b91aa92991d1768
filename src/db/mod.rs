//! Persistence layer over the embedded SQLite catalog. The submodules hold
//! one concern each: opening and migrating the file, book queries, and
//! suggestion intake. [`Store`] ties them together with a fresh connection
//! per operation.

mod books;
mod connection;
mod store;
mod suggestions;

pub use books::{fetch_books, fetch_genres, query_books};
pub use connection::{ensure_schema, initialize, open_connection};
pub use store::Store;
pub use suggestions::{add_suggestion, SuggestionOutcome};
