//! Command-line front end. It owns argument parsing and printing only; every
//! command goes through [`Store`] or [`schedule_visit`] for the real work.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::db::{Store, SuggestionOutcome};
use crate::models::{AgeGroup, Book, ParseAgeGroupError, SuggestionRequest};
use crate::query::{summarize, BookFilter};
use crate::visits::{schedule_visit, TimeSlot, VisitPurpose, VisitRequest};

/// Selector value meaning "do not filter on this field".
const ALL: &str = "All";

#[derive(Debug, Parser)]
#[command(
    name = "library-book-finder",
    version,
    about = "Browse the community library catalog, suggest books, and schedule visits"
)]
pub struct Cli {
    /// SQLite file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the database and load the starter catalog if it is empty.
    Init,
    /// List books, optionally filtered.
    Books {
        /// Exact genre, or "All".
        #[arg(long)]
        genre: Option<String>,
        /// "Small Kids", "Teens & Adults", or "All".
        #[arg(long, value_parser = parse_age_criterion)]
        age_group: Option<AgeCriterion>,
        /// Case-insensitive text to find in titles or authors.
        #[arg(long)]
        search: Option<String>,
    },
    /// List the genres present in the catalog.
    Genres,
    /// Show collection totals.
    Stats,
    /// Suggest a book for the library to acquire.
    Suggest {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        genre: String,
        #[arg(long)]
        age_group: AgeGroup,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        cover_url: Option<String>,
    },
    /// Schedule a visit to the library.
    Visit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        /// One of the listed purposes, or "other" together with --purpose-detail.
        #[arg(long, default_value = "General browsing")]
        purpose: VisitPurpose,
        #[arg(long)]
        purpose_detail: Option<String>,
        #[arg(long, default_value_t = 1)]
        visitors: u32,
        /// Preferred date as YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,
        /// Slot label or start hour (9, 11, 13, 15, 17).
        #[arg(long)]
        time: TimeSlot,
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Age-group selector input: either a concrete group or the "All" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCriterion {
    All,
    Only(AgeGroup),
}

fn parse_age_criterion(value: &str) -> Result<AgeCriterion, ParseAgeGroupError> {
    if value.trim().eq_ignore_ascii_case(ALL) {
        Ok(AgeCriterion::All)
    } else {
        value.parse().map(AgeCriterion::Only)
    }
}

/// Turn selector inputs into a filter, mapping the "All" sentinel and blank
/// values to "no constraint".
pub fn build_filter(
    genre: Option<String>,
    age_group: Option<AgeCriterion>,
    search: Option<String>,
) -> BookFilter {
    BookFilter {
        genre: genre.filter(|g| !g.trim().is_empty() && !g.trim().eq_ignore_ascii_case(ALL)),
        age_group: match age_group {
            Some(AgeCriterion::Only(group)) => Some(group),
            Some(AgeCriterion::All) | None => None,
        },
        search: search.filter(|s| !s.trim().is_empty()),
    }
}

/// Execute the parsed command line. Patron-facing rejections print a message
/// and map to a failing exit code; storage problems bubble up as errors.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let settings = Settings::resolve(cli.db)?;
    let store = Store::new(settings.db_path);
    store.initialize()?;

    match cli.command {
        Command::Init => {
            println!("Catalog ready at {}", store.path().display());
        }
        Command::Books {
            genre,
            age_group,
            search,
        } => {
            let filter = build_filter(genre, age_group, search);
            let books = store.query_books(&filter)?;
            if books.is_empty() {
                println!("No books found matching your criteria. Try adjusting your filters.");
            } else {
                println!("Found {} books", books.len());
                for book in &books {
                    print_book(book);
                }
            }
        }
        Command::Genres => {
            for genre in store.list_genres()? {
                println!("{genre}");
            }
        }
        Command::Stats => {
            let summary = summarize(&store.list_books()?);
            println!("Total books: {}", summary.total_books);
            println!("Genres: {}", summary.unique_genres);
            println!("Authors: {}", summary.unique_authors);
            for (genre, count) in &summary.books_per_genre {
                println!("  {genre}: {count}");
            }
        }
        Command::Suggest {
            title,
            author,
            genre,
            age_group,
            description,
            cover_url,
        } => {
            let request = SuggestionRequest {
                title,
                author,
                genre,
                age_group,
                description,
                cover_url,
            };
            match store.add_suggestion(&request)? {
                SuggestionOutcome::Accepted(_) => {
                    println!("Thank you for your suggestion! The library staff will review it.");
                }
                SuggestionOutcome::Rejected(reason) => {
                    eprintln!("{reason}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Visit {
            name,
            email,
            phone,
            purpose,
            purpose_detail,
            visitors,
            date,
            time,
            notes,
        } => {
            let purpose = match purpose {
                VisitPurpose::Other(_) => VisitPurpose::Other(purpose_detail.unwrap_or_default()),
                fixed => fixed,
            };
            let request = VisitRequest {
                name,
                email,
                phone,
                purpose,
                visitors,
                date,
                slot: time,
                notes,
            };
            match schedule_visit(&request, Local::now().date_naive()) {
                Ok(confirmation) => println!("{}", confirmation.message()),
                Err(reason) => {
                    eprintln!("{reason}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_book(book: &Book) {
    println!();
    println!("{book}");
    println!(
        "  Genre: {} | Age Group: {} | Popularity: {}",
        book.genre,
        book.age_group,
        book.popularity_stars()
    );
    println!("  Cover: {}", book.cover_or_default());
    let description = book.short_description();
    if !description.is_empty() {
        println!("  {description}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_means_no_constraint() {
        let filter = build_filter(
            Some("All".into()),
            Some(AgeCriterion::All),
            Some("  ".into()),
        );
        assert_eq!(filter, BookFilter::new());
    }

    #[test]
    fn concrete_selections_pass_through() {
        let filter = build_filter(
            Some("Fantasy".into()),
            Some(AgeCriterion::Only(AgeGroup::SmallKids)),
            Some("hobbit".into()),
        );
        assert_eq!(
            filter,
            BookFilter::new()
                .with_genre("Fantasy")
                .with_age_group(AgeGroup::SmallKids)
                .with_search("hobbit")
        );
    }

    #[test]
    fn age_criterion_parses_all_and_labels() {
        assert_eq!(parse_age_criterion("all"), Ok(AgeCriterion::All));
        assert_eq!(
            parse_age_criterion("Teens & Adults"),
            Ok(AgeCriterion::Only(AgeGroup::TeensAndAdults))
        );
        assert!(parse_age_criterion("Seniors").is_err());
    }

    #[test]
    fn books_command_parses_filters() {
        let cli = Cli::try_parse_from([
            "library-book-finder",
            "--db",
            "/tmp/x.sqlite",
            "books",
            "--genre",
            "Fantasy",
            "--age-group",
            "Small Kids",
        ])
        .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.sqlite")));
        match cli.command {
            Command::Books {
                genre, age_group, ..
            } => {
                assert_eq!(genre.as_deref(), Some("Fantasy"));
                assert_eq!(age_group, Some(AgeCriterion::Only(AgeGroup::SmallKids)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
