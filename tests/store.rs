use std::fs;
use std::path::PathBuf;

use library_book_finder::models::AgeGroup;
use library_book_finder::seed::{SeedBook, SEED_BOOKS};
use library_book_finder::{BookFilter, Store, SuggestionError, SuggestionOutcome, SuggestionRequest};
use rusqlite::Connection;

const TWO_BOOKS: &[SeedBook] = &[
    SeedBook {
        title: "Book B",
        author: "Author B",
        genre: "Fantasy",
        age_group: AgeGroup::SmallKids,
        description: None,
        cover_url: None,
        popularity: 3,
    },
    SeedBook {
        title: "Book A",
        author: "Author A",
        genre: "Fantasy",
        age_group: AgeGroup::TeensAndAdults,
        description: None,
        cover_url: None,
        popularity: 5,
    },
];

/// Scratch directory removed when the test finishes.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "library-book-finder-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        Self(dir)
    }

    fn db(&self) -> PathBuf {
        self.0.join("library.sqlite")
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn suggestion(title: &str, author: &str) -> SuggestionRequest {
    SuggestionRequest {
        title: title.into(),
        author: author.into(),
        genre: "Fiction".into(),
        age_group: AgeGroup::SmallKids,
        description: None,
        cover_url: None,
    }
}

fn suggestion_count(store: &Store) -> i64 {
    let conn = Connection::open(store.path()).unwrap();
    conn.query_row("SELECT COUNT(*) FROM suggestions", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn initialize_is_idempotent_and_seeds_once() {
    let scratch = ScratchDir::new("idempotent");
    let store = Store::new(scratch.db());

    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(store.list_books().unwrap().len(), SEED_BOOKS.len());
}

#[test]
fn genre_query_returns_most_popular_first() {
    let scratch = ScratchDir::new("two-books");
    let store = Store::new(scratch.db()).with_seed(TWO_BOOKS);
    store.initialize().unwrap();

    let titles: Vec<String> = store
        .query_books(&BookFilter::new().with_genre("Fantasy"))
        .unwrap()
        .into_iter()
        .map(|book| book.title)
        .collect();
    assert_eq!(titles, vec!["Book A", "Book B"]);
}

#[test]
fn seeded_catalog_satisfies_filter_properties() {
    let scratch = ScratchDir::new("properties");
    let store = Store::new(scratch.db());
    store.initialize().unwrap();

    let all = store.list_books().unwrap();
    assert_eq!(store.query_books(&BookFilter::new()).unwrap(), all);
    assert!(all
        .windows(2)
        .all(|pair| pair[0].popularity >= pair[1].popularity));

    for genre in store.list_genres().unwrap() {
        let books = store
            .query_books(&BookFilter::new().with_genre(genre.clone()))
            .unwrap();
        assert!(!books.is_empty());
        assert!(books.iter().all(|book| book.genre == genre));
    }

    for group in AgeGroup::ALL {
        let books = store
            .query_books(&BookFilter::new().with_age_group(group))
            .unwrap();
        assert!(books.iter().all(|book| book.age_group == group));
    }

    let search = store
        .query_books(&BookFilter::new().with_search("qatar"))
        .unwrap();
    assert!(!search.is_empty());
    assert!(search.iter().all(|book| {
        book.title.to_lowercase().contains("qatar") || book.author.to_lowercase().contains("qatar")
    }));

    let kids = store
        .query_books(&BookFilter::new().with_age_group(AgeGroup::SmallKids))
        .unwrap();
    let fiction = store
        .query_books(&BookFilter::new().with_genre("Children's Fiction"))
        .unwrap();
    let both = store
        .query_books(
            &BookFilter::new()
                .with_genre("Children's Fiction")
                .with_age_group(AgeGroup::SmallKids),
        )
        .unwrap();
    let expected: Vec<_> = fiction.into_iter().filter(|book| kids.contains(book)).collect();
    assert_eq!(both, expected);
}

#[test]
fn genres_are_sorted_and_complete() {
    let scratch = ScratchDir::new("genres");
    let store = Store::new(scratch.db());
    store.initialize().unwrap();

    let genres = store.list_genres().unwrap();
    let mut expected: Vec<String> = SEED_BOOKS.iter().map(|book| book.genre.to_string()).collect();
    expected.sort();
    expected.dedup();
    assert_eq!(genres, expected);
}

#[test]
fn suggestions_are_validated_before_writing() {
    let scratch = ScratchDir::new("suggestions");
    let store = Store::new(scratch.db());
    store.initialize().unwrap();

    let rejected = store.add_suggestion(&suggestion("", "Author X")).unwrap();
    assert_eq!(
        rejected,
        SuggestionOutcome::Rejected(SuggestionError::MissingTitleOrAuthor)
    );
    assert_eq!(suggestion_count(&store), 0);

    let accepted = store.add_suggestion(&suggestion("Title X", "Author X")).unwrap();
    assert!(accepted.is_accepted());
    assert_eq!(suggestion_count(&store), 1);

    let conn = Connection::open(store.path()).unwrap();
    let (title, age_group): (String, String) = conn
        .query_row("SELECT title, age_group FROM suggestions", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(title, "Title X");
    assert_eq!(age_group, "Small Kids");
}

#[test]
fn suggestions_never_enter_the_catalog() {
    let scratch = ScratchDir::new("separate");
    let store = Store::new(scratch.db()).with_seed(TWO_BOOKS);
    store.initialize().unwrap();

    store.add_suggestion(&suggestion("Title X", "Author X")).unwrap();
    assert_eq!(store.list_books().unwrap().len(), TWO_BOOKS.len());
}

#[test]
fn unusable_storage_location_is_an_error() {
    let scratch = ScratchDir::new("blocked");
    fs::create_dir_all(&scratch.0).unwrap();
    let blocker = scratch.0.join("not-a-dir");
    fs::write(&blocker, b"file").unwrap();

    let store = Store::new(blocker.join("library.sqlite"));
    assert!(store.initialize().is_err());
    assert!(store.list_books().is_err());
}
