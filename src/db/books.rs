use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row, ToSql};
use tracing::debug;

use crate::models::Book;
use crate::query::BookFilter;
use crate::seed::SeedBook;

const BOOK_COLUMNS: &str = "id, title, author, genre, age_group, description, cover_url, popularity";

/// Popularity first; insertion order keeps ties stable.
const BOOK_ORDER: &str = "ORDER BY popularity DESC, id";

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        genre: row.get(3)?,
        age_group: row.get(4)?,
        description: row.get(5)?,
        cover_url: row.get(6)?,
        popularity: row.get(7)?,
    })
}

/// Write one seed entry. Only the initializer calls this; the catalog is
/// read-only otherwise.
pub(crate) fn insert_seed_book(conn: &Connection, book: &SeedBook) -> Result<i64> {
    conn.execute(
        "INSERT INTO books (title, author, genre, age_group, description, cover_url, popularity)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            book.title,
            book.author,
            book.genre,
            book.age_group,
            book.description,
            book.cover_url,
            book.popularity
        ],
    )
    .with_context(|| format!("failed to insert seed book '{}'", book.title))?;

    Ok(conn.last_insert_rowid())
}

/// Every book, most popular first.
pub fn fetch_books(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {BOOK_COLUMNS} FROM books {BOOK_ORDER}"))
        .context("failed to prepare book query")?;

    let books = stmt
        .query_map([], book_from_row)
        .context("failed to load books")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect books")?;

    Ok(books)
}

/// Books matching every criterion in `filter`, in the same order as
/// [`fetch_books`]. Genre and age group narrow the SQL query; the search text
/// is applied by the filter's predicate because SQLite's `LIKE` only folds
/// ASCII case.
pub fn query_books(conn: &Connection, filter: &BookFilter) -> Result<Vec<Book>> {
    let mut sql = format!("SELECT {BOOK_COLUMNS} FROM books WHERE 1 = 1");
    let mut values: Vec<&dyn ToSql> = Vec::new();

    if let Some(genre) = &filter.genre {
        sql.push_str(" AND genre = ?");
        values.push(genre);
    }
    if let Some(age_group) = &filter.age_group {
        sql.push_str(" AND age_group = ?");
        values.push(age_group);
    }
    sql.push(' ');
    sql.push_str(BOOK_ORDER);

    let mut stmt = conn
        .prepare(&sql)
        .context("failed to prepare filtered book query")?;

    let candidates = stmt
        .query_map(values.as_slice(), book_from_row)
        .context("failed to run filtered book query")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect filtered books")?;

    let books: Vec<Book> = candidates.into_iter().filter(filter.predicate()).collect();
    debug!(
        genre = ?filter.genre,
        age_group = ?filter.age_group,
        search = ?filter.search,
        matched = books.len(),
        "queried catalog"
    );

    Ok(books)
}

/// Distinct genres across the catalog, sorted and deduplicated for selector
/// widgets.
pub fn fetch_genres(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT genre FROM books ORDER BY genre")
        .context("failed to prepare genre query")?;

    let mut rows = stmt.query([]).context("failed to execute genre query")?;

    let mut genres = Vec::new();
    while let Some(row) = rows.next().context("failed to fetch genre row")? {
        let genre: String = row.get(0).context("failed to read genre value")?;
        genres.push(genre);
    }

    Ok(genres)
}
