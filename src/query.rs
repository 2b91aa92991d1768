//! Catalog filtering. A [`BookFilter`] holds the optional criteria a patron
//! picked and turns them into a predicate over [`Book`]. Each criterion that
//! is `None` leaves that dimension unconstrained; front ends translate their
//! own "All" entries into `None` before building a filter.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{AgeGroup, Book};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Exact genre match.
    pub genre: Option<String>,
    /// Exact age group match.
    pub age_group: Option<AgeGroup>,
    /// Case-insensitive substring of the title or the author.
    pub search: Option<String>,
}

impl BookFilter {
    /// A filter with no criteria; matches every book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_age_group(mut self, age_group: AgeGroup) -> Self {
        self.age_group = Some(age_group);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The search text that actually constrains results. Only the empty
    /// string counts as no search; whitespace is part of the needle.
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase)
    }

    /// True when no criterion narrows the result set.
    pub fn is_unconstrained(&self) -> bool {
        self.genre.is_none() && self.age_group.is_none() && self.search_needle().is_none()
    }

    /// Build the conjunctive predicate for this filter. The search needle is
    /// lowercased once up front so the closure stays cheap to call per book.
    pub fn predicate(&self) -> impl Fn(&Book) -> bool + '_ {
        let needle = self.search_needle();
        move |book: &Book| {
            self.genre.as_deref().map_or(true, |genre| book.genre == genre)
                && self.age_group.map_or(true, |group| book.age_group == group)
                && needle.as_deref().map_or(true, |needle| {
                    book.title.to_lowercase().contains(needle)
                        || book.author.to_lowercase().contains(needle)
                })
        }
    }

    /// Convenience wrapper around [`BookFilter::predicate`] for one-off checks.
    pub fn matches(&self, book: &Book) -> bool {
        (self.predicate())(book)
    }
}

/// Headline numbers for a set of books, such as the current result list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total_books: usize,
    pub unique_genres: usize,
    pub unique_authors: usize,
    /// Book count per genre, keyed in genre order.
    pub books_per_genre: BTreeMap<String, usize>,
}

pub fn summarize(books: &[Book]) -> CatalogSummary {
    let mut books_per_genre = BTreeMap::new();
    for book in books {
        *books_per_genre.entry(book.genre.clone()).or_insert(0) += 1;
    }
    let authors: BTreeSet<&str> = books.iter().map(|book| book.author.as_str()).collect();

    CatalogSummary {
        total_books: books.len(),
        unique_genres: books_per_genre.len(),
        unique_authors: authors.len(),
        books_per_genre,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, genre: &str, age_group: AgeGroup) -> Book {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            age_group,
            description: None,
            cover_url: None,
            popularity: 3,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "The Hobbit", "J.R.R. Tolkien", "Fantasy", AgeGroup::TeensAndAdults),
            book(2, "The Gruffalo", "Julia Donaldson", "Children's Picture Book", AgeGroup::SmallKids),
            book(3, "Desert Tales for Children", "Fatima Al-Kuwari", "Children's Fiction", AgeGroup::SmallKids),
            book(4, "Dragon Eggs", "Tolkien Fan", "Fantasy", AgeGroup::SmallKids),
        ]
    }

    fn ids(filter: &BookFilter) -> Vec<i64> {
        shelf()
            .into_iter()
            .filter(filter.predicate())
            .map(|book| book.id)
            .collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = BookFilter::new();
        assert!(filter.is_unconstrained());
        assert_eq!(ids(&filter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn genre_and_age_group_match_exactly() {
        assert_eq!(ids(&BookFilter::new().with_genre("Fantasy")), vec![1, 4]);
        assert!(ids(&BookFilter::new().with_genre("fantasy")).is_empty());
        assert_eq!(
            ids(&BookFilter::new().with_age_group(AgeGroup::SmallKids)),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn search_hits_title_or_author_ignoring_case() {
        assert_eq!(ids(&BookFilter::new().with_search("TOLKIEN")), vec![1, 4]);
        assert_eq!(ids(&BookFilter::new().with_search("gruff")), vec![2]);
        assert!(ids(&BookFilter::new().with_search("nowhere")).is_empty());
    }

    #[test]
    fn empty_search_is_ignored() {
        let filter = BookFilter::new().with_search("");
        assert!(filter.is_unconstrained());
        assert_eq!(ids(&filter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn whitespace_search_is_matched_literally() {
        let spaces = BookFilter::new().with_search("  ");
        assert!(!spaces.is_unconstrained());
        assert!(ids(&spaces).is_empty());

        assert!(ids(&BookFilter::new().with_search(" hobbit")).contains(&1));
        assert!(ids(&BookFilter::new().with_search("hobbit ")).is_empty());
        assert!(ids(&BookFilter::new().with_search("the hobbit ")).is_empty());
    }

    #[test]
    fn every_search_hit_contains_the_text() {
        for text in ["hobbit", " hobbit", "hobbit ", " ", "the g", "TOLKIEN"] {
            let needle = text.to_lowercase();
            let filter = BookFilter::new().with_search(text);
            for book in shelf().iter().filter(|book| filter.matches(book)) {
                assert!(
                    book.title.to_lowercase().contains(&needle)
                        || book.author.to_lowercase().contains(&needle),
                    "{text:?} matched {}",
                    book.title
                );
            }
        }
    }

    #[test]
    fn combined_criteria_intersect() {
        let genre = ids(&BookFilter::new().with_genre("Fantasy"));
        let kids = ids(&BookFilter::new().with_age_group(AgeGroup::SmallKids));
        let both = ids(
            &BookFilter::new()
                .with_genre("Fantasy")
                .with_age_group(AgeGroup::SmallKids),
        );
        let expected: Vec<i64> = genre.into_iter().filter(|id| kids.contains(id)).collect();
        assert_eq!(both, expected);
        assert_eq!(both, vec![4]);
    }

    #[test]
    fn search_matches_non_ascii_case_insensitively() {
        let entry = book(9, "Élan", "Zoë", "Fiction", AgeGroup::TeensAndAdults);
        assert!(BookFilter::new().with_search("élan").matches(&entry));
        assert!(BookFilter::new().with_search("ZOË").matches(&entry));
    }

    #[test]
    fn summary_counts_genres_and_authors() {
        let summary = summarize(&shelf());
        assert_eq!(summary.total_books, 4);
        assert_eq!(summary.unique_genres, 3);
        assert_eq!(summary.unique_authors, 4);
        assert_eq!(summary.books_per_genre.get("Fantasy"), Some(&2));
        assert_eq!(summarize(&[]), CatalogSummary::default());
    }
}
