//! Statistics aggregation over the book collection.
//!
//! Computes the summary shown by the statistics menu action: totals, read and
//! unread percentages, a genre histogram, and the oldest/newest books by
//! publication year. All figures come from one linear pass plus a stable sort
//! of the genre counts.
//!
//! Percentages are carried as `f64` and rounded to one decimal at display
//! time. When the collection is empty every percentage is zero and there is no
//! oldest or newest book.

use crate::domain::Book;
use crate::library::Library;

/// Number of books sharing one genre, with its share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreCount {
    /// Genre label exactly as entered.
    pub genre: String,

    /// Number of books with this genre.
    pub count: usize,

    /// Share of the total collection, in percent.
    pub percentage: f64,
}

/// Summary statistics for a book collection.
///
/// Produced by [`compute`]. Ordering guarantees:
///
/// - `genres` is sorted by descending count; genres with equal counts keep
///   the order in which they were first seen in the collection.
/// - `oldest` and `newest` break publication-year ties by insertion order,
///   the way a stable sort by year would: oldest is the first-inserted book
///   of the minimum year, newest the last-inserted book of the maximum year.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryStats {
    /// Total number of books.
    pub total: usize,

    /// Number of books marked read.
    pub read_count: usize,

    /// Read share of the total, in percent. Zero when the collection is empty.
    pub read_percentage: f64,

    /// Number of books not yet read.
    pub unread_count: usize,

    /// Unread share of the total, in percent. Zero when the collection is empty.
    pub unread_percentage: f64,

    /// Genre histogram, descending by count.
    pub genres: Vec<GenreCount>,

    /// Book with the smallest publication year, if any.
    pub oldest: Option<Book>,

    /// Book with the largest publication year, if any.
    pub newest: Option<Book>,
}

/// Computes summary statistics over the whole collection.
///
/// # Examples
///
/// ```
/// use shelfkeeper::domain::Book;
/// use shelfkeeper::library::{compute, Library};
///
/// let mut library = Library::new();
/// library.add(Book::new("Dune", "Frank Herbert", 1965, "SciFi", true));
/// library.add(Book::new("Hyperion", "Dan Simmons", 1989, "SciFi", true));
/// library.add(Book::new("The Hobbit", "J.R.R. Tolkien", 1937, "Fantasy", false));
///
/// let stats = compute(&library);
/// assert_eq!(stats.total, 3);
/// assert_eq!(stats.read_count, 2);
/// assert_eq!(stats.genres[0].genre, "SciFi");
/// assert_eq!(stats.oldest.unwrap().title, "The Hobbit");
/// ```
#[must_use]
pub fn compute(library: &Library) -> LibraryStats {
    let books = library.books();
    let total = books.len();

    if total == 0 {
        return LibraryStats {
            total: 0,
            read_count: 0,
            read_percentage: 0.0,
            unread_count: 0,
            unread_percentage: 0.0,
            genres: Vec::new(),
            oldest: None,
            newest: None,
        };
    }

    let read_count = books.iter().filter(|book| book.read).count();

    #[allow(clippy::cast_precision_loss)]
    let percentage_of_total = |count: usize| (count as f64 / total as f64) * 100.0;

    let read_percentage = percentage_of_total(read_count);

    // Histogram in first-seen order, then a stable sort by descending count so
    // equal counts keep that order.
    let mut genres: Vec<GenreCount> = Vec::new();
    for book in books {
        match genres.iter_mut().find(|entry| entry.genre == book.genre) {
            Some(entry) => entry.count += 1,
            None => genres.push(GenreCount {
                genre: book.genre.clone(),
                count: 1,
                percentage: 0.0,
            }),
        }
    }
    genres.sort_by(|a, b| b.count.cmp(&a.count));
    for entry in &mut genres {
        entry.percentage = percentage_of_total(entry.count);
    }

    // min_by_key keeps the first of equal years, max_by_key the last, which
    // reproduces the endpoints of a stable sort by publication year.
    let oldest = books.iter().min_by_key(|book| book.publication_year).cloned();
    let newest = books.iter().max_by_key(|book| book.publication_year).cloned();

    tracing::debug!(
        total = total,
        read_count = read_count,
        genre_count = genres.len(),
        "computed statistics"
    );

    LibraryStats {
        total,
        read_count,
        read_percentage,
        unread_count: total - read_count,
        unread_percentage: 100.0 - read_percentage,
        genres,
        oldest,
        newest,
    }
}
