use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Genres offered by the add-book form picker.
pub const GENRES: [&str; 8] = [
    "Adventure", "Thriller", "Fantasy", "Horror", "Kids", "Mystery", "Poetry", "Romance",
];

/// One catalog entry.
///
/// A Book is immutable after creation: it is built once by the catalog
/// service and destroyed by deletion, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Internal immutable identifier, assigned by the store, never reused
    pub id: Uuid,

    /// Title as entered; `None` means unset (presentation supplies the fallback)
    pub title: Option<String>,

    /// Author as entered; `None` means unset
    pub author: Option<String>,

    /// Genre as picked; `None` means unset
    pub genre: Option<String>,

    /// User rating, always within [1,5] for any stored Book
    pub rating: u8,

    /// Free-form review text, may be empty
    pub review: String,

    /// Insertion timestamp, assigned by the store, immutable thereafter
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Create a new Book entity
    /// This is the only way to construct a Book; `created_at` is supplied
    /// by the store so the insertion-order monotonicity invariant holds.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        genre: Option<String>,
        rating: u8,
        review: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            genre,
            rating,
            review,
            created_at,
        }
    }
}
