// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)
//
// Fallback substitution for unset fields happens here and only here;
// stored data is never substituted.

use serde::{Deserialize, Serialize};

use crate::domain::book::Book;
use crate::domain::rating::RatingSymbol;

/// Display fallback for an unset title.
pub const FALLBACK_TITLE: &str = "Unknown title";

/// Display fallback for an unset author.
pub const FALLBACK_AUTHOR: &str = "Unknown author";

/// Display fallback for an unset genre.
pub const FALLBACK_GENRE: &str = "N/A";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookView {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub rating: u8,
    pub rating_glyph: String,
    pub review: String,
    pub created_at: String,
}

impl BookView {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book
                .title
                .clone()
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            author: book
                .author
                .clone()
                .unwrap_or_else(|| FALLBACK_AUTHOR.to_string()),
            genre: book
                .genre
                .clone()
                .unwrap_or_else(|| FALLBACK_GENRE.to_string()),
            rating: book.rating,
            rating_glyph: RatingSymbol::for_rating(book.rating).glyph().to_string(),
            review: book.review.clone(),
            created_at: book.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_set_fields_pass_through_unchanged() {
        let book = Book::new(
            Some("Forever".to_string()),
            Some("Judy Blume".to_string()),
            Some("Kids".to_string()),
            5,
            "loved it".to_string(),
            Utc::now(),
        );

        let view = BookView::from_book(&book);
        assert_eq!(view.title, "Forever");
        assert_eq!(view.author, "Judy Blume");
        assert_eq!(view.genre, "Kids");
        assert_eq!(view.rating_glyph, "🤩");
        assert_eq!(view.review, "loved it");
    }

    #[test]
    fn test_unset_fields_get_the_fallback_strings() {
        let book = Book::new(None, None, None, 1, String::new(), Utc::now());

        let view = BookView::from_book(&book);
        assert_eq!(view.title, FALLBACK_TITLE);
        assert_eq!(view.author, FALLBACK_AUTHOR);
        assert_eq!(view.genre, FALLBACK_GENRE);
    }

    #[test]
    fn test_view_serializes_for_the_ui_boundary() {
        let book = Book::new(
            Some("Dune".to_string()),
            None,
            None,
            4,
            String::new(),
            Utc::now(),
        );

        let json = serde_json::to_string(&BookView::from_book(&book)).unwrap();
        assert!(json.contains("\"title\":\"Dune\""));
        assert!(json.contains(FALLBACK_AUTHOR));
    }
}
