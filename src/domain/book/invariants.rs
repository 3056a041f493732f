use super::entity::Book;
use crate::domain::{DomainError, DomainResult};

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating; also the number of selectable star positions.
pub const MAX_RATING: u8 = 5;

/// Validates all Book invariants
/// These are the absolute rules that must hold for a Book to be stored
pub fn validate_book(book: &Book) -> DomainResult<()> {
    validate_rating(book.rating)
}

/// Rating must lie within [MIN_RATING, MAX_RATING]; out-of-range values
/// are rejected, never clamped.
pub fn validate_rating(rating: u8) -> DomainResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(DomainError::InvariantViolation(format!(
            "rating {} is outside the allowed range [{}, {}]",
            rating, MIN_RATING, MAX_RATING
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Book domain:
///
/// 1. Identity (UUID) is immutable, unique, and never reused after deletion
/// 2. rating is within [1,5] for every Book that exists in the store
/// 3. created_at is assigned once by the store and never changes
/// 4. created_at is monotonically non-decreasing with insertion order
/// 5. Unset text fields stay unset; fallback strings are presentation-only
/// 6. A Book is never mutated in place after creation
