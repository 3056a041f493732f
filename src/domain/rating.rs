// src/domain/rating.rs
//
// Rating codec: two independent, pure mappings between the bounded
// integer rating and its discrete display/input representations.
// No shared state between the two.

use serde::{Deserialize, Serialize};

use crate::domain::book::MAX_RATING;

/// Discrete five-symbol display scale for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingSymbol {
    Dreadful,
    Disliked,
    Indifferent,
    Liked,
    Loved,
}

impl RatingSymbol {
    /// Ratings 1 through 4 map to four distinct symbols; every other value
    /// (5 included) falls through to the top symbol.
    pub fn for_rating(rating: u8) -> Self {
        match rating {
            1 => RatingSymbol::Dreadful,
            2 => RatingSymbol::Disliked,
            3 => RatingSymbol::Indifferent,
            4 => RatingSymbol::Liked,
            _ => RatingSymbol::Loved,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            RatingSymbol::Dreadful => "☹️",
            RatingSymbol::Disliked => "😒",
            RatingSymbol::Indifferent => "😐",
            RatingSymbol::Liked => "🙂",
            RatingSymbol::Loved => "🤩",
        }
    }
}

impl std::fmt::Display for RatingSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Input state for a row of selectable star positions.
///
/// Tapping position `k` sets the bound value to `k`. Positions at or
/// below the current value render "on", positions above render "off".
/// Only positions `1..=maximum` exist; `select` ignores anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    value: u8,
    maximum: u8,
}

impl StarRating {
    pub fn new(value: u8) -> Self {
        Self::with_maximum(value, MAX_RATING)
    }

    pub fn with_maximum(value: u8, maximum: u8) -> Self {
        Self { value, maximum }
    }

    pub fn value(self) -> u8 {
        self.value
    }

    pub fn maximum(self) -> u8 {
        self.maximum
    }

    /// Selectable positions, in display order.
    pub fn positions(self) -> impl Iterator<Item = u8> {
        1..=self.maximum
    }

    /// Tap position `k`; the bound value becomes `k`.
    pub fn select(&mut self, position: u8) {
        if (1..=self.maximum).contains(&position) {
            self.value = position;
        }
    }

    /// Whether the star at `position` renders in the "on" state.
    pub fn is_filled(self, position: u8) -> bool {
        (1..=self.value).contains(&position)
    }
}

impl Default for StarRating {
    /// The add form starts with a mid-scale rating preselected.
    fn default() -> Self {
        Self::new(3)
    }
}
