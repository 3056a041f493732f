// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// Emitted when a book is accepted into the catalog
///
/// Subscribers typically re-project the sorted view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_id: Uuid,
    pub title: Option<String>,
}

impl BookAdded {
    pub fn new(book_id: Uuid, title: Option<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_id,
            title,
        }
    }
}

impl DomainEvent for BookAdded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "BookAdded"
    }
}

/// Emitted after a batch of deletions commits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_ids: Vec<Uuid>,
}

impl BooksDeleted {
    pub fn new(book_ids: Vec<Uuid>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_ids,
        }
    }
}

impl DomainEvent for BooksDeleted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "BooksDeleted"
    }
}
