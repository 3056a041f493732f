// src/lib.rs
// Bookshelf - Local-first book catalog store
//
// Architecture:
// - Domain-centric: entities, invariants, and derived views live in domains
// - Explicit: no implicit behavior, no ambient context; collaborators are
//   passed at construction
// - Durable: every accepted mutation is committed before success is reported
// - Observable: mutations emit events; views re-project on an explicit call

// ============================================================================
// MODULES
// ============================================================================

pub mod application;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_book,
    validate_rating,
    // Book
    Book,
    // Rating codec
    RatingSymbol,
    // Sorted view
    SortedView,
    StarRating,
    GENRES,
    MAX_RATING,
    MIN_RATING,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{create_event_bus, BookAdded, BooksDeleted, DomainEvent, EventBus};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, default_database_path, initialize_database, open_catalog,
    ConnectionPool,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{BookRepository, SqliteBookRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{AddBookRequest, CatalogService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::BookView;
