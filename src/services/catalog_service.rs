// src/services/catalog_service.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::domain::book::{validate_rating, Book};
use crate::domain::sorted_view::SortedView;
use crate::error::{AppError, AppResult};
use crate::events::{BookAdded, BooksDeleted, EventBus};
use crate::repositories::BookRepository;

/// Candidate fields for a new catalog entry, as entered in the add form.
/// Identity and timestamp are assigned by the service, never the caller.
#[derive(Debug, Clone, Default)]
pub struct AddBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub rating: u8,
    pub review: String,
}

/// The catalog's durable store facade.
///
/// Sole owner of the book collection and its durability: every accepted
/// mutation is committed to storage before the call returns. All
/// collaborators arrive explicitly at construction.
pub struct CatalogService {
    book_repo: Arc<dyn BookRepository>,
    event_bus: Arc<EventBus>,
}

impl CatalogService {
    pub fn new(book_repo: Arc<dyn BookRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            book_repo,
            event_bus,
        }
    }

    /// Accept a candidate into the catalog.
    ///
    /// Assigns a fresh id and timestamp, persists, emits [`BookAdded`],
    /// and returns the stored Book. A rejected candidate leaves the
    /// collection and storage exactly as they were.
    pub fn add_book(&self, request: AddBookRequest) -> AppResult<Book> {
        // Reject before touching storage so failure provably has no
        // partial effect.
        validate_rating(request.rating).map_err(AppError::Domain)?;

        let created_at = self.next_created_at()?;
        let book = Book::new(
            request.title,
            request.author,
            request.genre,
            request.rating,
            request.review,
            created_at,
        );

        self.book_repo.save(&book)?;

        self.event_bus
            .emit(BookAdded::new(book.id, book.title.clone()));

        Ok(book)
    }

    /// Read-only snapshot of the collection, in insertion order.
    /// Callers re-order through [`SortedView::project`].
    pub fn list_books(&self) -> AppResult<Vec<Book>> {
        self.book_repo.list_all()
    }

    pub fn get_book(&self, book_id: Uuid) -> AppResult<Option<Book>> {
        self.book_repo.get_by_id(book_id)
    }

    pub fn count_books(&self) -> AppResult<u64> {
        self.book_repo.count()
    }

    /// Project the current collection into its sorted view.
    pub fn sorted_view(&self) -> AppResult<SortedView> {
        Ok(SortedView::project(self.book_repo.list_all()?))
    }

    /// Delete the books at the given offsets of `view`.
    ///
    /// Every offset is resolved against the supplied view before any
    /// removal, because removal shifts subsequent positions. The batch is
    /// atomic: an offset out of range for the view, or a view entry no
    /// longer present in the store, fails the whole call with `NotFound`
    /// and leaves the collection unchanged.
    pub fn delete_at_positions(
        &self,
        offsets: &BTreeSet<usize>,
        view: &SortedView,
    ) -> AppResult<()> {
        let mut book_ids = Vec::with_capacity(offsets.len());
        for &offset in offsets {
            let book = view.get(offset).ok_or(AppError::NotFound)?;
            book_ids.push(book.id);
        }

        if book_ids.is_empty() {
            return Ok(());
        }

        self.book_repo.delete_many(&book_ids)?;
        debug!("deleted {} book(s) from the catalog", book_ids.len());

        self.event_bus.emit(BooksDeleted::new(book_ids));

        Ok(())
    }

    /// Store-assigned insertion timestamp.
    ///
    /// Clamped against the latest persisted timestamp so `created_at`
    /// stays monotonically non-decreasing even across a backwards clock
    /// step.
    fn next_created_at(&self) -> AppResult<chrono::DateTime<Utc>> {
        let now = Utc::now();
        Ok(match self.book_repo.latest_created_at()? {
            Some(latest) if latest > now => latest,
            _ => now,
        })
    }
}
