// src/domain/sorted_view.rs
//
// Derived, read-only ordering over a catalog snapshot.
// Never a source of truth; re-project after every accepted mutation.

use crate::domain::book::Book;

/// Ordered projection of a snapshot of the catalog.
///
/// Ordering contract: ascending by `title`, ties broken by ascending
/// `author`, compared byte-wise and case-sensitively (`str`'s `Ord`).
/// Unset fields collate as the empty string. The sort is stable, so
/// entries with equal title and author keep their snapshot (insertion)
/// order. Each entry's zero-based offset within the view is the
/// coordinate the catalog service accepts for deletion.
#[derive(Debug, Clone)]
pub struct SortedView {
    entries: Vec<Book>,
}

impl SortedView {
    /// Derive the ordered projection from a snapshot.
    pub fn project(snapshot: Vec<Book>) -> Self {
        let mut entries = snapshot;
        entries.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The Book at the given ordinal offset, if in range.
    pub fn get(&self, offset: usize) -> Option<&Book> {
        self.entries.get(offset)
    }

    /// `(offset, book)` pairs in view order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Book)> {
        self.entries.iter().enumerate()
    }
}

fn sort_key(book: &Book) -> (&str, &str) {
    (
        book.title.as_deref().unwrap_or(""),
        book.author.as_deref().unwrap_or(""),
    )
}
