// src/repositories/book_repository.rs
//
// Book persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::db::ConnectionPool;
use crate::domain::book::Book;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, automock)]
pub trait BookRepository: Send + Sync {
    /// Persist a new Book. The row must not already exist.
    fn save(&self, book: &Book) -> AppResult<()>;

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    /// All Books in insertion order.
    fn list_all(&self) -> AppResult<Vec<Book>>;

    /// Remove the given Books in a single transaction. If any id is
    /// missing, nothing is removed and `NotFound` is returned.
    fn delete_many(&self, ids: &[Uuid]) -> AppResult<()>;

    /// Timestamp of the most recently inserted Book, if any.
    fn latest_created_at(&self) -> AppResult<Option<DateTime<Utc>>>;

    fn count(&self) -> AppResult<u64>;
}

pub struct SqliteBookRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteBookRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Book - returns rusqlite::Error for query_map compatibility
    fn row_to_book(row: &Row) -> Result<Book, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let title: Option<String> = row.get("title")?;
        let author: Option<String> = row.get("author")?;
        let genre: Option<String> = row.get("genre")?;

        let rating: i64 = row.get("rating")?;
        let rating = u8::try_from(rating)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let review: String = row.get("review")?;

        let created_at_str: String = row.get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Book {
            id,
            title,
            author,
            genre,
            rating,
            review,
            created_at,
        })
    }
}

impl BookRepository for SqliteBookRepository {
    fn save(&self, book: &Book) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO books (id, title, author, genre, rating, review, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                book.id.to_string(),
                book.title,
                book.author,
                book.genre,
                book.rating as i64,
                book.review,
                book.created_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, author, genre, rating, review, created_at
             FROM books WHERE id = ?1",
        )?;

        match stmt.query_row(params![id.to_string()], Self::row_to_book) {
            Ok(book) => Ok(Some(book)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Book>> {
        let conn = self.pool.get()?;

        // rowid preserves insertion order; the sorted view relies on that
        // for its stability tie-break.
        let mut stmt = conn.prepare(
            "SELECT id, title, author, genre, rating, review, created_at
             FROM books
             ORDER BY rowid",
        )?;

        let books: Vec<Book> = stmt
            .query_map([], Self::row_to_book)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(books)
    }

    fn delete_many(&self, ids: &[Uuid]) -> AppResult<()> {
        let mut conn = self.pool.get()?;

        let tx = conn.transaction()?;
        for id in ids {
            let rows_affected =
                tx.execute("DELETE FROM books WHERE id = ?1", params![id.to_string()])?;

            if rows_affected == 0 {
                // Dropping the open transaction rolls the batch back.
                return Err(AppError::NotFound);
            }
        }
        tx.commit()?;

        Ok(())
    }

    fn latest_created_at(&self) -> AppResult<Option<DateTime<Utc>>> {
        let conn = self.pool.get()?;

        let latest: Option<String> =
            conn.query_row("SELECT MAX(created_at) FROM books", [], |row| row.get(0))?;

        let latest = latest
            .map(|s| DateTime::parse_from_rfc3339(&s).map(|dt| dt.with_timezone(&Utc)))
            .transpose()?;

        Ok(latest)
    }

    fn count(&self) -> AppResult<u64> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use chrono::Utc;

    fn repository() -> SqliteBookRepository {
        SqliteBookRepository::new(Arc::new(create_test_pool().unwrap()))
    }

    fn sample_book(title: &str) -> Book {
        Book::new(
            Some(title.to_string()),
            Some("Some author".to_string()),
            Some("Fantasy".to_string()),
            3,
            "Some review".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_save_and_get_round_trip() {
        let repo = repository();
        let book = sample_book("Dune");

        repo.save(&book).unwrap();
        let loaded = repo.get_by_id(book.id).unwrap().unwrap();

        assert_eq!(loaded, book);
    }

    #[test]
    fn test_get_missing_id_is_none() {
        let repo = repository();
        assert!(repo.get_by_id(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let repo = repository();
        let book = sample_book("Dune");

        repo.save(&book).unwrap();
        assert!(matches!(repo.save(&book), Err(AppError::Database(_))));
    }

    #[test]
    fn test_unset_fields_survive_storage() {
        let repo = repository();
        let book = Book::new(None, None, None, 2, String::new(), Utc::now());

        repo.save(&book).unwrap();
        let loaded = repo.get_by_id(book.id).unwrap().unwrap();

        assert!(loaded.title.is_none());
        assert!(loaded.author.is_none());
        assert!(loaded.genre.is_none());
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let repo = repository();
        let first = sample_book("Zen");
        let second = sample_book("Abbey Road");

        repo.save(&first).unwrap();
        repo.save(&second).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[test]
    fn test_delete_many_removes_all_requested() {
        let repo = repository();
        let keep = sample_book("Keep");
        let drop_a = sample_book("Drop A");
        let drop_b = sample_book("Drop B");

        for book in [&keep, &drop_a, &drop_b] {
            repo.save(book).unwrap();
        }

        repo.delete_many(&[drop_a.id, drop_b.id]).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep.id);
    }

    #[test]
    fn test_delete_many_rolls_back_on_missing_id() {
        let repo = repository();
        let first = sample_book("First");
        let second = sample_book("Second");

        repo.save(&first).unwrap();
        repo.save(&second).unwrap();

        let result = repo.delete_many(&[first.id, Uuid::new_v4()]);
        assert!(matches!(result, Err(AppError::NotFound)));

        // The whole batch rolled back; both rows survive.
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_latest_created_at_tracks_newest_row() {
        let repo = repository();
        assert!(repo.latest_created_at().unwrap().is_none());

        let book = sample_book("Dune");
        repo.save(&book).unwrap();

        assert_eq!(repo.latest_created_at().unwrap(), Some(book.created_at));
    }
}
