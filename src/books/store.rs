//! Book store operations

use std::path::Path;

use crate::store::{RecordStore, Status, StoreResult};

use super::record::Book;

/// Partial update for a book; `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub quantity: Option<i16>,
}

/// Entity store for books, backed by `books.dat`.
pub struct BookStore {
    records: RecordStore<Book>,
}

impl BookStore {
    /// Opens the book store, creating the file if absent.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Self {
            records: RecordStore::open(path)?,
        })
    }

    /// Appends a new active book with the next sequential ID.
    ///
    /// Business ranges (a sensible quantity, a plausible ISBN) are the
    /// caller's concern; the store enforces only field widths.
    pub fn create(
        &self,
        isbn: &str,
        title: &str,
        author: &str,
        quantity: i16,
    ) -> StoreResult<i32> {
        let id = self.records.next_id()?;
        let book = Book {
            id,
            status: Status::Active,
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        };
        self.records.append(&book)?;
        Ok(id)
    }

    /// Active books in file order.
    pub fn list_active(&self) -> StoreResult<Vec<Book>> {
        self.records.list_where(|s| s == Status::Active)
    }

    /// First active book with the given ID, or `NotFound`.
    pub fn find_by_id(&self, id: i32) -> StoreResult<(u64, Book)> {
        self.records.get_active(id)
    }

    /// First active book with the given ID, or `None`.
    pub fn find_active(&self, id: i32) -> StoreResult<Option<(u64, Book)>> {
        self.records.find_active(id)
    }

    /// Merges the patch over the stored record and rewrites it at the
    /// same offset with the same ID and status.
    pub fn update(&self, id: i32, patch: BookPatch) -> StoreResult<()> {
        let (offset, existing) = self.records.get_active(id)?;
        let updated = Book {
            id: existing.id,
            status: existing.status,
            isbn: patch.isbn.unwrap_or(existing.isbn),
            title: patch.title.unwrap_or(existing.title),
            author: patch.author.unwrap_or(existing.author),
            quantity: patch.quantity.unwrap_or(existing.quantity),
        };
        self.records.rewrite(offset, &updated)
    }

    /// Tombstones the book; all other record bytes are preserved,
    /// including the old quantity.
    pub fn soft_delete(&self, id: i32) -> StoreResult<()> {
        self.records.soft_delete(id)
    }
}
