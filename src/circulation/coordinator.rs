//! Lending coordinator
//!
//! State machine per lending record: Borrowed -> Returned (terminal).
//! No other transitions, no cancellation.

use chrono::Utc;

use crate::books::{BookPatch, BookStore};
use crate::config::LibraryConfig;
use crate::lendings::{Lending, LendingStore};
use crate::members::MemberStore;
use crate::observability::{Logger, Severity};
use crate::store::{StoreError, StoreResult};

use super::fines::late_fine;

/// Coordinates borrow and return across the three stores.
pub struct Circulation {
    books: BookStore,
    members: MemberStore,
    lendings: LendingStore,
}

impl Circulation {
    /// Opens all three stores at the configured paths.
    pub fn open(config: &LibraryConfig) -> StoreResult<Self> {
        Ok(Self {
            books: BookStore::open(&config.books_file)?,
            members: MemberStore::open(&config.members_file)?,
            lendings: LendingStore::open(&config.lendings_file)?,
        })
    }

    /// Borrows a book for a member at the current wall-clock time.
    pub fn borrow(&self, book_id: i32, member_id: i32) -> StoreResult<i32> {
        self.borrow_at(book_id, member_id, wall_clock())
    }

    /// Borrow with an explicit clock.
    ///
    /// Checks the book (active), the member (active), and the stock
    /// level, then performs two sequential writes: append the Borrowed
    /// lending record, then decrement the book quantity. No rollback is
    /// attempted if the second write fails after the first succeeds.
    pub fn borrow_at(&self, book_id: i32, member_id: i32, now: f64) -> StoreResult<i32> {
        let (_, book) = self.books.find_by_id(book_id)?;
        self.members.find_by_id(member_id)?;

        if book.quantity <= 0 {
            return Err(StoreError::OutOfStock { id: book_id });
        }

        let lending_id = self.lendings.create(book_id, member_id, now)?;
        self.books.update(
            book_id,
            BookPatch {
                quantity: Some(book.quantity - 1),
                ..Default::default()
            },
        )?;

        Logger::log(
            Severity::Info,
            "lending_created",
            &[
                ("lending_id", &lending_id.to_string()),
                ("book_id", &book_id.to_string()),
                ("member_id", &member_id.to_string()),
            ],
        );
        Ok(lending_id)
    }

    /// Returns a lending at the current wall-clock time, yielding the
    /// fine owed.
    pub fn return_lending(&self, lending_id: i32) -> StoreResult<i64> {
        self.return_lending_at(lending_id, wall_clock())
    }

    /// Return with an explicit clock.
    ///
    /// Fails `NotFound` unless the lending exists and is still Borrowed.
    /// Rewrites it as Returned, then increments the book quantity. The
    /// book is matched against active books only; if it was deleted in
    /// the meantime, the increment is skipped (logged, never an error).
    pub fn return_lending_at(&self, lending_id: i32, now: f64) -> StoreResult<i64> {
        let (offset, lending) = self
            .lendings
            .find_borrowed(lending_id)?
            .ok_or_else(|| StoreError::not_found("lending", lending_id))?;

        let fine = late_fine(lending.borrow_ts, now);
        self.lendings.mark_returned(offset, &lending, now)?;

        match self.books.find_active(lending.book_id)? {
            Some((_, book)) => {
                self.books.update(
                    book.id,
                    BookPatch {
                        quantity: Some(book.quantity + 1),
                        ..Default::default()
                    },
                )?;
            }
            None => {
                Logger::log(
                    Severity::Warn,
                    "stock_restore_skipped",
                    &[
                        ("lending_id", &lending_id.to_string()),
                        ("book_id", &lending.book_id.to_string()),
                    ],
                );
            }
        }

        Logger::log(
            Severity::Info,
            "lending_returned",
            &[
                ("lending_id", &lending_id.to_string()),
                ("fine", &fine.to_string()),
            ],
        );
        Ok(fine)
    }

    /// Every Borrowed or Returned lending, in file order. Straight scan,
    /// no joins.
    pub fn history(&self) -> StoreResult<Vec<Lending>> {
        self.lendings.history()
    }
}

/// Fractional seconds since epoch.
fn wall_clock() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DAY: f64 = 86_400.0;
    const T0: f64 = 1_700_000_000.0;

    fn setup(dir: &TempDir) -> (LibraryConfig, Circulation) {
        let config = LibraryConfig::in_dir(dir.path());
        let circulation = Circulation::open(&config).unwrap();
        (config, circulation)
    }

    #[test]
    fn test_borrow_unknown_book_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (_, circulation) = setup(&dir);

        let err = circulation.borrow_at(1, 1, T0).unwrap_err();
        assert_eq!(err.to_string(), "no active book with id 1");
        assert!(circulation.history().unwrap().is_empty());
    }

    #[test]
    fn test_borrow_unknown_member_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (config, circulation) = setup(&dir);

        BookStore::open(&config.books_file)
            .unwrap()
            .create("i", "t", "a", 1)
            .unwrap();

        let err = circulation.borrow_at(1, 5, T0).unwrap_err();
        assert_eq!(err.to_string(), "no active member with id 5");
        assert!(circulation.history().unwrap().is_empty());
    }

    #[test]
    fn test_borrow_out_of_stock_creates_no_lending() {
        let dir = TempDir::new().unwrap();
        let (config, circulation) = setup(&dir);

        BookStore::open(&config.books_file)
            .unwrap()
            .create("i", "t", "a", 0)
            .unwrap();
        MemberStore::open(&config.members_file)
            .unwrap()
            .create("Alice", "111")
            .unwrap();

        let err = circulation.borrow_at(1, 1, T0).unwrap_err();
        assert!(matches!(err, StoreError::OutOfStock { id: 1 }));
        assert!(circulation.history().unwrap().is_empty());
    }

    #[test]
    fn test_borrow_decrements_stock() {
        let dir = TempDir::new().unwrap();
        let (config, circulation) = setup(&dir);

        let books = BookStore::open(&config.books_file).unwrap();
        books.create("i", "t", "a", 3).unwrap();
        MemberStore::open(&config.members_file)
            .unwrap()
            .create("Alice", "111")
            .unwrap();

        let lending_id = circulation.borrow_at(1, 1, T0).unwrap();
        assert_eq!(lending_id, 1);

        let (_, book) = books.find_by_id(1).unwrap();
        assert_eq!(book.quantity, 2);

        let history = circulation.history().unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].is_borrowed());
        assert_eq!(history[0].borrow_ts, T0);
        assert_eq!(history[0].return_ts, 0.0);
    }

    #[test]
    fn test_return_unknown_lending_mutates_nothing() {
        let dir = TempDir::new().unwrap();
        let (config, circulation) = setup(&dir);

        let books = BookStore::open(&config.books_file).unwrap();
        books.create("i", "t", "a", 3).unwrap();

        let err = circulation.return_lending_at(42, T0).unwrap_err();
        assert_eq!(err.to_string(), "no active lending with id 42");

        let (_, book) = books.find_by_id(1).unwrap();
        assert_eq!(book.quantity, 3);
    }

    #[test]
    fn test_return_twice_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (config, circulation) = setup(&dir);

        BookStore::open(&config.books_file)
            .unwrap()
            .create("i", "t", "a", 1)
            .unwrap();
        MemberStore::open(&config.members_file)
            .unwrap()
            .create("Alice", "111")
            .unwrap();

        let lending_id = circulation.borrow_at(1, 1, T0).unwrap();
        circulation.return_lending_at(lending_id, T0 + DAY).unwrap();

        let err = circulation
            .return_lending_at(lending_id, T0 + DAY)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_return_computes_fine_and_restores_stock() {
        let dir = TempDir::new().unwrap();
        let (config, circulation) = setup(&dir);

        let books = BookStore::open(&config.books_file).unwrap();
        books.create("i", "t", "a", 1).unwrap();
        MemberStore::open(&config.members_file)
            .unwrap()
            .create("Alice", "111")
            .unwrap();

        let lending_id = circulation.borrow_at(1, 1, T0).unwrap();

        let fine = circulation
            .return_lending_at(lending_id, T0 + 10.0 * DAY)
            .unwrap();
        assert_eq!(fine, 15);

        let (_, book) = books.find_by_id(1).unwrap();
        assert_eq!(book.quantity, 1);

        let history = circulation.history().unwrap();
        assert!(history[0].is_returned());
        assert_eq!(history[0].return_ts, T0 + 10.0 * DAY);
    }

    #[test]
    fn test_return_skips_increment_for_deleted_book() {
        let dir = TempDir::new().unwrap();
        let (config, circulation) = setup(&dir);

        let books = BookStore::open(&config.books_file).unwrap();
        books.create("i", "t", "a", 1).unwrap();
        MemberStore::open(&config.members_file)
            .unwrap()
            .create("Alice", "111")
            .unwrap();

        let lending_id = circulation.borrow_at(1, 1, T0).unwrap();
        books.soft_delete(1).unwrap();

        // increment silently skipped, return still succeeds
        let fine = circulation.return_lending_at(lending_id, T0 + DAY).unwrap();
        assert_eq!(fine, 0);

        let history = circulation.history().unwrap();
        assert!(history[0].is_returned());
        assert!(books.find_active(1).unwrap().is_none());
    }
}
