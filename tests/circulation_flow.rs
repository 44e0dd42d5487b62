//! End-to-end circulation tests
//!
//! Exercises the cross-store rules the coordinator must maintain:
//! quantity consistency, the Borrowed -> Returned transition, and the
//! grace-period fine policy.

use libman::books::BookStore;
use libman::circulation::Circulation;
use libman::config::LibraryConfig;
use libman::members::MemberStore;
use libman::store::StoreError;
use tempfile::TempDir;

const DAY: f64 = 86_400.0;
const T0: f64 = 1_700_000_000.0;

struct Fixture {
    config: LibraryConfig,
    circulation: Circulation,
}

fn fixture(dir: &TempDir) -> Fixture {
    let config = LibraryConfig::in_dir(dir.path());

    let books = BookStore::open(&config.books_file).unwrap();
    books.create("978-1", "Dune", "Herbert", 3).unwrap();

    let members = MemberStore::open(&config.members_file).unwrap();
    members.create("Alice", "111").unwrap();
    members.create("Bob", "222").unwrap();

    let circulation = Circulation::open(&config).unwrap();
    Fixture {
        config,
        circulation,
    }
}

#[test]
fn test_borrow_twice_then_return_after_nine_days() {
    let dir = TempDir::new().unwrap();
    let f = fixture(&dir);

    let first = f.circulation.borrow_at(1, 1, T0).unwrap();
    let second = f.circulation.borrow_at(1, 2, T0).unwrap();
    assert_eq!((first, second), (1, 2));

    let books = BookStore::open(&f.config.books_file).unwrap();
    assert_eq!(books.find_by_id(1).unwrap().1.quantity, 1);

    let history = f.circulation.history().unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|l| l.is_borrowed()));

    // two days past the seven-day grace period
    let fine = f.circulation.return_lending_at(first, T0 + 9.0 * DAY).unwrap();
    assert_eq!(fine, 10);

    assert_eq!(books.find_by_id(1).unwrap().1.quantity, 2);

    let history = f.circulation.history().unwrap();
    assert!(history[0].is_returned());
    assert!(history[1].is_borrowed());
}

#[test]
fn test_return_within_grace_period_has_no_fine() {
    let dir = TempDir::new().unwrap();
    let f = fixture(&dir);

    let lending = f.circulation.borrow_at(1, 1, T0).unwrap();
    let fine = f
        .circulation
        .return_lending_at(lending, T0 + 6.0 * DAY)
        .unwrap();
    assert_eq!(fine, 0);
}

#[test]
fn test_stock_exhaustion_blocks_further_borrows() {
    let dir = TempDir::new().unwrap();
    let f = fixture(&dir);

    f.circulation.borrow_at(1, 1, T0).unwrap();
    f.circulation.borrow_at(1, 2, T0).unwrap();
    f.circulation.borrow_at(1, 1, T0).unwrap();

    let err = f.circulation.borrow_at(1, 2, T0).unwrap_err();
    assert!(matches!(err, StoreError::OutOfStock { id: 1 }));
    assert_eq!(f.circulation.history().unwrap().len(), 3);

    // returning one copy reopens the stock
    f.circulation.return_lending_at(1, T0 + DAY).unwrap();
    assert_eq!(f.circulation.borrow_at(1, 2, T0 + DAY).unwrap(), 4);
}

#[test]
fn test_borrowing_a_deleted_book_is_not_found() {
    let dir = TempDir::new().unwrap();
    let f = fixture(&dir);

    BookStore::open(&f.config.books_file)
        .unwrap()
        .soft_delete(1)
        .unwrap();

    let err = f.circulation.borrow_at(1, 1, T0).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_lending_ids_are_scoped_to_the_lending_store() {
    let dir = TempDir::new().unwrap();
    let f = fixture(&dir);

    let books = BookStore::open(&f.config.books_file).unwrap();
    books.create("978-2", "Emma", "Austen", 1).unwrap();

    // lending IDs advance independently of book and member IDs
    assert_eq!(f.circulation.borrow_at(2, 2, T0).unwrap(), 1);
    assert_eq!(f.circulation.borrow_at(1, 1, T0).unwrap(), 2);
}

#[test]
fn test_reopen_preserves_state_across_processes() {
    let dir = TempDir::new().unwrap();
    let config;
    {
        let f = fixture(&dir);
        f.circulation.borrow_at(1, 1, T0).unwrap();
        config = f.config;
    }

    // a fresh coordinator over the same files sees the same state
    let circulation = Circulation::open(&config).unwrap();
    let history = circulation.history().unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].is_borrowed());

    let fine = circulation.return_lending_at(1, T0 + 10.0 * DAY).unwrap();
    assert_eq!(fine, 15);
}
