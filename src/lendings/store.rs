//! Lending store operations

use std::path::Path;

use crate::store::{RecordStore, Status, StoreResult};

use super::record::{Lending, NOT_RETURNED};

/// Entity store for lendings, backed by `lendings.dat`.
///
/// Lending IDs are sequential and scoped to this store only. There is no
/// delete operation; the only transition is Borrowed to Returned.
pub struct LendingStore {
    records: RecordStore<Lending>,
}

impl LendingStore {
    /// Opens the lending store, creating the file if absent.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Self {
            records: RecordStore::open(path)?,
        })
    }

    /// Appends a new Borrowed lending record, returning its ID.
    ///
    /// The foreign keys are stored as given; only borrow-time checks in
    /// the coordinator validate them against the other stores.
    pub fn create(&self, book_id: i32, member_id: i32, borrow_ts: f64) -> StoreResult<i32> {
        let id = self.records.next_id()?;
        let lending = Lending {
            id,
            status: Status::Active,
            book_id,
            member_id,
            borrow_ts,
            return_ts: NOT_RETURNED,
        };
        self.records.append(&lending)?;
        Ok(id)
    }

    /// First lending with the given ID still in the Borrowed state.
    pub fn find_borrowed(&self, lending_id: i32) -> StoreResult<Option<(u64, Lending)>> {
        self.records.find_with_status(lending_id, Status::Active)
    }

    /// Rewrites the lending at `offset` as Returned with the given
    /// return timestamp.
    pub(crate) fn mark_returned(
        &self,
        offset: u64,
        lending: &Lending,
        return_ts: f64,
    ) -> StoreResult<()> {
        let returned = Lending {
            status: Status::Returned,
            return_ts,
            ..lending.clone()
        };
        self.records.rewrite(offset, &returned)
    }

    /// Every Borrowed or Returned lending, in file order.
    pub fn history(&self) -> StoreResult<Vec<Lending>> {
        self.records
            .list_where(|s| matches!(s, Status::Active | Status::Returned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> LendingStore {
        LendingStore::open(&dir.path().join("lendings.dat")).unwrap()
    }

    #[test]
    fn test_create_starts_borrowed_with_sentinel() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let id = store.create(3, 9, 1_700_000_000.0).unwrap();
        assert_eq!(id, 1);

        let (_, lending) = store.find_borrowed(id).unwrap().unwrap();
        assert!(lending.is_borrowed());
        assert_eq!(lending.book_id, 3);
        assert_eq!(lending.member_id, 9);
        assert_eq!(lending.return_ts, 0.0);
    }

    #[test]
    fn test_mark_returned_is_terminal() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let id = store.create(3, 9, 1_700_000_000.0).unwrap();
        let (offset, lending) = store.find_borrowed(id).unwrap().unwrap();
        store
            .mark_returned(offset, &lending, 1_700_100_000.0)
            .unwrap();

        assert!(store.find_borrowed(id).unwrap().is_none());
        let history = store.history().unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].is_returned());
        assert_eq!(history[0].return_ts, 1_700_100_000.0);
        // borrow timestamp is preserved through the transition
        assert_eq!(history[0].borrow_ts, 1_700_000_000.0);
    }

    #[test]
    fn test_history_includes_borrowed_and_returned() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let first = store.create(1, 1, 100.0).unwrap();
        store.create(2, 1, 200.0).unwrap();

        let (offset, lending) = store.find_borrowed(first).unwrap().unwrap();
        store.mark_returned(offset, &lending, 300.0).unwrap();

        let history = store.history().unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].is_returned());
        assert!(history[1].is_borrowed());
    }
}
