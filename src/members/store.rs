//! Member store operations

use std::path::Path;

use crate::store::{RecordStore, Status, StoreResult};

use super::record::Member;

/// Partial update for a member; `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Entity store for members, backed by `members.dat`.
pub struct MemberStore {
    records: RecordStore<Member>,
}

impl MemberStore {
    /// Opens the member store, creating the file if absent.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Self {
            records: RecordStore::open(path)?,
        })
    }

    /// Appends a new active member with the next sequential ID.
    pub fn create(&self, name: &str, phone: &str) -> StoreResult<i32> {
        let id = self.records.next_id()?;
        let member = Member {
            id,
            status: Status::Active,
            name: name.to_string(),
            phone: phone.to_string(),
        };
        self.records.append(&member)?;
        Ok(id)
    }

    /// Active members in file order.
    pub fn list_active(&self) -> StoreResult<Vec<Member>> {
        self.records.list_where(|s| s == Status::Active)
    }

    /// First active member with the given ID, or `NotFound`.
    pub fn find_by_id(&self, id: i32) -> StoreResult<(u64, Member)> {
        self.records.get_active(id)
    }

    /// Merges the patch over the stored record and rewrites it in place.
    pub fn update(&self, id: i32, patch: MemberPatch) -> StoreResult<()> {
        let (offset, existing) = self.records.get_active(id)?;
        let updated = Member {
            id: existing.id,
            status: existing.status,
            name: patch.name.unwrap_or(existing.name),
            phone: patch.phone.unwrap_or(existing.phone),
        };
        self.records.rewrite(offset, &updated)
    }

    /// Tombstones the member, preserving all other record bytes.
    pub fn soft_delete(&self, id: i32) -> StoreResult<()> {
        self.records.soft_delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> MemberStore {
        MemberStore::open(&dir.path().join("members.dat")).unwrap()
    }

    #[test]
    fn test_create_and_list() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.create("Alice", "111").unwrap(), 1);
        assert_eq!(store.create("Bob", "222").unwrap(), 2);

        let members = store.list_active().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].name, "Bob");
    }

    #[test]
    fn test_soft_delete_hides_member() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let id = store.create("Alice", "111").unwrap();
        store.soft_delete(id).unwrap();

        assert!(store.find_by_id(id).unwrap_err().is_not_found());
        assert!(store.list_active().unwrap().is_empty());
    }

    #[test]
    fn test_update_keeps_unspecified_fields() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let id = store.create("Alice", "111").unwrap();
        store
            .update(
                id,
                MemberPatch {
                    phone: Some("999".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let (_, member) = store.find_by_id(id).unwrap();
        assert_eq!(member.name, "Alice");
        assert_eq!(member.phone, "999");
    }
}
