//! Typed record store
//!
//! Composes the codec and the generic record file into the entity-level
//! protocol shared by the book, member, and lending stores: next-ID
//! assignment, typed append/scan, first-active-match lookup, in-place
//! rewrite, and byte-preserving soft delete.

use std::marker::PhantomData;
use std::path::Path;

use super::codec::{self, FixedRecord, Status};
use super::errors::{StoreError, StoreResult};
use super::file::RecordFile;

/// A record file bound to one schema.
pub struct RecordStore<R: FixedRecord> {
    file: RecordFile,
    _schema: PhantomData<R>,
}

impl<R: FixedRecord> RecordStore<R> {
    /// Opens the store file, creating it empty if absent.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Self {
            file: RecordFile::open_or_create(path, R::RECORD_SIZE)?,
            _schema: PhantomData,
        })
    }

    /// Next ID to assign: last stored ID + 1, counting deleted records.
    ///
    /// IDs are never reused; a fully empty store starts at 1.
    pub fn next_id(&self) -> StoreResult<i32> {
        Ok(self.file.last_id()? + 1)
    }

    /// Appends one encoded record, returning its byte offset.
    pub fn append(&self, record: &R) -> StoreResult<u64> {
        self.file.append(&record.encode())
    }

    /// Overwrites the record at `offset` in place.
    pub fn rewrite(&self, offset: u64, record: &R) -> StoreResult<()> {
        self.file.rewrite_at(offset, &record.encode())
    }

    /// Decoding scan over every record in file order.
    pub fn scan(&self) -> StoreResult<impl Iterator<Item = StoreResult<(u64, R)>>> {
        Ok(self.file.scan()?.map(|item| {
            let (offset, buf) = item?;
            Ok((offset, R::decode(&buf)?))
        }))
    }

    /// Decoded records whose status passes `filter`, in file order.
    pub fn list_where(&self, filter: impl Fn(Status) -> bool) -> StoreResult<Vec<R>> {
        let mut out = Vec::new();
        for item in self.scan()? {
            let (_, record) = item?;
            if filter(record.status()) {
                out.push(record);
            }
        }
        Ok(out)
    }

    /// Linear scan for the first record with the given status byte and
    /// ID.
    ///
    /// Matches on raw bytes and decodes only the hit, then
    /// short-circuits. Under the ID-never-reused invariant at most one
    /// record can match.
    pub fn find_with_status(&self, id: i32, status: Status) -> StoreResult<Option<(u64, R)>> {
        for item in self.file.scan()? {
            let (offset, buf) = item?;
            if buf[0] == status.as_byte() && codec::record_id(&buf)? == id {
                return Ok(Some((offset, R::decode(&buf)?)));
            }
        }
        Ok(None)
    }

    /// First active record with the given ID, or `None`.
    pub fn find_active(&self, id: i32) -> StoreResult<Option<(u64, R)>> {
        self.find_with_status(id, Status::Active)
    }

    /// First active record with the given ID, or `NotFound`.
    pub fn get_active(&self, id: i32) -> StoreResult<(u64, R)> {
        self.find_active(id)?
            .ok_or_else(|| StoreError::not_found(R::ENTITY, id))
    }

    /// Rewrites only the status byte of the first active record with the
    /// given ID to `Deleted`, leaving every other byte untouched.
    ///
    /// Works on raw bytes so that provenance is retained even when a
    /// string field holds a truncation-damaged UTF-8 prefix.
    pub fn soft_delete(&self, id: i32) -> StoreResult<()> {
        for item in self.file.scan()? {
            let (offset, mut buf) = item?;
            if buf[0] == Status::Active.as_byte() && codec::record_id(&buf)? == id {
                buf[0] = Status::Deleted.as_byte();
                return self.file.rewrite_at(offset, &buf);
            }
        }
        Err(StoreError::not_found(R::ENTITY, id))
    }
}
