//! Generic fixed-record file
//!
//! Sequential fixed-record file abstraction shared by all three entity
//! stores. A `RecordFile` owns a path and a record size; every operation
//! opens the file, does its work, and releases the handle before
//! returning. Exactly one process is assumed to touch the data files at a
//! time; there is no locking discipline.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::codec;
use super::errors::{StoreError, StoreResult};

/// A file of fixed-size records.
///
/// Grows by whole-record appends only; edits and soft deletes rewrite a
/// record in place at its original offset.
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
    record_size: usize,
}

impl RecordFile {
    /// Opens the store file, creating an empty file if absent.
    ///
    /// Never errors on a missing file.
    pub fn open_or_create(path: &Path, record_size: usize) -> StoreResult<Self> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(StoreError::Io)?;
        Ok(Self {
            path: path.to_path_buf(),
            record_size,
        })
    }

    /// Returns the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the fixed record size in bytes.
    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Current file length; a file deleted out from under us counts as
    /// empty, matching the empty-store contract.
    fn file_len(&self) -> StoreResult<u64> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Returns the ID of the final record, or 0 for an empty or absent
    /// file.
    ///
    /// Seeks `record_size` back from end-of-file and decodes only the ID
    /// field, so next-ID assignment is O(1) regardless of store size.
    pub fn last_id(&self) -> StoreResult<i32> {
        let len = self.file_len()?;
        if len == 0 {
            return Ok(0);
        }
        if len % self.record_size as u64 != 0 {
            return Err(StoreError::malformed(format!(
                "{}: file length {} is not a multiple of record size {}",
                self.path.display(),
                len,
                self.record_size
            )));
        }

        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::End(-(self.record_size as i64)))?;
        let mut buf = vec![0u8; self.record_size];
        file.read_exact(&mut buf)?;
        codec::record_id(&buf)
    }

    /// Appends one fixed-size record at end-of-file, returning its byte
    /// offset.
    pub fn append(&self, record_bytes: &[u8]) -> StoreResult<u64> {
        self.check_record_len(record_bytes)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let offset = file.metadata()?.len();
        file.write_all(record_bytes)?;
        file.sync_all()?;
        Ok(offset)
    }

    /// Overwrites exactly one record at the given offset, preserving file
    /// length and all other records.
    ///
    /// Used both for field edits and for status-byte (soft-delete)
    /// changes.
    pub fn rewrite_at(&self, offset: u64, record_bytes: &[u8]) -> StoreResult<()> {
        self.check_record_len(record_bytes)?;

        let len = self.file_len()?;
        if offset % self.record_size as u64 != 0 || offset + self.record_size as u64 > len {
            return Err(StoreError::malformed(format!(
                "{}: rewrite offset {} is not a record boundary within {} bytes",
                self.path.display(),
                offset,
                len
            )));
        }

        let mut file = OpenOptions::new().write(true).open(&self.path)?;
        file.seek(SeekFrom::Start(offset))?;
        file.write_all(record_bytes)?;
        file.sync_all()?;
        Ok(())
    }

    /// Reads every record in file order from the start.
    ///
    /// Restartable: each call re-reads from offset 0. An empty trailing
    /// read stops cleanly; a short non-empty trailing read is store
    /// corruption.
    pub fn scan(&self) -> StoreResult<RawScan> {
        let file = File::open(&self.path)?;
        Ok(RawScan {
            reader: BufReader::new(file),
            record_size: self.record_size,
            offset: 0,
        })
    }

    fn check_record_len(&self, record_bytes: &[u8]) -> StoreResult<()> {
        if record_bytes.len() != self.record_size {
            return Err(StoreError::malformed(format!(
                "write of {} bytes does not match record size {}",
                record_bytes.len(),
                self.record_size
            )));
        }
        Ok(())
    }
}

/// Iterator over `(offset, record_bytes)` pairs of a store file.
pub struct RawScan {
    reader: BufReader<File>,
    record_size: usize,
    offset: u64,
}

impl Iterator for RawScan {
    type Item = StoreResult<(u64, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = vec![0u8; self.record_size];
        let mut filled = 0usize;

        while filled < self.record_size {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(StoreError::Io(e))),
            }
        }

        if filled == 0 {
            return None;
        }
        if filled < self.record_size {
            return Some(Err(StoreError::malformed(format!(
                "short trailing read of {} bytes at offset {}, record size {}",
                filled, self.offset, self.record_size
            ))));
        }

        let offset = self.offset;
        self.offset += self.record_size as u64;
        Some(Ok((offset, buf)))
    }
}
