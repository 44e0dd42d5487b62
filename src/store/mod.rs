//! Record store subsystem for libman
//!
//! Every entity file is a sequence of fixed-width binary records. The
//! protocol is append-only growth, in-place rewrite for edits, and a
//! tombstone status byte for deletes. Deleted records are never reclaimed
//! or compacted.
//!
//! # Design Principles
//!
//! - Fixed record length per store, byte-exact, little-endian
//! - IDs strictly increasing in file order, never reused
//! - Linear scan only (no index)
//! - One file handle per operation, released on every exit path
//! - Single-process, single-writer assumption; no locking

pub(crate) mod codec;
mod errors;
mod file;
mod typed;

pub use codec::{decode_string, encode_string, record_id, FixedRecord, Status};
pub use errors::{StoreError, StoreResult};
pub use file::{RawScan, RecordFile};
pub use typed::RecordStore;
