//! Fixed-record codec
//!
//! Deterministic mapping between a typed record and a fixed-length byte
//! buffer. Every schema shares the same prefix:
//!
//! ```text
//! +--------------+
//! | Status       | (u8: 'A' active/borrowed, 'D' deleted, 'R' returned)
//! +--------------+
//! | Record ID    | (i32 LE)
//! +--------------+
//! | Entity body  | (schema-specific fixed widths)
//! +--------------+
//! ```
//!
//! All scalars are little-endian. String fields are UTF-8, left-justified,
//! zero-padded to their capacity, and silently truncated at capacity in
//! bytes (not characters) on encode. Truncation is documented lossy
//! behavior, never an error.

use super::errors::{StoreError, StoreResult};

/// Byte offset range of the record ID shared by every schema
const ID_OFFSET: usize = 1;

/// Record status discriminant.
///
/// `Active` doubles as "borrowed" in the lending store; `Returned` is a
/// terminal lending state, not a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Deleted,
    Returned,
}

impl Status {
    /// On-disk byte value
    pub fn as_byte(self) -> u8 {
        match self {
            Status::Active => b'A',
            Status::Deleted => b'D',
            Status::Returned => b'R',
        }
    }

    /// Decode a status byte; any other value is store corruption
    pub fn from_byte(byte: u8) -> StoreResult<Self> {
        match byte {
            b'A' => Ok(Status::Active),
            b'D' => Ok(Status::Deleted),
            b'R' => Ok(Status::Returned),
            other => Err(StoreError::malformed(format!(
                "unknown status byte 0x{:02x}",
                other
            ))),
        }
    }
}

/// A fixed-width binary record schema.
///
/// `encode` always produces exactly `RECORD_SIZE` bytes; `decode` fails
/// with `MalformedRecord` on a wrong-length buffer and never partially
/// decodes.
pub trait FixedRecord: Sized {
    /// Total record length in bytes, computed once from the field widths
    const RECORD_SIZE: usize;

    /// Entity name used in error messages ("book", "member", "lending")
    const ENTITY: &'static str;

    fn encode(&self) -> Vec<u8>;
    fn decode(buffer: &[u8]) -> StoreResult<Self>;

    fn id(&self) -> i32;
    fn status(&self) -> Status;
}

/// Encode text to exactly `capacity` bytes: UTF-8, truncated to capacity
/// bytes, right-padded with zero bytes.
///
/// Truncation is silent and may split a multi-byte character; the stored
/// prefix then fails UTF-8 decoding. This matches the on-disk contract
/// exactly.
pub fn encode_string(value: &str, capacity: usize) -> Vec<u8> {
    let mut buf = vec![0u8; capacity];
    let raw = value.as_bytes();
    let len = raw.len().min(capacity);
    buf[..len].copy_from_slice(&raw[..len]);
    buf
}

/// Strip trailing zero bytes and decode as UTF-8
pub fn decode_string(buffer: &[u8]) -> StoreResult<String> {
    let end = buffer
        .iter()
        .rposition(|&b| b != 0)
        .map(|p| p + 1)
        .unwrap_or(0);
    String::from_utf8(buffer[..end].to_vec())
        .map_err(|e| StoreError::malformed(format!("invalid UTF-8 in string field: {}", e)))
}

/// Read the record ID without decoding the full schema.
///
/// The ID sits at bytes 1..5 in every store, which is what lets the
/// generic store answer `last_id` in O(1).
pub fn record_id(buffer: &[u8]) -> StoreResult<i32> {
    if buffer.len() < ID_OFFSET + 4 {
        return Err(StoreError::malformed(format!(
            "buffer of {} bytes too short for an id field",
            buffer.len()
        )));
    }
    Ok(read_i32(buffer, ID_OFFSET))
}

/// Guard a decode buffer against length mismatch
pub(crate) fn check_len(buffer: &[u8], expected: usize, entity: &str) -> StoreResult<()> {
    if buffer.len() != expected {
        return Err(StoreError::malformed(format!(
            "{} record is {} bytes, expected {}",
            entity,
            buffer.len(),
            expected
        )));
    }
    Ok(())
}

pub(crate) fn read_i32(buffer: &[u8], at: usize) -> i32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buffer[at..at + 4]);
    i32::from_le_bytes(bytes)
}

pub(crate) fn read_i16(buffer: &[u8], at: usize) -> i16 {
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&buffer[at..at + 2]);
    i16::from_le_bytes(bytes)
}

pub(crate) fn read_f64(buffer: &[u8], at: usize) -> f64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buffer[at..at + 8]);
    f64::from_le_bytes(bytes)
}
