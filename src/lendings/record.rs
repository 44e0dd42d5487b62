//! Lending record schema

use crate::store::codec;
use crate::store::{FixedRecord, Status, StoreResult};

const BOOK_ID_AT: usize = 5;
const MEMBER_ID_AT: usize = 9;
const BORROW_TS_AT: usize = 13;
const RETURN_TS_AT: usize = 21;

/// Sentinel return timestamp meaning "not yet returned".
pub(crate) const NOT_RETURNED: f64 = 0.0;

/// One lending record as stored on disk.
///
/// `book_id` and `member_id` are foreign keys into the book and member
/// stores; they are not re-validated against those stores after borrow
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct Lending {
    pub id: i32,
    pub status: Status,
    pub book_id: i32,
    pub member_id: i32,
    /// Seconds since epoch at borrow time
    pub borrow_ts: f64,
    /// Seconds since epoch at return time, or 0.0 while borrowed
    pub return_ts: f64,
}

impl Lending {
    /// Whether this lending is still out (status byte 'A').
    pub fn is_borrowed(&self) -> bool {
        self.status == Status::Active
    }

    /// Whether this lending has reached its terminal state.
    pub fn is_returned(&self) -> bool {
        self.status == Status::Returned
    }
}

impl FixedRecord for Lending {
    // 1 + 4 + 4 + 4 + 8 + 8
    const RECORD_SIZE: usize = 29;
    const ENTITY: &'static str = "lending";

    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::RECORD_SIZE);
        buf.push(self.status.as_byte());
        buf.extend_from_slice(&self.id.to_le_bytes());
        buf.extend_from_slice(&self.book_id.to_le_bytes());
        buf.extend_from_slice(&self.member_id.to_le_bytes());
        buf.extend_from_slice(&self.borrow_ts.to_le_bytes());
        buf.extend_from_slice(&self.return_ts.to_le_bytes());
        buf
    }

    fn decode(buffer: &[u8]) -> StoreResult<Self> {
        codec::check_len(buffer, Self::RECORD_SIZE, Self::ENTITY)?;
        Ok(Self {
            status: Status::from_byte(buffer[0])?,
            id: codec::read_i32(buffer, 1),
            book_id: codec::read_i32(buffer, BOOK_ID_AT),
            member_id: codec::read_i32(buffer, MEMBER_ID_AT),
            borrow_ts: codec::read_f64(buffer, BORROW_TS_AT),
            return_ts: codec::read_f64(buffer, RETURN_TS_AT),
        })
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> Status {
        self.status
    }
}
