//! Book record schema

use crate::store::codec;
use crate::store::{FixedRecord, Status, StoreResult};

pub(crate) const ISBN_CAP: usize = 16;
pub(crate) const TITLE_CAP: usize = 128;
pub(crate) const AUTHOR_CAP: usize = 64;

const ISBN_AT: usize = 5;
const TITLE_AT: usize = ISBN_AT + ISBN_CAP;
const AUTHOR_AT: usize = TITLE_AT + TITLE_CAP;
const QUANTITY_AT: usize = AUTHOR_AT + AUTHOR_CAP;

/// One book record as stored on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub status: Status,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub quantity: i16,
}

impl FixedRecord for Book {
    // 1 + 4 + 16 + 128 + 64 + 2
    const RECORD_SIZE: usize = 215;
    const ENTITY: &'static str = "book";

    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::RECORD_SIZE);
        buf.push(self.status.as_byte());
        buf.extend_from_slice(&self.id.to_le_bytes());
        buf.extend_from_slice(&codec::encode_string(&self.isbn, ISBN_CAP));
        buf.extend_from_slice(&codec::encode_string(&self.title, TITLE_CAP));
        buf.extend_from_slice(&codec::encode_string(&self.author, AUTHOR_CAP));
        buf.extend_from_slice(&self.quantity.to_le_bytes());
        buf
    }

    fn decode(buffer: &[u8]) -> StoreResult<Self> {
        codec::check_len(buffer, Self::RECORD_SIZE, Self::ENTITY)?;
        Ok(Self {
            status: Status::from_byte(buffer[0])?,
            id: codec::read_i32(buffer, 1),
            isbn: codec::decode_string(&buffer[ISBN_AT..TITLE_AT])?,
            title: codec::decode_string(&buffer[TITLE_AT..AUTHOR_AT])?,
            author: codec::decode_string(&buffer[AUTHOR_AT..QUANTITY_AT])?,
            quantity: codec::read_i16(buffer, QUANTITY_AT),
        })
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> Status {
        self.status
    }
}
