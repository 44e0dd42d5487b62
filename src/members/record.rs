//! Member record schema

use crate::store::codec;
use crate::store::{FixedRecord, Status, StoreResult};

pub(crate) const NAME_CAP: usize = 64;
pub(crate) const PHONE_CAP: usize = 16;

const NAME_AT: usize = 5;
const PHONE_AT: usize = NAME_AT + NAME_CAP;

/// One member record as stored on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub status: Status,
    pub name: String,
    pub phone: String,
}

impl FixedRecord for Member {
    // 1 + 4 + 64 + 16
    const RECORD_SIZE: usize = 85;
    const ENTITY: &'static str = "member";

    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::RECORD_SIZE);
        buf.push(self.status.as_byte());
        buf.extend_from_slice(&self.id.to_le_bytes());
        buf.extend_from_slice(&codec::encode_string(&self.name, NAME_CAP));
        buf.extend_from_slice(&codec::encode_string(&self.phone, PHONE_CAP));
        buf
    }

    fn decode(buffer: &[u8]) -> StoreResult<Self> {
        codec::check_len(buffer, Self::RECORD_SIZE, Self::ENTITY)?;
        Ok(Self {
            status: Status::from_byte(buffer[0])?,
            id: codec::read_i32(buffer, 1),
            name: codec::decode_string(&buffer[NAME_AT..PHONE_AT])?,
            phone: codec::decode_string(&buffer[PHONE_AT..Self::RECORD_SIZE])?,
        })
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn status(&self) -> Status {
        self.status
    }
}
