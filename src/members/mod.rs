//! Member store
//!
//! Record layout (85 bytes, little-endian):
//!
//! ```text
//! status(1) . id(i32) . name(64) . phone(16)
//! ```

mod record;
mod store;

pub use record::Member;
pub use store::{MemberPatch, MemberStore};
