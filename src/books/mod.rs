//! Book store
//!
//! Record layout (215 bytes, little-endian):
//!
//! ```text
//! status(1) . id(i32) . isbn(16) . title(128) . author(64) . quantity(i16)
//! ```

mod record;
mod store;

pub use record::Book;
pub use store::{BookPatch, BookStore};
