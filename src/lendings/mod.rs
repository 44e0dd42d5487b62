//! Lending store
//!
//! Record layout (29 bytes, little-endian):
//!
//! ```text
//! status(1) . lending_id(i32) . book_id(i32) . member_id(i32)
//!           . borrow_ts(f64) . return_ts(f64)
//! ```
//!
//! Status `'A'` means borrowed, `'R'` returned (terminal). Lendings are
//! never soft-deleted. `return_ts == 0.0` is a sentinel for "not yet
//! returned"; an epoch-zero instant is reserved and cannot be stored as
//! a real return time.

mod record;
mod store;

pub use record::Lending;
pub use store::LendingStore;
