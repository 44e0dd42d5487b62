//! Circulation subsystem
//!
//! The lending coordinator sits above the book, member, and lending
//! stores and performs the cross-store reads and writes of borrow and
//! return. The two cross-store mutations in each operation are
//! sequential writes with no atomicity guarantee across them; a crash in
//! between leaves an inconsistent state, which is accepted behavior, not
//! remediated.

mod coordinator;
mod fines;

pub use coordinator::Circulation;
pub use fines::{late_fine, FINE_PER_DAY, GRACE_PERIOD_DAYS};
