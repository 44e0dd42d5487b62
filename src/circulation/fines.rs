//! Late-return fine policy
//!
//! Flat daily rate after a grace period:
//!
//! ```text
//! days_late = max(0, floor((return - borrow) / 86400) - 7)
//! fine      = days_late * 5
//! ```

/// Days a lending may be out before fines accrue
pub const GRACE_PERIOD_DAYS: i64 = 7;

/// Fine per late day, in currency units
pub const FINE_PER_DAY: i64 = 5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fine owed for a lending borrowed at `borrow_ts` and returned at
/// `return_ts` (both seconds since epoch).
pub fn late_fine(borrow_ts: f64, return_ts: f64) -> i64 {
    let whole_days = ((return_ts - borrow_ts) / SECONDS_PER_DAY).floor() as i64;
    let days_late = (whole_days - GRACE_PERIOD_DAYS).max(0);
    days_late * FINE_PER_DAY
}
