//! libman - a fixed-record library catalog manager
//!
//! Three parallel record stores (books, members, lendings) share one
//! fixed-width binary record protocol: append-only growth, in-place
//! rewrite for edits, tombstone status byte for deletes. The circulation
//! coordinator composes all three for borrow/return.

pub mod books;
pub mod circulation;
pub mod cli;
pub mod config;
pub mod lendings;
pub mod members;
pub mod observability;
pub mod report;
pub mod store;
