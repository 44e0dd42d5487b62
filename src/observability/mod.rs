//! Observability for libman

mod logger;

pub use logger::{Logger, Severity};
