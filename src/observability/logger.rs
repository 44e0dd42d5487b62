//! Structured JSON logger
//!
//! One log line = one event, written synchronously to stderr so stdout
//! stays free for command output. Field order is deterministic: `event`
//! first, then `severity`, then the remaining fields sorted by key.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Intentional no-ops and recoverable oddities
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut stderr = io::stderr();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(128);
        out.push_str("{\"event\":\"");
        Self::escape(&mut out, event);
        out.push_str("\",\"severity\":\"");
        out.push_str(severity.as_str());
        out.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);
        for (key, value) in sorted {
            out.push_str(",\"");
            Self::escape(&mut out, key);
            out.push_str("\":\"");
            Self::escape(&mut out, value);
            out.push('"');
        }

        out.push('}');
        out.push('\n');
        out
    }

    fn escape(out: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => out.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_orders_fields_deterministically() {
        let line = Logger::render(
            Severity::Info,
            "lending_created",
            &[("member_id", "2"), ("book_id", "1")],
        );
        assert_eq!(
            line,
            "{\"event\":\"lending_created\",\"severity\":\"INFO\",\"book_id\":\"1\",\"member_id\":\"2\"}\n"
        );
    }

    #[test]
    fn test_render_escapes_special_characters() {
        let line = Logger::render(Severity::Warn, "odd\"event", &[("title", "a\nb")]);
        assert!(line.contains("odd\\\"event"));
        assert!(line.contains("a\\nb"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }
}
