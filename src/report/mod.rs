//! Lending report generator
//!
//! Read-only collaborator over the three stores: joins lendings to
//! members and books by foreign key and renders a fixed-width plain-text
//! table keyed by member name, plus summary counts. The output file is
//! regenerated in full on every invocation.

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::books::BookStore;
use crate::config::LibraryConfig;
use crate::lendings::LendingStore;
use crate::members::MemberStore;
use crate::store::StoreResult;

const WIDTH: usize = 120;

/// Placeholder for a lending whose member is no longer active.
const UNKNOWN_MEMBER: &str = "unknown member";
/// Placeholder for a lending whose book is no longer active.
const UNKNOWN_TITLE: &str = "unknown title";

/// One rendered row: a member and every book they have ever borrowed.
struct ReportRow {
    name: String,
    phone: String,
    titles: Vec<String>,
    any_borrowed: bool,
}

/// Generates the report and writes it to the configured path.
pub fn generate(config: &LibraryConfig) -> StoreResult<PathBuf> {
    let text = render(config)?;
    fs::write(&config.report_file, text)?;
    Ok(config.report_file.clone())
}

/// Renders the full report text.
pub fn render(config: &LibraryConfig) -> StoreResult<String> {
    let members = MemberStore::open(&config.members_file)?.list_active()?;
    let books = BookStore::open(&config.books_file)?.list_active()?;
    let lendings = LendingStore::open(&config.lendings_file)?.history()?;

    let mut rows: Vec<ReportRow> = Vec::new();
    let mut borrowed_count = 0usize;
    let mut returned_count = 0usize;

    for lending in &lendings {
        if lending.is_borrowed() {
            borrowed_count += 1;
        } else {
            returned_count += 1;
        }

        let (name, phone) = members
            .iter()
            .find(|m| m.id == lending.member_id)
            .map(|m| (m.name.clone(), m.phone.clone()))
            .unwrap_or_else(|| (UNKNOWN_MEMBER.to_string(), "-".to_string()));

        let title = books
            .iter()
            .find(|b| b.id == lending.book_id)
            .map(|b| b.title.clone())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        match rows.iter_mut().find(|row| row.name == name) {
            Some(row) => {
                row.titles.push(title);
                row.any_borrowed |= lending.is_borrowed();
            }
            None => rows.push(ReportRow {
                name,
                phone,
                titles: vec![title],
                any_borrowed: lending.is_borrowed(),
            }),
        }
    }

    let mut lines = Vec::new();
    lines.push("=".repeat(WIDTH));
    lines.push(center("Library Management System - Lending Report"));
    lines.push(center(&format!(
        "Generated At : {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )));
    lines.push(center(&format!(
        "App Version : {}",
        env!("CARGO_PKG_VERSION")
    )));
    lines.push(center("Encoding : UTF-8"));
    lines.push("=".repeat(WIDTH));
    lines.push(String::new());
    lines.push(format!(
        "{:<30} {:<18} {:<50} {:<12}",
        "Member", "Phone", "Books", "Status"
    ));
    lines.push("=".repeat(WIDTH));

    for row in &rows {
        let status = if row.any_borrowed {
            "currently borrowed"
        } else {
            "returned"
        };
        lines.push(format!(
            "{:<30} {:<18} {:<50} {:<12}",
            row.name,
            row.phone,
            row.titles.join(", "),
            status
        ));
    }

    lines.push("=".repeat(WIDTH));
    lines.push(String::new());
    lines.push(center("Summary"));
    lines.push("-".repeat(WIDTH));
    lines.push(format!("- Total Lendings     : {}", lendings.len()));
    lines.push(format!("- Currently Borrowed : {}", borrowed_count));
    lines.push(format!("- Already Returned   : {}", returned_count));
    lines.push("=".repeat(WIDTH));

    Ok(lines.join("\n") + "\n")
}

fn center(text: &str) -> String {
    if text.len() >= WIDTH {
        return text.to_string();
    }
    let pad = (WIDTH - text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
