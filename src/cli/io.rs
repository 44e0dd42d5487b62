//! CLI output rendering helpers

use chrono::DateTime;

use crate::books::Book;
use crate::lendings::Lending;
use crate::members::Member;

/// Format an epoch-seconds timestamp as a date; the 0.0 sentinel renders
/// as "not returned".
pub fn format_ts(ts: f64) -> String {
    if ts == 0.0 {
        return "not returned".to_string();
    }
    match DateTime::from_timestamp(ts as i64, 0) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

pub fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("no active books");
        return;
    }
    println!(
        "{:<6} {:<16} {:<40} {:<24} {:>4}",
        "ID", "ISBN", "Title", "Author", "Qty"
    );
    for book in books {
        println!(
            "{:<6} {:<16} {:<40} {:<24} {:>4}",
            book.id, book.isbn, book.title, book.author, book.quantity
        );
    }
}

pub fn print_members(members: &[Member]) {
    if members.is_empty() {
        println!("no active members");
        return;
    }
    println!("{:<6} {:<32} {:<16}", "ID", "Name", "Phone");
    for member in members {
        println!("{:<6} {:<32} {:<16}", member.id, member.name, member.phone);
    }
}

pub fn print_history(lendings: &[Lending]) {
    if lendings.is_empty() {
        println!("no lendings yet");
        return;
    }
    println!(
        "{:<6} {:<8} {:<10} {:<12} {:<14} {:<10}",
        "LID", "BookID", "MemberID", "Borrowed", "Returned", "Status"
    );
    for lending in lendings {
        let status = if lending.is_borrowed() {
            "borrowed"
        } else {
            "returned"
        };
        println!(
            "{:<6} {:<8} {:<10} {:<12} {:<14} {:<10}",
            lending.id,
            lending.book_id,
            lending.member_id,
            format_ts(lending.borrow_ts),
            format_ts(lending.return_ts),
            status
        );
    }
}
