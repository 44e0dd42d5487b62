//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// libman - a fixed-record library catalog manager
#[derive(Parser, Debug)]
#[command(name = "libman")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file; defaults apply when the file is
    /// absent
    #[arg(long, global = true, default_value = "libman.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the book catalog
    #[command(subcommand)]
    Book(BookCommand),

    /// Manage members
    #[command(subcommand)]
    Member(MemberCommand),

    /// Borrow a book for a member
    Borrow {
        book_id: i32,
        member_id: i32,
    },

    /// Return a lending and compute the fine
    Return {
        lending_id: i32,
    },

    /// Show the full borrow/return history
    History,

    /// Regenerate the lending report file
    Report,
}

#[derive(Subcommand, Debug)]
pub enum BookCommand {
    /// Add a new book
    Add {
        #[arg(long)]
        isbn: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        quantity: i16,
    },

    /// List active books
    List,

    /// Update a book; omitted fields keep their stored values
    Update {
        id: i32,
        #[arg(long)]
        isbn: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        quantity: Option<i16>,
    },

    /// Soft-delete a book
    Delete {
        id: i32,
    },
}

#[derive(Subcommand, Debug)]
pub enum MemberCommand {
    /// Add a new member
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
    },

    /// List active members
    List,

    /// Update a member; omitted fields keep their stored values
    Update {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Soft-delete a member
    Delete {
        id: i32,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
