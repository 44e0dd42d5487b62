//! CLI command implementations
//!
//! Thin dispatch: parse arguments, load configuration, open the store or
//! coordinator a command needs, run it, render the result. All
//! invariants live below in the store layer.

use crate::books::{BookPatch, BookStore};
use crate::circulation::Circulation;
use crate::config::LibraryConfig;
use crate::members::{MemberPatch, MemberStore};
use crate::observability::{Logger, Severity};
use crate::report;
use crate::store::StoreError;

use super::args::{BookCommand, Cli, Command, MemberCommand};
use super::errors::CliResult;
use super::io::{print_books, print_history, print_members};

/// Parse arguments, load configuration, and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = LibraryConfig::load_or_default(&cli.config)?;
    run_command(&config, cli.command)
}

/// Dispatch a single parsed command against the configured stores.
pub fn run_command(config: &LibraryConfig, command: Command) -> CliResult<()> {
    match command {
        Command::Book(cmd) => run_book_command(config, cmd),
        Command::Member(cmd) => run_member_command(config, cmd),

        Command::Borrow { book_id, member_id } => {
            let circulation = Circulation::open(config)?;
            let lending_id = circulation.borrow(book_id, member_id)?;
            println!("lending {} created", lending_id);
            Ok(())
        }

        Command::Return { lending_id } => {
            let circulation = Circulation::open(config)?;
            let fine = circulation.return_lending(lending_id)?;
            if fine > 0 {
                println!("returned, fine: {}", fine);
            } else {
                println!("returned, no fine");
            }
            Ok(())
        }

        Command::History => {
            let circulation = Circulation::open(config)?;
            print_history(&circulation.history()?);
            Ok(())
        }

        Command::Report => {
            let path = report::generate(config)?;
            Logger::log(
                Severity::Info,
                "report_generated",
                &[("path", &path.display().to_string())],
            );
            println!("report written to {}", path.display());
            Ok(())
        }
    }
}

fn run_book_command(config: &LibraryConfig, command: BookCommand) -> CliResult<()> {
    let books = BookStore::open(&config.books_file)?;
    match command {
        BookCommand::Add {
            isbn,
            title,
            author,
            quantity,
        } => {
            if quantity < 0 {
                return Err(
                    StoreError::invalid_input(format!("negative quantity {}", quantity)).into(),
                );
            }
            let id = books.create(&isbn, &title, &author, quantity)?;
            Logger::log(Severity::Info, "book_added", &[("id", &id.to_string())]);
            println!("book {} added", id);
        }
        BookCommand::List => print_books(&books.list_active()?),
        BookCommand::Update {
            id,
            isbn,
            title,
            author,
            quantity,
        } => {
            if let Some(q) = quantity {
                if q < 0 {
                    return Err(
                        StoreError::invalid_input(format!("negative quantity {}", q)).into()
                    );
                }
            }
            books.update(
                id,
                BookPatch {
                    isbn,
                    title,
                    author,
                    quantity,
                },
            )?;
            println!("book {} updated", id);
        }
        BookCommand::Delete { id } => {
            books.soft_delete(id)?;
            Logger::log(Severity::Info, "book_deleted", &[("id", &id.to_string())]);
            println!("book {} deleted", id);
        }
    }
    Ok(())
}

fn run_member_command(config: &LibraryConfig, command: MemberCommand) -> CliResult<()> {
    let members = MemberStore::open(&config.members_file)?;
    match command {
        MemberCommand::Add { name, phone } => {
            let id = members.create(&name, &phone)?;
            Logger::log(Severity::Info, "member_added", &[("id", &id.to_string())]);
            println!("member {} added", id);
        }
        MemberCommand::List => print_members(&members.list_active()?),
        MemberCommand::Update { id, name, phone } => {
            members.update(id, MemberPatch { name, phone })?;
            println!("member {} updated", id);
        }
        MemberCommand::Delete { id } => {
            members.soft_delete(id)?;
            Logger::log(Severity::Info, "member_deleted", &[("id", &id.to_string())]);
            println!("member {} deleted", id);
        }
    }
    Ok(())
}
