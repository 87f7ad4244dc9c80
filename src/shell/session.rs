//! The interactive menu loop.
//!
//! This module implements [`Shell`], the session driver that owns the
//! in-memory [`Library`] and its [`JsonStorage`] handle. One `run()` call is
//! one whole session: print the menu, read a choice, dispatch the action,
//! repeat until exit.
//!
//! # Control Flow
//!
//! ```text
//! stdin line → MenuAction → dispatch → Library / stats / JsonStorage → stdout
//!                  ↑                                                       │
//!                  └────────────────────── loop ──────────────────────────┘
//! ```
//!
//! # Error Containment
//!
//! Three failure classes meet three fates here:
//!
//! - Invalid input is consumed by the local re-prompt loops and never leaves
//!   an action.
//! - [`ShelfkeeperError::Interrupted`] (end of input at any prompt) triggers
//!   the same save path as choosing exit.
//! - Any other error from an action is reported and the loop returns to the
//!   menu; only failures to write to the output itself end the session.
//!
//! The shell is generic over its reader and writer so tests can drive whole
//! scripted sessions through in-memory buffers.

use crate::domain::{current_year, Book, Result, ShelfkeeperError};
use crate::library::{self, Library, RemoveOutcome};
use crate::shell::input;
use crate::shell::menu::{MenuAction, SearchField};
use crate::storage::JsonStorage;
use std::io::{BufRead, Write};

/// Interactive session driver.
///
/// Owns the collection and the storage handle for the lifetime of the
/// session. The reader is the command stream (stdin in production, a
/// `Cursor` in tests); the writer receives every prompt and message.
#[derive(Debug)]
pub struct Shell<R, W> {
    reader: R,
    writer: W,
    library: Library,
    storage: JsonStorage,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over an already-loaded library.
    pub fn new(reader: R, writer: W, library: Library, storage: JsonStorage) -> Self {
        Self {
            reader,
            writer,
            library,
            storage,
        }
    }

    /// Returns the current collection.
    ///
    /// Mostly useful to inspect the end state of a scripted session.
    #[must_use]
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Runs the menu loop until the user exits or the input ends.
    ///
    /// Both exits go through the same save path. Invalid menu choices
    /// re-print the menu; errors inside an action are reported and the loop
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing to the output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let choice = match self.prompt_line("Enter your choice: ") {
                Ok(line) => line,
                Err(ShelfkeeperError::Interrupted) => return self.interrupted_exit(),
                Err(e) => return Err(e),
            };

            let Some(action) = MenuAction::parse(&choice) else {
                writeln!(self.writer, "Invalid choice. Please try again.")?;
                continue;
            };

            if action == MenuAction::Exit {
                self.save_catalog()?;
                writeln!(self.writer, "Goodbye!")?;
                return Ok(());
            }

            match self.dispatch(action) {
                Ok(()) => {}
                Err(ShelfkeeperError::Interrupted) => return self.interrupted_exit(),
                Err(e) => writeln!(self.writer, "An error occurred: {e}")?,
            }
        }
    }

    /// Runs one menu action to completion.
    fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        let _span = tracing::debug_span!("menu_action", action = ?action).entered();

        match action {
            MenuAction::Add => self.add_book(),
            MenuAction::Remove => self.remove_book(),
            MenuAction::Search => self.search_books(),
            MenuAction::List => self.list_books(),
            MenuAction::Stats => self.show_statistics(),
            // Exit is handled by the loop itself.
            MenuAction::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Welcome to your Personal Library Manager!")?;
        writeln!(self.writer, "1. Add a book")?;
        writeln!(self.writer, "2. Remove a book")?;
        writeln!(self.writer, "3. Search for a book")?;
        writeln!(self.writer, "4. Display all books")?;
        writeln!(self.writer, "5. Display statistics")?;
        writeln!(self.writer, "6. Exit")?;
        Ok(())
    }

    /// Collects the new book's fields, re-prompting per field until valid.
    fn add_book(&mut self) -> Result<()> {
        let title = self.prompt_line("Enter the book title: ")?;
        let author = self.prompt_line("Enter the author: ")?;
        let year = self.prompt_year()?;
        let genre = self.prompt_line("Enter the genre: ")?;
        let read = self.prompt_read_status()?;

        self.library.add(Book::new(title, author, year, genre, read));
        writeln!(self.writer, "Book added successfully!")?;
        Ok(())
    }

    fn remove_book(&mut self) -> Result<()> {
        if self.library.is_empty() {
            writeln!(self.writer, "Your library is empty.")?;
            return Ok(());
        }

        let title = self.prompt_line("Enter the title of the book to remove: ")?;

        match self.library.remove_by_title(&title) {
            RemoveOutcome::NotFound => {
                writeln!(self.writer, "No book found with title '{title}'.")?;
                Ok(())
            }
            RemoveOutcome::Removed(_) => {
                writeln!(self.writer, "Book removed successfully!")?;
                Ok(())
            }
            RemoveOutcome::Ambiguous(positions) => self.disambiguate_removal(&title, &positions),
        }
    }

    /// Lets the user pick one of several same-titled books, `0` to cancel.
    fn disambiguate_removal(&mut self, title: &str, positions: &[usize]) -> Result<()> {
        writeln!(
            self.writer,
            "Found {} books with the title '{title}':",
            positions.len()
        )?;
        for (ordinal, &position) in positions.iter().enumerate() {
            let book = &self.library.books()[position];
            writeln!(
                self.writer,
                "{}. {} by {} ({})",
                ordinal + 1,
                book.title,
                book.author,
                book.publication_year
            )?;
        }

        loop {
            let line = self.prompt_line("Enter the number of the book to remove (0 to cancel): ")?;
            match input::parse_removal_choice(&line, positions.len()) {
                Ok(None) => {
                    writeln!(self.writer, "Removal cancelled.")?;
                    return Ok(());
                }
                Ok(Some(index)) => {
                    self.library.remove_at(positions[index]);
                    writeln!(self.writer, "Book removed successfully!")?;
                    return Ok(());
                }
                Err(reason) => writeln!(self.writer, "{reason}")?,
            }
        }
    }

    fn search_books(&mut self) -> Result<()> {
        if self.library.is_empty() {
            writeln!(self.writer, "Your library is empty.")?;
            return Ok(());
        }

        writeln!(self.writer, "Search by:")?;
        writeln!(self.writer, "1. Title")?;
        writeln!(self.writer, "2. Author")?;
        let field = loop {
            let line = self.prompt_line("Enter your choice: ")?;
            match input::parse_search_field(&line) {
                Ok(field) => break field,
                Err(reason) => writeln!(self.writer, "{reason}")?,
            }
        };

        let prompt = match field {
            SearchField::Title => "Enter the title: ",
            SearchField::Author => "Enter the author: ",
        };
        let term = self.prompt_line(prompt)?.to_lowercase();

        let matches = match field {
            SearchField::Title => self.library.find_by_title(&term),
            SearchField::Author => self.library.find_by_author(&term),
        };

        if matches.is_empty() {
            writeln!(
                self.writer,
                "No books found with {} containing '{term}'.",
                field.label()
            )?;
        } else {
            writeln!(
                self.writer,
                "Matching Books (search term: '{term}' in {}):",
                field.label()
            )?;
            Self::write_book_list(&mut self.writer, &matches)?;
        }
        Ok(())
    }

    fn list_books(&mut self) -> Result<()> {
        let books: Vec<&Book> = self.library.books().iter().collect();
        Self::write_book_list(&mut self.writer, &books)
    }

    fn show_statistics(&mut self) -> Result<()> {
        if self.library.is_empty() {
            writeln!(self.writer, "Your library is empty.")?;
            return Ok(());
        }

        let stats = library::compute(&self.library);

        writeln!(self.writer)?;
        writeln!(self.writer, "Library Statistics:")?;
        writeln!(self.writer, "Total books: {}", stats.total)?;
        writeln!(
            self.writer,
            "Books read: {} ({:.1}%)",
            stats.read_count, stats.read_percentage
        )?;
        writeln!(
            self.writer,
            "Books unread: {} ({:.1}%)",
            stats.unread_count, stats.unread_percentage
        )?;

        if !stats.genres.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Books by genre:")?;
            for entry in &stats.genres {
                writeln!(
                    self.writer,
                    "  {}: {} ({:.1}%)",
                    entry.genre, entry.count, entry.percentage
                )?;
            }
        }

        if let Some(oldest) = &stats.oldest {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "Oldest book: {} ({})",
                oldest.title, oldest.publication_year
            )?;
        }
        if let Some(newest) = &stats.newest {
            writeln!(
                self.writer,
                "Newest book: {} ({})",
                newest.title, newest.publication_year
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Writes a numbered book listing, or a notice when there is nothing to show.
    fn write_book_list(writer: &mut W, books: &[&Book]) -> Result<()> {
        if books.is_empty() {
            writeln!(writer, "No books to display.")?;
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "Your Library:")?;
        for (ordinal, book) in books.iter().enumerate() {
            let status = if book.read { "Read" } else { "Unread" };
            writeln!(
                writer,
                "{}. {} by {} ({}) - {} - {}",
                ordinal + 1,
                book.title,
                book.author,
                book.publication_year,
                book.genre,
                status
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Re-prompts until the year parses and falls within `[0, current_year]`.
    fn prompt_year(&mut self) -> Result<i32> {
        let current = current_year();
        loop {
            let line = self.prompt_line("Enter the publication year: ")?;
            match input::parse_year(&line, current) {
                Ok(year) => return Ok(year),
                Err(reason) => writeln!(self.writer, "{reason}")?,
            }
        }
    }

    /// Re-prompts until the answer is an accepted yes/no token.
    fn prompt_read_status(&mut self) -> Result<bool> {
        loop {
            let line = self.prompt_line("Have you read this book? (yes/no): ")?;
            match input::parse_read_status(&line) {
                Ok(read) => return Ok(read),
                Err(reason) => writeln!(self.writer, "{reason}")?,
            }
        }
    }

    /// Writes `prompt` and reads one line, without its line terminator.
    ///
    /// End of input surfaces as [`ShelfkeeperError::Interrupted`], the
    /// session's single cancellation signal.
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            tracing::debug!("input stream ended");
            return Err(ShelfkeeperError::Interrupted);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// The interrupt path: same save as exit, different notice.
    fn interrupted_exit(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Program interrupted. Saving library...")?;
        self.save_catalog()?;
        writeln!(self.writer, "Goodbye!")?;
        Ok(())
    }

    /// Saves the catalog, reporting success or failure to the user.
    ///
    /// A save failure is reported but never propagated; the previous file is
    /// still intact thanks to the storage layer's atomic write.
    fn save_catalog(&mut self) -> Result<()> {
        match self.storage.save(self.library.books()) {
            Ok(()) => writeln!(
                self.writer,
                "Library saved to {}.",
                self.storage.path().display()
            )?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to save catalog");
                writeln!(self.writer, "Error saving library: {e}")?;
            }
        }
        Ok(())
    }
}
