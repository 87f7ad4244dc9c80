//! Menu state machine types for the interactive shell.
//!
//! This module defines the enums that drive the shell's state machine. The
//! loop lives in the `MENU` state and transitions into one action state per
//! iteration, returning to `MENU` afterwards, except `Exit`, which is
//! terminal.
//!
//! # State Machine
//!
//! ```text
//! MENU → { ADD, REMOVE, SEARCH, LIST, STATS } → MENU
//! MENU → EXIT (terminal, saves the catalog)
//! ```
//!
//! Input validation loops (year, read status, numeric choices) are local
//! sub-states of the action they belong to; see [`crate::shell::input`].

/// One menu action, selected by its number on the main menu.
///
/// Parsed from the user's menu choice. Every variant returns control to the
/// menu after completing, except [`Exit`](Self::Exit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Collect a new book's fields and append it to the catalog.
    Add,

    /// Remove a book by exact title, disambiguating duplicates by position.
    Remove,

    /// Substring search by title or author.
    Search,

    /// Display the whole catalog in insertion order.
    List,

    /// Display summary statistics.
    Stats,

    /// Save the catalog and end the session.
    Exit,
}

impl MenuAction {
    /// Parses a menu choice, `"1"` through `"6"`.
    ///
    /// Returns `None` for anything else; the shell re-prints the menu and
    /// prompts again.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfkeeper::shell::MenuAction;
    ///
    /// assert_eq!(MenuAction::parse("1"), Some(MenuAction::Add));
    /// assert_eq!(MenuAction::parse("6"), Some(MenuAction::Exit));
    /// assert_eq!(MenuAction::parse("7"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::Search),
            "4" => Some(Self::List),
            "5" => Some(Self::Stats),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Which book field a search scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Case-insensitive substring match against titles.
    Title,

    /// Case-insensitive substring match against authors.
    Author,
}

impl SearchField {
    /// Field name as shown in search prompts and result messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}
