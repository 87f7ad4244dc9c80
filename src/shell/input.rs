//! Input validators for the shell's re-prompt loops.
//!
//! Each validator takes one line of user input and returns either the parsed
//! value or the rejection message to show before prompting again. Invalid
//! input never becomes an error value anywhere else in the crate: the shell
//! loops locally until a validator accepts.

use crate::shell::menu::SearchField;

/// Parses a publication year, constrained to `[0, current_year]`.
///
/// # Errors
///
/// Returns the message to display when the input is not an integer or the
/// year falls outside the accepted range.
///
/// # Examples
///
/// ```
/// use shelfkeeper::shell::input::parse_year;
///
/// assert_eq!(parse_year("1965", 2026), Ok(1965));
/// assert!(parse_year("-1", 2026).is_err());
/// assert!(parse_year("2027", 2026).is_err());
/// ```
pub fn parse_year(input: &str, current_year: i32) -> Result<i32, String> {
    match input.trim().parse::<i32>() {
        Ok(year) if (0..=current_year).contains(&year) => Ok(year),
        Ok(_) => Err(format!(
            "Please enter a valid year between 0 and {current_year}."
        )),
        Err(_) => Err("Please enter a valid year (numbers only).".to_string()),
    }
}

/// Parses a yes/no answer for the read-status prompt.
///
/// Accepts `yes`, `y`, `no`, and `n`, case-insensitively.
///
/// # Errors
///
/// Returns the message to display for any other token.
pub fn parse_read_status(input: &str) -> Result<bool, String> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err("Please enter 'yes' or 'no'.".to_string()),
    }
}

/// Parses the search-type choice: `1` for title, `2` for author.
///
/// # Errors
///
/// Returns the message to display when the choice is not one of the two.
pub fn parse_search_field(input: &str) -> Result<SearchField, String> {
    match input.trim().parse::<u32>() {
        Ok(1) => Ok(SearchField::Title),
        Ok(2) => Ok(SearchField::Author),
        Ok(_) => Err("Please enter 1 or 2.".to_string()),
        Err(_) => Err("Please enter a valid number.".to_string()),
    }
}

/// Parses the removal disambiguation choice.
///
/// `0` cancels and returns `Ok(None)`; `1..=match_count` selects a match and
/// returns its zero-based position `Ok(Some(choice - 1))`.
///
/// # Errors
///
/// Returns the message to display when the input is not a number or is out of
/// range.
///
/// # Examples
///
/// ```
/// use shelfkeeper::shell::input::parse_removal_choice;
///
/// assert_eq!(parse_removal_choice("0", 3), Ok(None));
/// assert_eq!(parse_removal_choice("2", 3), Ok(Some(1)));
/// assert!(parse_removal_choice("4", 3).is_err());
/// ```
pub fn parse_removal_choice(input: &str, match_count: usize) -> Result<Option<usize>, String> {
    match input.trim().parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(choice) if choice <= match_count => Ok(Some(choice - 1)),
        Ok(_) => Err(format!(
            "Please enter a number between 1 and {match_count}."
        )),
        Err(_) => Err("Please enter a valid number.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_accepts_bounds_inclusive() {
        assert_eq!(parse_year("0", 2026), Ok(0));
        assert_eq!(parse_year("2026", 2026), Ok(2026));
    }

    #[test]
    fn year_rejects_negative_and_future() {
        assert_eq!(
            parse_year("-1", 2026),
            Err("Please enter a valid year between 0 and 2026.".to_string())
        );
        assert!(parse_year("2027", 2026).is_err());
    }

    #[test]
    fn year_rejects_non_numeric_with_its_own_message() {
        assert_eq!(
            parse_year("ninteen sixty-five", 2026),
            Err("Please enter a valid year (numbers only).".to_string())
        );
    }

    #[test]
    fn read_status_accepts_tokens_case_insensitively() {
        assert_eq!(parse_read_status("yes"), Ok(true));
        assert_eq!(parse_read_status("Y"), Ok(true));
        assert_eq!(parse_read_status("NO"), Ok(false));
        assert_eq!(parse_read_status("n"), Ok(false));
    }

    #[test]
    fn read_status_rejects_other_tokens() {
        assert!(parse_read_status("maybe").is_err());
        assert!(parse_read_status("").is_err());
    }

    #[test]
    fn search_field_maps_one_and_two() {
        assert_eq!(parse_search_field("1"), Ok(SearchField::Title));
        assert_eq!(parse_search_field("2"), Ok(SearchField::Author));
        assert!(parse_search_field("3").is_err());
        assert!(parse_search_field("title").is_err());
    }

    #[test]
    fn removal_choice_zero_cancels() {
        assert_eq!(parse_removal_choice("0", 2), Ok(None));
    }

    #[test]
    fn removal_choice_is_one_based() {
        assert_eq!(parse_removal_choice("1", 2), Ok(Some(0)));
        assert_eq!(parse_removal_choice("2", 2), Ok(Some(1)));
        assert!(parse_removal_choice("3", 2).is_err());
        assert!(parse_removal_choice("x", 2).is_err());
    }
}
