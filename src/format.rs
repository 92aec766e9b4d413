//! Input text primitives shared by the field validators.
//!
//! These are the leaf checks of the pipeline: blankness, character classes,
//! and cosmetic-separator stripping. They carry no decision logic beyond a
//! single character test each.

/// Returns true if the input is empty or whitespace-only.
///
/// Blank fields fail the required-field gate before any other check runs.
#[inline]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Returns true if every character is an ASCII digit.
///
/// Vacuously true for the empty string; callers that care run behind the
/// required-field gate.
#[inline]
pub fn is_digits(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if every character is an ASCII letter or whitespace.
#[inline]
pub fn is_letters_or_spaces(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
}

/// Counts the digit characters in the input.
#[inline]
pub fn count_digits(input: &str) -> usize {
    input.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Strips cosmetic separators (spaces and hyphens) from a card number.
///
/// Separators are accepted anywhere in the string; everything else is kept
/// for the digit check to reject.
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|&c| c != ' ' && c != '-').collect()
}
