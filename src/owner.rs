//! Owner-name validation.
//!
//! Two independent checks, both of which may fire on the same name: an ASCII
//! letter/space character-set check, and a heuristic guard against users
//! pasting card numbers or security codes into the name field.

use crate::finding::Finding;
use crate::format::{count_digits, is_letters_or_spaces};

/// Digit counts that look like a pasted card number (Visa/MasterCard 13 or
/// 16 digits, Amex 15) or a pasted security code (3 or 4 digits).
///
/// This is a deliberate threshold test on the digit count alone, not a
/// pattern match; it can both over- and under-fire.
const SENSITIVE_DIGIT_COUNTS: [usize; 5] = [13, 15, 16, 3, 4];

/// Returns true if the name's digit count matches a card-number or CVC
/// length.
#[inline]
pub fn resembles_sensitive_data(owner: &str) -> bool {
    SENSITIVE_DIGIT_COUNTS.contains(&count_digits(owner))
}

/// Checks an owner name, returning zero, one, or two findings.
///
/// Runs only behind the required-field gate, so the input is known to be
/// non-blank. Neither check suppresses the other.
///
/// # Example
///
/// ```
/// use cardcheck::{owner_findings, Finding};
///
/// assert!(owner_findings("John Doe").is_empty());
/// assert_eq!(owner_findings("John Doe 123"),
///     vec![Finding::OwnerInvalidCharacters, Finding::OwnerSensitiveData]);
/// ```
pub fn owner_findings(owner: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !is_letters_or_spaces(owner) {
        findings.push(Finding::OwnerInvalidCharacters);
    }
    if resembles_sensitive_data(owner) {
        findings.push(Finding::OwnerSensitiveData);
    }

    findings
}
