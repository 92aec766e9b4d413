//! Network classification of raw card-number strings.
//!
//! Classification strips cosmetic separators, rejects any remaining
//! non-digit, then walks [`NETWORK_RULES`](crate::network::NETWORK_RULES) in
//! priority order; the first matching rule wins. No checksum is computed at
//! any point, so a structurally matching number always classifies.

use crate::finding::Finding;
use crate::format::{is_digits, strip_formatting};
use crate::network::{Network, NETWORK_RULES};
use std::fmt;
use zeroize::Zeroize;

/// A card number that matched a network rule.
///
/// Holds the stripped digits alongside the classified network. The digits
/// are zeroed on drop, and `Debug`/`Display` only ever show the masked form.
#[derive(Clone)]
pub struct ClassifiedCard {
    network: Network,
    digits: Vec<u8>,
}

impl ClassifiedCard {
    /// Returns the classified network.
    #[inline]
    pub const fn network(&self) -> Network {
        self.network
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Returns the last four digits as a string.
    ///
    /// Safe for logging and display.
    pub fn last_four(&self) -> String {
        let start = self.digits.len().saturating_sub(4);
        self.digits[start..]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the card number with all but the last four digits masked.
    pub fn masked(&self) -> String {
        let mut out = "*".repeat(self.digits.len().saturating_sub(4));
        out.push_str(&self.last_four());
        out
    }
}

impl fmt::Debug for ClassifiedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifiedCard")
            .field("network", &self.network)
            .field("number", &self.masked())
            .finish()
    }
}

impl fmt::Display for ClassifiedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.network, self.masked())
    }
}

impl Drop for ClassifiedCard {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Classifies a raw card-number string into a network.
///
/// Spaces and hyphens are accepted as cosmetic separators anywhere in the
/// input. Returns [`Finding::NumberNotDigits`] if anything else non-numeric
/// remains after stripping, or [`Finding::UnrecognizedNetwork`] if no rule
/// matches.
///
/// # Example
///
/// ```
/// use cardcheck::{classify_number, Network};
///
/// let card = classify_number("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.network(), Network::Visa);
/// assert_eq!(card.last_four(), "1111");
/// ```
pub fn classify_number(raw: &str) -> Result<ClassifiedCard, Finding> {
    let stripped = strip_formatting(raw);
    if !is_digits(&stripped) {
        return Err(Finding::NumberNotDigits);
    }

    let digits: Vec<u8> = stripped.bytes().map(|b| b - b'0').collect();

    for rule in NETWORK_RULES {
        if rule.matches(&digits) {
            return Ok(ClassifiedCard {
                network: rule.network,
                digits,
            });
        }
    }

    Err(Finding::UnrecognizedNetwork)
}
