//! Card networks and the rules that classify numbers into them.
//!
//! Each supported network carries a prefix rule, an accepted set of number
//! lengths, and a required security-code length. The rules live in
//! [`NETWORK_RULES`], an ordered table evaluated first-match-wins by the
//! classifier. The rule sets are mutually exclusive by construction, so the
//! order does not change outcomes, but it is fixed for auditability.

use std::fmt;

/// Supported payment-card networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Visa - leading digit 4, lengths 13 or 16
    Visa,
    /// MasterCard - prefix 51-55 or 2221-2720, length 16
    MasterCard,
    /// American Express - prefix 34 or 37, length 15
    Amex,
}

impl Network {
    /// Returns the display name used in responses and error messages.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Amex => "American Express",
        }
    }

    /// Returns the accepted card-number lengths for this network.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [usize] {
        match self {
            Self::Visa => &[13, 16],
            Self::MasterCard => &[16],
            Self::Amex => &[15],
        }
    }

    /// Returns true if the given digit count is accepted for this network.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns the required security-code length for this network.
    ///
    /// American Express codes are 4 digits, Visa and MasterCard are 3.
    #[inline]
    pub const fn cvc_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A numeric range over the leading digits of a card number.
///
/// `digits` is how many leading digits to read; the value they form must lie
/// in `lo..=hi` for the range to match. "51-55" is `{ digits: 2, lo: 51,
/// hi: 55 }`, a plain "starts with 4" is `{ digits: 1, lo: 4, hi: 4 }`.
#[derive(Debug, Clone, Copy)]
pub struct PrefixRange {
    /// Number of leading digits the range covers.
    pub digits: usize,
    /// Inclusive lower bound of the leading value.
    pub lo: u32,
    /// Inclusive upper bound of the leading value.
    pub hi: u32,
}

/// One row of the classification matrix: a network matches when any of its
/// prefix ranges matches and the digit count is in its accepted length set.
#[derive(Debug, Clone, Copy)]
pub struct NetworkRule {
    /// The network this rule selects.
    pub network: Network,
    /// Alternative prefix ranges; any one suffices.
    pub prefixes: &'static [PrefixRange],
}

impl NetworkRule {
    /// Returns true if `digits` satisfies both the prefix rule and the
    /// length set of this rule's network.
    pub fn matches(&self, digits: &[u8]) -> bool {
        if !self.network.is_valid_length(digits.len()) {
            return false;
        }
        self.prefixes
            .iter()
            .any(|range| match leading_value(digits, range.digits) {
                Some(value) => range.lo <= value && value <= range.hi,
                None => false,
            })
    }
}

/// The classification matrix, in fixed priority order.
pub const NETWORK_RULES: &[NetworkRule] = &[
    NetworkRule {
        network: Network::Visa,
        prefixes: &[PrefixRange {
            digits: 1,
            lo: 4,
            hi: 4,
        }],
    },
    NetworkRule {
        network: Network::MasterCard,
        prefixes: &[
            PrefixRange {
                digits: 2,
                lo: 51,
                hi: 55,
            },
            PrefixRange {
                digits: 4,
                lo: 2221,
                hi: 2720,
            },
        ],
    },
    NetworkRule {
        network: Network::Amex,
        prefixes: &[
            PrefixRange {
                digits: 2,
                lo: 34,
                hi: 34,
            },
            PrefixRange {
                digits: 2,
                lo: 37,
                hi: 37,
            },
        ],
    },
];

/// Reads the value formed by the first `n` digits, or `None` if the number
/// is shorter than `n`.
fn leading_value(digits: &[u8], n: usize) -> Option<u32> {
    if digits.len() < n {
        return None;
    }
    Some(digits[..n].iter().fold(0u32, |acc, &d| acc * 10 + d as u32))
}
