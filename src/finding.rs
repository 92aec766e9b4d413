//! Validation findings produced by the pipeline.
//!
//! Bad input is never an exception here: every rejection is a [`Finding`]
//! appended to a flat list, in detection order, and `Display` renders the
//! exact human-readable message the API reports.

use crate::network::Network;
use std::fmt;

/// Identity of a required form field, used by the required-field gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The card owner name.
    Owner,
    /// The card number.
    Number,
    /// The expiry date.
    Expiry,
    /// The security code.
    Cvc,
}

impl Field {
    /// Returns the field label used in "... is required." messages.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Owner => "Card owner name",
            Self::Number => "Card number",
            Self::Expiry => "Expiry date",
            Self::Cvc => "CVC",
        }
    }
}

/// A single validation finding.
///
/// Missing-field findings are terminal: when the gate produces any of them,
/// no later check runs. All other findings accumulate independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    /// A required field is absent or blank.
    MissingField(Field),
    /// The owner name contains a character other than a letter or space.
    OwnerInvalidCharacters,
    /// The owner name's digit count matches a card-number or CVC length.
    OwnerSensitiveData,
    /// The card's expiry month is wholly in the past.
    Expired,
    /// The card number contains a non-digit after separator stripping.
    NumberNotDigits,
    /// No network rule matched the card number.
    UnrecognizedNetwork,
    /// The security code contains a non-digit character.
    CvcNotDigits,
    /// The security code length does not match the classified network.
    CvcWrongLength(Network),
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required.", field.label()),
            Self::OwnerInvalidCharacters => {
                write!(f, "Card owner name should only contain letters.")
            }
            Self::OwnerSensitiveData => {
                write!(f, "Card owner name appears to contain sensitive information.")
            }
            Self::Expired => write!(f, "Card is expired."),
            Self::NumberNotDigits => write!(f, "Card number must contain only digits."),
            Self::UnrecognizedNetwork => write!(
                f,
                "Card number is not valid for Visa, MasterCard, or American Express."
            ),
            Self::CvcNotDigits => write!(f, "CVC must contain only digits."),
            Self::CvcWrongLength(network) => write!(
                f,
                "{} CVC must be {} digits.",
                network.name(),
                network.cvc_length()
            ),
        }
    }
}

impl std::error::Error for Finding {}
