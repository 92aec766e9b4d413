//! # cardcheck
//!
//! Structural validation of payment-card forms (owner name, card number,
//! expiry date, security code) for Visa, MasterCard, and American Express.
//!
//! Validation is purely structural: prefix and length rules classify the
//! number into a network, the expiry is compared month-end against the
//! current instant, and the owner name and security code are checked for
//! format. No Luhn/checksum verification is performed, nothing is stored,
//! and no card network is contacted. One call validates one form; bad input
//! never errors, it accumulates findings.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate, CardForm, Network};
//! use chrono::NaiveDate;
//!
//! let form = CardForm {
//!     card_owner: "John Doe".into(),
//!     card_number: "4111-1111-1111-1111".into(),
//!     expiry_date: NaiveDate::from_ymd_opt(2031, 4, 1),
//!     cvc: "123".into(),
//! };
//!
//! let outcome = validate(&form);
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.network(), Some(Network::Visa));
//! assert!(outcome.error_messages().is_empty());
//! ```
//!
//! ## Pipeline
//!
//! 1. Required-field gate: any blank field stops the pipeline with only the
//!    missing-field messages.
//! 2. Owner name: letter/space character set plus a digit-count heuristic
//!    against pasted card numbers or codes.
//! 3. Expiry: the card is valid through the last day of its expiry month.
//! 4. Network classification: separator stripping, digit check, then the
//!    prefix/length rule table in priority order.
//! 5. Security code: only checked once a network is known; the required
//!    length is network-dependent (Amex 4, others 3).
//!
//! ## Supported Networks
//!
//! | Network | Prefix | Length | CVC |
//! |---------|--------|--------|-----|
//! | Visa | 4 | 13, 16 | 3 |
//! | MasterCard | 51-55, 2221-2720 | 16 | 3 |
//! | American Express | 34, 37 | 15 | 4 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `server` | REST API with Swagger UI |
//!
//! ## Security
//!
//! - Classified card digits are zeroized on drop
//! - `Debug` and `Display` for classified cards show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod cvc;
pub mod expiry;
pub mod finding;
pub mod format;
pub mod network;
pub mod owner;
pub mod validate;

// Re-export main types at crate root
pub use classify::{classify_number, ClassifiedCard};
pub use cvc::check_cvc;
pub use finding::{Field, Finding};
pub use network::Network;
pub use owner::owner_findings;
pub use validate::{validate, validate_form, CardForm, ValidationOutcome};
