//! The validation pipeline for a submitted card form.
//!
//! Orchestration order is fixed: required-field gate, then (only if the gate
//! passed) owner name, expiry, network classification, and, only when a
//! network classified, the security code. The gate is the single
//! short-circuit point; every later check runs independently and appends its
//! findings to one flat, ordered list.

use crate::classify::classify_number;
use crate::cvc::check_cvc;
use crate::expiry::is_expired;
use crate::finding::{Field, Finding};
use crate::format::is_blank;
use crate::network::Network;
use crate::owner::owner_findings;
use chrono::{DateTime, NaiveDate, Utc};

/// A submitted payment-card form.
///
/// The raw field values as the caller received them; validation never
/// mutates them. A `None` expiry date is the "not provided" case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    /// Card owner name, intended to hold only letters and spaces.
    pub card_owner: String,
    /// Raw card number, possibly with spaces or hyphens as separators.
    pub card_number: String,
    /// Expiry date; only the year and month are semantically used.
    pub expiry_date: Option<NaiveDate>,
    /// Security code, intended to hold only digits.
    pub cvc: String,
}

/// The result of validating one [`CardForm`].
///
/// Validity is derived from the findings list, so an outcome can never claim
/// to be valid while carrying errors or vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    network: Option<Network>,
    findings: Vec<Finding>,
}

impl ValidationOutcome {
    /// Returns true if no finding was produced.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the classified network, if the number classified.
    #[inline]
    pub const fn network(&self) -> Option<Network> {
        self.network
    }

    /// Returns the findings in detection order.
    #[inline]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Renders the findings as human-readable messages, in detection order.
    pub fn error_messages(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }
}

/// Produces the required-field findings, in fixed field order.
fn missing_fields(form: &CardForm) -> Vec<Finding> {
    let mut findings = Vec::new();
    if is_blank(&form.card_owner) {
        findings.push(Finding::MissingField(Field::Owner));
    }
    if is_blank(&form.card_number) {
        findings.push(Finding::MissingField(Field::Number));
    }
    if form.expiry_date.is_none() {
        findings.push(Finding::MissingField(Field::Expiry));
    }
    if is_blank(&form.cvc) {
        findings.push(Finding::MissingField(Field::Cvc));
    }
    findings
}

/// Validates a card form against an explicit current instant.
///
/// This is the whole pipeline; `now` exists as a parameter so expiry
/// behavior is reproducible in tests. The call is a pure function of
/// `(form, now)` and never fails; bad input comes back as findings.
///
/// # Example
///
/// ```
/// use cardcheck::{validate_form, CardForm, Network};
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let form = CardForm {
///     card_owner: "John Doe".into(),
///     card_number: "4111 1111 1111 1111".into(),
///     expiry_date: NaiveDate::from_ymd_opt(2030, 4, 1),
///     cvc: "123".into(),
/// };
/// let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
///
/// let outcome = validate_form(&form, now);
/// assert!(outcome.is_valid());
/// assert_eq!(outcome.network(), Some(Network::Visa));
/// assert!(outcome.findings().is_empty());
/// ```
pub fn validate_form(form: &CardForm, now: DateTime<Utc>) -> ValidationOutcome {
    let mut findings = missing_fields(form);

    // The one short-circuit: downstream checks assume non-empty fields.
    if !findings.is_empty() {
        return ValidationOutcome {
            network: None,
            findings,
        };
    }

    findings.extend(owner_findings(&form.card_owner));

    if let Some(expiry) = form.expiry_date {
        if is_expired(expiry, now) {
            findings.push(Finding::Expired);
        }
    }

    let network = match classify_number(&form.card_number) {
        Ok(card) => Some(card.network()),
        Err(finding) => {
            findings.push(finding);
            None
        }
    };

    // CVC length is undecidable without a network, so it is only checked
    // after a successful classification.
    if let Some(network) = network {
        if let Some(finding) = check_cvc(&form.cvc, network) {
            findings.push(finding);
        }
    }

    ValidationOutcome { network, findings }
}

/// Validates a card form against the current wall-clock time.
#[inline]
pub fn validate(form: &CardForm) -> ValidationOutcome {
    validate_form(form, Utc::now())
}
