//! Integration tests for the card form validation pipeline.
//!
//! These cover the end-to-end behavior a caller of the API observes: which
//! forms are accepted, which network is reported, and exactly which error
//! messages come back in which order.

use cardcheck::{validate_form, CardForm, Field, Finding, Network};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

mod test_cards {
    pub const VISA_16: &str = "4111111111111111";
    pub const VISA_13: &str = "4222222222222";
    pub const MASTERCARD: &str = "5555555555554444";
    pub const MASTERCARD_LOW: &str = "5105105105105100";
    pub const MASTERCARD_2SERIES: &str = "2223000048400011";
    pub const AMEX: &str = "371449635398431";
    pub const AMEX_34: &str = "340000000000009";
    pub const DISCOVER: &str = "6011111111111117";
}

/// Fixed "current" instant so expiry behavior is reproducible.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
}

fn next_year() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2027, 8, 1)
}

fn last_year() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 8, 1)
}

fn form(owner: &str, number: &str, expiry: Option<NaiveDate>, cvc: &str) -> CardForm {
    CardForm {
        card_owner: owner.into(),
        card_number: number.into(),
        expiry_date: expiry,
        cvc: cvc.into(),
    }
}

// =============================================================================
// ACCEPTED FORMS
// =============================================================================

#[test]
fn test_valid_visa_form() {
    let outcome = validate_form(
        &form("John Doe", test_cards::VISA_16, next_year(), "123"),
        now(),
    );
    assert!(outcome.is_valid());
    assert_eq!(outcome.network(), Some(Network::Visa));
    assert!(outcome.error_messages().is_empty());
}

#[test]
fn test_valid_thirteen_digit_visa() {
    let outcome = validate_form(
        &form("John Doe", test_cards::VISA_13, next_year(), "123"),
        now(),
    );
    assert!(outcome.is_valid());
    assert_eq!(outcome.network(), Some(Network::Visa));
}

#[test]
fn test_valid_mastercard_form() {
    for number in [
        test_cards::MASTERCARD,
        test_cards::MASTERCARD_LOW,
        test_cards::MASTERCARD_2SERIES,
    ] {
        let outcome = validate_form(&form("Alice Smith", number, next_year(), "123"), now());
        assert!(outcome.is_valid(), "{number} should validate");
        assert_eq!(outcome.network(), Some(Network::MasterCard));
    }
}

#[test]
fn test_valid_amex_form() {
    for number in [test_cards::AMEX, test_cards::AMEX_34] {
        let outcome = validate_form(&form("Bob Johnson", number, next_year(), "1234"), now());
        assert!(outcome.is_valid(), "{number} should validate");
        assert_eq!(outcome.network(), Some(Network::Amex));
    }
}

#[test]
fn test_formatted_number_validates_identically() {
    let plain = validate_form(
        &form("John Doe", test_cards::VISA_16, next_year(), "123"),
        now(),
    );
    for formatted in [
        "4111-1111-1111-1111",
        "4111 1111 1111 1111",
        "4111-1111 1111-1111",
        " 4111111111111111 ",
    ] {
        let outcome = validate_form(&form("John Doe", formatted, next_year(), "123"), now());
        assert_eq!(outcome, plain, "separator variant: {formatted}");
    }
}

// =============================================================================
// REQUIRED-FIELD GATE
// =============================================================================

#[test]
fn test_missing_owner() {
    let outcome = validate_form(&form("", test_cards::VISA_16, next_year(), "123"), now());
    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.error_messages(),
        vec!["Card owner name is required."]
    );
}

#[test]
fn test_whitespace_only_counts_as_missing() {
    let outcome = validate_form(&form("John Doe", "   ", next_year(), "123"), now());
    assert_eq!(outcome.error_messages(), vec!["Card number is required."]);
}

#[test]
fn test_missing_expiry() {
    let outcome = validate_form(&form("John Doe", test_cards::VISA_16, None, "123"), now());
    assert_eq!(outcome.error_messages(), vec!["Expiry date is required."]);
}

#[test]
fn test_all_fields_missing() {
    let outcome = validate_form(&form("", "", None, ""), now());
    assert_eq!(
        outcome.error_messages(),
        vec![
            "Card owner name is required.",
            "Card number is required.",
            "Expiry date is required.",
            "CVC is required.",
        ]
    );
}

#[test]
fn test_gate_suppresses_later_checks() {
    // CVC missing plus a bad owner and bad number: only the missing-field
    // finding appears, the other stages never ran.
    let outcome = validate_form(&form("John123", "garbage", next_year(), ""), now());
    assert_eq!(outcome.error_messages(), vec!["CVC is required."]);
    assert_eq!(outcome.network(), None);
}

// =============================================================================
// OWNER NAME
// =============================================================================

#[test]
fn test_owner_with_digits() {
    let outcome = validate_form(
        &form("John123", test_cards::VISA_16, next_year(), "123"),
        now(),
    );
    assert!(!outcome.is_valid());
    assert!(outcome
        .findings()
        .contains(&Finding::OwnerInvalidCharacters));
    // "John123" has 3 digits, so the sensitive-data heuristic fires too
    assert!(outcome.findings().contains(&Finding::OwnerSensitiveData));
}

#[test]
fn test_owner_with_special_characters() {
    let outcome = validate_form(
        &form("John!#¤", test_cards::VISA_16, next_year(), "123"),
        now(),
    );
    assert_eq!(
        outcome.error_messages(),
        vec!["Card owner name should only contain letters."]
    );
}

#[test]
fn test_owner_sensitive_data_heuristic_thresholds() {
    // 13 digits pasted into the name field looks like a Visa number
    let outcome = validate_form(
        &form(
            "John1234567890123",
            test_cards::VISA_16,
            next_year(),
            "123",
        ),
        now(),
    );
    assert!(outcome.findings().contains(&Finding::OwnerSensitiveData));

    // 14 digits matches no card or CVC length, so only the character-set
    // check fires
    let outcome = validate_form(
        &form(
            "John12345678901234",
            test_cards::VISA_16,
            next_year(),
            "123",
        ),
        now(),
    );
    assert!(!outcome.findings().contains(&Finding::OwnerSensitiveData));
    assert!(outcome
        .findings()
        .contains(&Finding::OwnerInvalidCharacters));
}

// =============================================================================
// EXPIRY
// =============================================================================

#[test]
fn test_expired_card() {
    let outcome = validate_form(
        &form("Expired Card", test_cards::VISA_16, last_year(), "123"),
        now(),
    );
    assert!(!outcome.is_valid());
    assert_eq!(outcome.error_messages(), vec!["Card is expired."]);
    assert_eq!(outcome.network(), Some(Network::Visa));
}

#[test]
fn test_current_month_not_expired() {
    // now() is 30 Aug 2026; a card stamped for August 2026 is still good
    let outcome = validate_form(
        &form(
            "John Doe",
            test_cards::VISA_16,
            NaiveDate::from_ymd_opt(2026, 8, 1),
            "123",
        ),
        now(),
    );
    assert!(outcome.is_valid());
}

#[test]
fn test_previous_month_expired() {
    let outcome = validate_form(
        &form(
            "John Doe",
            test_cards::VISA_16,
            NaiveDate::from_ymd_opt(2026, 7, 31),
            "123",
        ),
        now(),
    );
    assert_eq!(outcome.error_messages(), vec!["Card is expired."]);
}

// =============================================================================
// NUMBER / NETWORK
// =============================================================================

#[test]
fn test_number_with_letters() {
    let outcome = validate_form(
        &form("John Doe", "4111a11111111111", next_year(), "123"),
        now(),
    );
    assert_eq!(
        outcome.error_messages(),
        vec!["Card number must contain only digits."]
    );
    assert_eq!(outcome.network(), None);
}

#[test]
fn test_unsupported_network() {
    let outcome = validate_form(
        &form("John Doe", test_cards::DISCOVER, next_year(), "123"),
        now(),
    );
    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.error_messages(),
        vec!["Card number is not valid for Visa, MasterCard, or American Express."]
    );
}

#[test]
fn test_no_cvc_finding_without_network() {
    // The CVC is the wrong length for every network, but with no
    // classification it is never length-checked.
    let outcome = validate_form(
        &form("John Doe", test_cards::DISCOVER, next_year(), "12"),
        now(),
    );
    assert_eq!(
        outcome.error_messages(),
        vec!["Card number is not valid for Visa, MasterCard, or American Express."]
    );
}

// =============================================================================
// CVC
// =============================================================================

#[test]
fn test_visa_cvc_wrong_length() {
    let outcome = validate_form(
        &form("John Doe", test_cards::VISA_16, next_year(), "12"),
        now(),
    );
    assert_eq!(outcome.error_messages(), vec!["Visa CVC must be 3 digits."]);
}

#[test]
fn test_mastercard_cvc_wrong_length() {
    let outcome = validate_form(
        &form("John Doe", test_cards::MASTERCARD, next_year(), "1234"),
        now(),
    );
    assert_eq!(
        outcome.error_messages(),
        vec!["MasterCard CVC must be 3 digits."]
    );
}

#[test]
fn test_amex_cvc_wrong_length() {
    let outcome = validate_form(
        &form("Jane Doe", test_cards::AMEX, next_year(), "123"),
        now(),
    );
    assert_eq!(
        outcome.error_messages(),
        vec!["American Express CVC must be 4 digits."]
    );
}

#[test]
fn test_cvc_with_non_digits() {
    let outcome = validate_form(
        &form("John Doe", test_cards::VISA_16, next_year(), "12a"),
        now(),
    );
    assert_eq!(
        outcome.error_messages(),
        vec!["CVC must contain only digits."]
    );
}

// =============================================================================
// ACCUMULATION AND ORDERING
// =============================================================================

#[test]
fn test_every_stage_can_contribute() {
    let outcome = validate_form(
        &form("J@ne123", test_cards::VISA_16, last_year(), "12"),
        now(),
    );
    assert_eq!(
        outcome.error_messages(),
        vec![
            "Card owner name should only contain letters.",
            "Card owner name appears to contain sensitive information.",
            "Card is expired.",
            "Visa CVC must be 3 digits.",
        ]
    );
}

#[test]
fn test_missing_field_variants_carry_identity() {
    let outcome = validate_form(&form("", test_cards::VISA_16, None, "123"), now());
    assert_eq!(
        outcome.findings(),
        &[
            Finding::MissingField(Field::Owner),
            Finding::MissingField(Field::Expiry),
        ]
    );
}

#[test]
fn test_idempotence() {
    let request = form("John Doe", "4111-1111-1111-1111", next_year(), "123");
    let first = validate_form(&request, now());
    let second = validate_form(&request, now());
    assert_eq!(first, second);
}
