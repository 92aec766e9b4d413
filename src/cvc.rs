//! Security-code (CVC) validation against a classified network.
//!
//! The CVC is only checked once a network is known: the required length is
//! network-dependent (American Express 4 digits, Visa and MasterCard 3), so
//! its correctness is undecidable without a classification.

use crate::finding::Finding;
use crate::format::is_digits;
use crate::network::Network;

/// Checks a security code against the classified network.
///
/// A non-digit character is terminal for this validator: the length is not
/// additionally checked in that case.
///
/// # Example
///
/// ```
/// use cardcheck::{check_cvc, Finding, Network};
///
/// assert_eq!(check_cvc("123", Network::Visa), None);
/// assert_eq!(check_cvc("1234", Network::Amex), None);
/// assert_eq!(
///     check_cvc("12", Network::Visa),
///     Some(Finding::CvcWrongLength(Network::Visa))
/// );
/// ```
pub fn check_cvc(cvc: &str, network: Network) -> Option<Finding> {
    if !is_digits(cvc) {
        return Some(Finding::CvcNotDigits);
    }
    if cvc.len() != network.cvc_length() {
        return Some(Finding::CvcWrongLength(network));
    }
    None
}
