//! Field validation rules
//!
//! Pattern and length checks shared by the checkout wizard and the
//! profile form. All patterns use ASCII digit classes so that
//! full-width or other Unicode digits are rejected.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Major card issuer numbering: Visa, Mastercard, Discover, Amex,
    /// Diners Club and JCB prefixes with their lengths
    static ref PATTERN_CARD_NUMBER: Regex = Regex::new(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11})$"
    ).unwrap();

    /// Pattern: exactly five digits
    static ref PATTERN_ZIP_CODE: Regex = Regex::new(r"^[0-9]{5}$").unwrap();

    /// Pattern: MM/YY with month 01-12
    static ref PATTERN_EXPIRY: Regex = Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").unwrap();

    /// Pattern: three or four digits
    static ref PATTERN_CVC: Regex = Regex::new(r"^[0-9]{3,4}$").unwrap();

    /// Pattern: local@domain.tld
    static ref PATTERN_EMAIL: Regex = Regex::new(
        r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$"
    ).unwrap();
}

/// Check that a value has at least `min` characters
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check a card number against known issuer patterns
pub fn is_card_number(value: &str) -> bool {
    PATTERN_CARD_NUMBER.is_match(value)
}

/// Check a five-digit zip code
pub fn is_zip_code(value: &str) -> bool {
    PATTERN_ZIP_CODE.is_match(value)
}

/// Check an MM/YY expiry date
pub fn is_expiry_date(value: &str) -> bool {
    PATTERN_EXPIRY.is_match(value)
}

/// Check a card verification code
pub fn is_cvc(value: &str) -> bool {
    PATTERN_CVC.is_match(value)
}

/// Check an email address
pub fn is_email(value: &str) -> bool {
    PATTERN_EMAIL.is_match(value)
}
