// Input validation
// Full-match regex checks for phone numbers, emails and Spanish ID documents

use std::sync::OnceLock;

use regex_lite::Regex;

static PHONE: OnceLock<Regex> = OnceLock::new();
static EMAIL: OnceLock<Regex> = OnceLock::new();
static ID_DOCUMENT: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE.get_or_init(|| Regex::new(r"^[0-9]{9}$").expect("hard-coded regex"))
}

fn email_regex() -> &'static Regex {
    // Practical RFC 5322 shape: dot-separated atoms, then a hostname whose
    // labels neither start nor end with a hyphen.
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
        )
        .expect("hard-coded regex")
    })
}

fn id_document_regex() -> &'static Regex {
    ID_DOCUMENT
        .get_or_init(|| Regex::new(r"^(?:[0-9]{8}[A-Z]|[XYZ][0-9]{7}[A-Z])$").expect("hard-coded regex"))
}

/// Whether `number` is a nine-digit phone number.
pub fn is_valid_phone(number: &str) -> bool {
    !number.is_empty() && phone_regex().is_match(number)
}

/// Whether `number` is a nine-digit mobile phone number.
pub fn is_valid_mobile_phone(number: &str) -> bool {
    is_valid_phone(number)
}

/// Whether `email` is a plausible RFC 5322 address.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Whether `value` is a Spanish identification document: a DNI
/// (eight digits and a control letter) or an NIE (X/Y/Z prefix,
/// seven digits and a control letter).
pub fn is_valid_identification_document(value: &str) -> bool {
    id_document_regex().is_match(value)
}
