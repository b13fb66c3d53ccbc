//! Email address checks

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$")
        .expect("email regex is valid")
});

/// Common free email providers
const PUBLIC_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "mail.com",
    "protonmail.com",
    "yandex.com",
    "zoho.com",
];

/// Validates email format
///
/// Local part up to 64 characters, one `@`, a dotted domain with a TLD of at
/// least two letters, no empty labels.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            local.len() <= 64
                && domain.len() <= 255
                && !domain.split('.').any(|label| label.starts_with('-') || label.ends_with('-'))
                && EMAIL_REGEX.is_match(email)
        }
        None => false,
    }
}

/// Checks if the address belongs to a public provider (case-insensitive)
pub fn is_public_domain(email: &str) -> bool {
    email
        .rsplit_once('@')
        .map(|(_, domain)| PUBLIC_DOMAINS.iter().any(|d| d.eq_ignore_ascii_case(domain)))
        .unwrap_or(false)
}
