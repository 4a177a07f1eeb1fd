//! Masking helpers so contact details do not end up in logs verbatim.

const VISIBLE_PREFIX: usize = 3;
const VISIBLE_PHONE_SUFFIX: usize = 2;

fn keep_prefix(value: &str, visible: usize) -> String {
    let prefix: String = value.chars().take(visible).collect();
    format!("{}***", prefix)
}

/// Mask the local part of an email, keeping its first three characters.
///
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", keep_prefix(local, VISIBLE_PREFIX), domain),
        None => keep_prefix(email, VISIBLE_PREFIX),
    }
}

/// Mask a phone number down to its country prefix and last two digits.
pub fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() <= VISIBLE_PREFIX + VISIBLE_PHONE_SUFFIX {
        return "***".to_string();
    }

    let head: String = digits[..VISIBLE_PREFIX].iter().collect();
    let tail: String = digits[digits.len() - VISIBLE_PHONE_SUFFIX..].iter().collect();
    format!("{}***{}", head, tail)
}
