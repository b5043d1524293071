//! Indian mobile number input handling.

use std::sync::OnceLock;

use regex::Regex;

/// Fixed country-code prefix written in front of every formatted number.
pub const PHONE_PREFIX: &str = "+91 ";

const COUNTRY_MARKER: &str = "+91";
const COUNTRY_DIGITS: &str = "91";
const NATIONAL_LEN: usize = 10;
const GROUP_LEN: usize = 5;

/// Reformat raw phone input as `+91 DDDDD DDDDD`, applied on every edit.
///
/// Partial input produces a partial number (`+91 987`). Idempotent: feeding the
/// output back in returns it unchanged.
pub fn format_phone_input(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if kept.is_empty() {
        return String::new();
    }

    let mut national: String = match kept.strip_prefix(COUNTRY_MARKER) {
        Some(rest) => rest.chars().filter(char::is_ascii_digit).collect(),
        None => {
            let digits: String = kept.chars().filter(char::is_ascii_digit).collect();
            // Country code typed without the plus.
            match digits.strip_prefix(COUNTRY_DIGITS) {
                Some(rest) if digits.len() > NATIONAL_LEN => rest.to_string(),
                _ => digits,
            }
        }
    };
    national.truncate(NATIONAL_LEN);

    let mut formatted = String::with_capacity(PHONE_PREFIX.len() + NATIONAL_LEN + 1);
    formatted.push_str(PHONE_PREFIX);
    if national.len() <= GROUP_LEN {
        formatted.push_str(&national);
    } else {
        formatted.push_str(&national[..GROUP_LEN]);
        formatted.push(' ');
        formatted.push_str(&national[GROUP_LEN..]);
    }
    formatted
}

/// Whether `phone` is a complete number in the `+91 DDDDD DDDDD` form.
pub fn is_valid_phone(phone: &str) -> bool {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^\+91 [0-9]{5} [0-9]{5}$").expect("phone pattern is valid"));
    regex.is_match(phone)
}
