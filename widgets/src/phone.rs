//! Russian mobile number input mask.
//!
//! Digits are regrouped as `+7 (XXX) XXX-XX-XX` while the user types. Input
//! that does not start with a `7` or `8` trunk prefix is left alone.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Maximum digits kept, including the trunk prefix.
pub const MAX_DIGITS: usize = 11;

/// Reformat a raw input value.
///
/// Returns `None` when the value should be left exactly as typed: no digits,
/// a non-Russian prefix, or only the prefix digit so far.
#[must_use]
pub fn format_phone(raw: &str) -> Option<String> {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(MAX_DIGITS).collect();
    let (&prefix, rest) = digits.split_first()?;
    if !matches!(prefix, '7' | '8') || rest.is_empty() {
        return None;
    }

    let group = |from: usize, to: usize| digits[from..to.min(digits.len())].iter().collect::<String>();

    let mut formatted = String::from("+7 (");
    formatted.push_str(&group(1, 4));
    if digits.len() > 4 {
        formatted.push_str(") ");
        formatted.push_str(&group(4, 7));
    }
    if digits.len() > 7 {
        formatted.push('-');
        formatted.push_str(&group(7, 9));
    }
    if digits.len() > 9 {
        formatted.push('-');
        formatted.push_str(&group(9, 11));
    }
    Some(formatted)
}
