use super::*;

#[test]
fn plain_fragment() {
    assert_eq!(fragment_id("#pricing"), Some("pricing"));
}

#[test]
fn bare_hash_is_not_a_target() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn external_and_relative_links_are_not_targets() {
    assert_eq!(fragment_id("https://example.com/#faq"), None);
    assert_eq!(fragment_id("/order#step2"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(fragment_id("  #faq "), Some("faq"));
}

#[test]
fn fragment_is_not_parsed_as_selector() {
    assert_eq!(fragment_id("#a.b[c]"), Some("a.b[c]"));
}
