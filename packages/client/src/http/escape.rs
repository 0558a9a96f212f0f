//! Query escaping

use url::form_urlencoded;

/// Escape a string for use inside a URL query component.
///
/// Spaces become `+` and every byte outside the unreserved set is
/// percent-encoded, the same rules `application/x-www-form-urlencoded` uses.
#[must_use]
pub fn escape(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape("a b&c=d/é"), "a+b%26c%3Dd%2F%C3%A9");
        assert_eq!(escape("plain-text_1.0~"), "plain-text_1.0%7E");
    }
}
