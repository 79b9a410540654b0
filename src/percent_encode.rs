use crate::compat::{Cow, String};
use crate::error::{Error, ErrorKind, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Query component percent-encode set.
/// Everything except ASCII alphanumerics and the unreserved marks `-._~`.
/// Space is left out so it can be written as `+`.
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b' ');

/// Write a percent-encoded query component directly to buffer.
/// Spaces are written as `+`.
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, QUERY_COMPONENT_SET) {
        if memchr::memchr(b' ', chunk.as_bytes()).is_some() {
            buffer.extend(chunk.chars().map(|c| if c == ' ' { '+' } else { c }));
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a query component (`+` is a space).
/// Strict mode rejects bytes that do not form valid UTF-8; otherwise they
/// are replaced with U+FFFD.
pub fn decode_component(input: &str, strict: bool) -> Result<String> {
    let spaced: Cow<'_, str> = if memchr::memchr(b'+', input.as_bytes()).is_some() {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };

    let decoded = percent_decode_str(&spaced);
    if strict {
        decoded
            .decode_utf8()
            .map(Cow::into_owned)
            .map_err(|_| Error::new(ErrorKind::InvalidPercentEncoding, input))
    } else {
        Ok(decoded.decode_utf8_lossy().into_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn encode(input: &str) -> String {
        let mut buffer = String::new();
        encode_component_into(&mut buffer, input);
        buffer
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode("name"), "name");
        assert_eq!(encode("a b"), "a+b");
        assert_eq!(encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode("1+1"), "1%2B1");
        assert_eq!(encode("-._~"), "-._~");
        assert_eq!(encode("é"), "%C3%A9");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("a+b", true).unwrap(), "a b");
        assert_eq!(decode_component("a%26b%3Dc", true).unwrap(), "a&b=c");
        assert_eq!(decode_component("1%2B1", true).unwrap(), "1+1");
        assert_eq!(decode_component("%C3%A9", true).unwrap(), "é");
        // Malformed escapes pass through
        assert_eq!(decode_component("100%", true).unwrap(), "100%");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode_component("%FF", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPercentEncoding);
        assert_eq!(err.input(), "%FF");
        assert_eq!(decode_component("%FF", false).unwrap(), "\u{FFFD}");
    }

    #[test]
    fn test_decode_error_reports_raw_component() {
        let err = decode_component("a+%FF", true).unwrap_err();
        assert_eq!(err.input(), "a+%FF");
    }
}
