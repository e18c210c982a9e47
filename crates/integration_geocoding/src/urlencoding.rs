//! Form-style percent encoding for request parameter values
//!
//! Caller input is decoded first so values that arrive already encoded are
//! not encoded twice, then re-encoded for the query string.

use percent_encoding::percent_decode_str;

/// Percent-encode a parameter value for use in a URL query string
///
/// Keeps unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `_`, `.`, `~`) and
/// `,` literal. Spaces are encoded as `+`.
pub fn encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                result.push(char::from(byte));
            },
            b' ' => result.push('+'),
            _ => result.push_str(&format!("%{byte:02X}")),
        }
    }
    result
}

/// Decode a form-encoded value
///
/// `+` becomes a space and `%XX` becomes the byte `XX`. A `%` that is not
/// followed by two hex digits is kept as-is. Invalid UTF-8 is replaced.
pub fn decode(input: &str) -> String {
    percent_decode_str(&input.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
