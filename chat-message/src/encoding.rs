//! Percent encoding for deep-link query text
//!
//! Matches JavaScript's `encodeURIComponent`: everything except
//! `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is UTF-8 percent-encoded, so a link
//! built here is byte-for-byte the link a browser page would build.

use crate::error::{LinkError, LinkResult};

/// Characters `encodeURIComponent` leaves alone but `urlencoding` escapes
const EXTRA_UNRESERVED: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode a query component
pub fn encode_component(s: &str) -> String {
    let mut out = urlencoding::encode(s).into_owned();
    for (escaped, raw) in EXTRA_UNRESERVED {
        if out.contains(escaped) {
            out = out.replace(escaped, raw);
        }
    }
    out
}

/// Decode a percent-encoded query component
pub fn decode_component(s: &str) -> LinkResult<String> {
    urlencoding::decode(s)
        .map(|cow| cow.into_owned())
        .map_err(|e| LinkError::InvalidText(e.to_string()))
}
