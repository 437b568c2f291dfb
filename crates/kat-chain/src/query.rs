//! URL query string assembly and decoding (RFC 3986 percent-encoding).
//!
//! [`Query`] wraps a [`Chain`] rather than tagging it with a [`Role`], because
//! it needs state a role tag alone cannot carry: the byte offset of the
//! first `?` it has written, used later to split the assembled string back
//! into key/value pairs.
//!
//! [`Role`]: crate::chain::Role
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use crate::{binary, chain::Chain, error::Result};

/// The ASCII unreserved set RFC 3986 §2.3 leaves unescaped, plus `*` (kept
/// unescaped here for compatibility with `application/x-www-form-urlencoded`
/// producers that treat it as safe).
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-' | b'*')
}

/// A `Chain` extension that percent-encodes URL key/value pairs as they are
/// appended and can decode the assembled string back into a map.
///
/// `offset` tracks where the query string proper begins: `-1` before the
/// first [`Query::set`] call, `0` once the leading separator has been
/// written but no key/value content has followed it (unused in practice,
/// kept to mirror the source's three-state offset), and the index one past
/// the first `?` once one has been written.
#[derive(Debug)]
pub struct Query {
    chain: Chain,
    offset: isize,
}

impl Query {
    /// An empty, mutable query assembler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            offset: -1,
        }
    }

    /// Wrap an already-assembled query string (e.g. one read off the wire),
    /// with `offset` unknown: [`Query::to_map`] will scan for the first `?`
    /// itself rather than trusting a recorded position.
    #[must_use]
    pub fn wrap(bytes: Vec<u8>) -> Self {
        Self {
            chain: Chain::wrap(bytes),
            offset: 0,
        }
    }

    /// The assembled bytes so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.chain.as_bytes()
    }

    /// The assembled query string, percent-escapes and all.
    #[must_use]
    pub fn to_url(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// Start a new key: write the separator (`?` the first time, `&`
    /// thereafter), percent-encode `key`, then write `=`.
    ///
    /// # Errors
    ///
    /// Propagates [`ChainError::IllegalState`](crate::error::ChainError::IllegalState)
    /// if the underlying chain has been fixed (never true for a freshly
    /// built `Query`, but preserved for callers that wrap an existing one).
    pub fn set(&mut self, key: &str) -> Result<()> {
        if self.offset < 0 {
            self.chain.append_byte(b'?')?;
            self.offset = self.chain.len() as isize;
        } else {
            self.chain.append_byte(b'&')?;
        }
        self.add_str(key)?;
        self.chain.append_byte(b'=')
    }

    /// Percent-encode and append a single byte per RFC 3986: unreserved
    /// bytes pass through, a space becomes `+`, everything else becomes
    /// `%HH` (uppercase hex).
    pub fn add_byte(&mut self, byte: u8) -> Result<()> {
        if is_unreserved(byte) {
            self.chain.append_byte(byte)
        } else if byte == b' ' {
            self.chain.append_byte(b'+')
        } else {
            self.chain.append_byte(b'%')?;
            let [hi, lo] = binary::format_hex_byte_upper(byte);
            self.chain.append_byte(hi)?;
            self.chain.append_byte(lo)
        }
    }

    /// Percent-encode and append every byte of `text`'s UTF-8 encoding.
    pub fn add_str(&mut self, text: &str) -> Result<()> {
        for &byte in text.as_bytes() {
            self.add_byte(byte)?;
        }
        Ok(())
    }

    /// Decode the assembled query string back into a key/value map.
    ///
    /// Walks from the byte after the first `?` (or the start of the
    /// buffer, if `set` was never called), splitting on `&` and `=` and
    /// percent-decoding (plus `+` as space) each key and value. A key with
    /// no `=` maps to an empty value.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let bytes = self.as_bytes();
        let start = if self.offset > 0 {
            self.offset as usize
        } else if self.offset == 0 {
            bytes
                .iter()
                .position(|&b| b == b'?')
                .map_or(0, |idx| idx + 1)
        } else {
            0
        };
        let body = &bytes[start.min(bytes.len())..];
        let mut map = BTreeMap::new();
        for pair in body.split(|&b| b == b'&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = match pair.iter().position(|&b| b == b'=') {
                Some(idx) => (&pair[..idx], &pair[idx + 1..]),
                None => (pair, &pair[0..0]),
            };
            map.insert(percent_decode(key), percent_decode(value));
        }
        map
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

fn percent_decode(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                if let Some(byte) = bytes
                    .get(i + 1..i + 3)
                    .and_then(|pair| binary::hex_byte(pair[0], pair[1]))
                {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(bytes[i]);
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_add_assemble_a_query_string() {
        let mut query = Query::new();
        query.set("name").unwrap();
        query.add_str("a b+c").unwrap();
        query.set("n").unwrap();
        query.add_str("1").unwrap();
        assert_eq!(query.to_url(), "?name=a+b%2Bc&n=1");
    }

    #[test]
    fn to_map_round_trips() {
        let mut query = Query::new();
        query.set("q").unwrap();
        query.add_str("rust lang").unwrap();
        query.set("page").unwrap();
        query.add_str("2").unwrap();

        let map = query.to_map();
        assert_eq!(map.get("q").map(String::as_str), Some("rust lang"));
        assert_eq!(map.get("page").map(String::as_str), Some("2"));
    }

    #[test]
    fn unreserved_bytes_pass_through_unescaped() {
        let mut query = Query::new();
        query.add_str("abcXYZ019.-_*").unwrap();
        assert_eq!(query.to_url(), "abcXYZ019.-_*");
    }

    #[test]
    fn percent_decode_handles_trailing_malformed_escape() {
        assert_eq!(percent_decode(b"50%"), "50%");
        assert_eq!(percent_decode(b"50%2"), "50%2");
        assert_eq!(percent_decode(b"50%2B"), "50+");
    }

    #[test]
    fn wrapped_query_scans_for_leading_separator() {
        let query = Query::wrap(b"?a=1&b=c+d".to_vec());
        let map = query.to_map();
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("b").map(String::as_str), Some("c d"));
    }

    #[test]
    fn wrapped_query_without_separator_decodes_from_start() {
        let query = Query::wrap(b"a=1&b=2".to_vec());
        let map = query.to_map();
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("b").map(String::as_str), Some("2"));
    }
}
