//! Utilities for component-aware percent-encoding.
//!
//! Each URI component allows a different set of characters to appear
//! unencoded ([RFC 3986, Section 2.1]); the sets live in [`table`] and
//! are passed to [`encode`] by the component that owns the text. The
//! path gets its own pair of operations because the octet `%2F` inside
//! a path stands for a literal slash that must not be mistaken for a
//! segment separator.
//!
//! [RFC 3986, Section 2.1]: https://datatracker.ietf.org/doc/html/rfc3986/#section-2.1

pub mod table;

use crate::error::{DecodeError, DecodeErrorKind};

use self::table::Table;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xFF; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
static OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet.
fn decode_octet(mut hi: u8, mut lo: u8) -> Option<u8> {
    hi = OCTET_TABLE_HI[hi as usize];
    lo = OCTET_TABLE_LO[lo as usize];
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

/// Percent-encodes the characters of `s` that `table` does not allow.
///
/// Multibyte characters are encoded octet by octet in their UTF-8 form,
/// with uppercase hexadecimal digits. Characters beyond the Basic
/// Multilingual Plane pass through unencoded as a whole so that they
/// are never corrupted halfway.
pub fn encode(s: &str, table: &Table) -> String {
    let mut buf = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch as u32 > 0xFFFF {
            buf.push(ch);
        } else {
            let mut utf8 = [0; 4];
            for &x in ch.encode_utf8(&mut utf8).as_bytes() {
                table.encode(x, &mut buf);
            }
        }
    }
    buf
}

/// Decodes all percent-encoded triples in `s`.
///
/// # Errors
///
/// Returns `Err` if a "%" is not followed by two hexadecimal digits,
/// or if the decoded octets are not valid UTF-8.
pub fn decode(s: &str) -> Result<String, DecodeError> {
    let bytes = s.as_bytes();
    let mut buf = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' {
            let octet = match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(&hi), Some(&lo)) => decode_octet(hi, lo),
                _ => None,
            };
            match octet {
                Some(octet) => buf.push(octet),
                None => return Err(DecodeError::new(i, DecodeErrorKind::InvalidOctet)),
            }
            i += 3;
        } else {
            buf.push(x);
            i += 1;
        }
    }
    String::from_utf8(buf).map_err(|e| {
        DecodeError::new(e.utf8_error().valid_up_to(), DecodeErrorKind::InvalidUtf8)
    })
}

/// Splits a path at each case-insensitive `%2f` token.
fn split_encoded_slash(mut s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    loop {
        let token = s
            .as_bytes()
            .windows(3)
            .position(|w| w[0] == b'%' && w[1] == b'2' && (w[2] == b'f' || w[2] == b'F'));
        match token {
            Some(i) => {
                parts.push(&s[..i]);
                s = &s[i + 3..];
            }
            None => {
                parts.push(s);
                return parts;
            }
        }
    }
}

/// Percent-encodes a path component.
///
/// The path is split at each case-insensitive `%2f` token, the parts
/// are encoded with slashes kept structural, and the non-empty parts
/// are rejoined with the literal token `%2F`. Empty parts are dropped
/// from the rejoin, so a leading or trailing token disappears and
/// consecutive tokens collapse into one.
pub fn encode_path(path: &str) -> String {
    let mut buf = String::with_capacity(path.len());
    for part in split_encoded_slash(path) {
        let part = encode(part, table::PATH);
        if part.is_empty() {
            continue;
        }
        if !buf.is_empty() {
            buf.push_str("%2F");
        }
        buf.push_str(&part);
    }
    buf
}

/// Decodes a path component, preserving literal slashes.
///
/// The inverse counterpart of [`encode_path`]: each part between
/// case-insensitive `%2f` tokens is decoded on its own and the
/// non-empty results are rejoined with the literal token `%2F`, which
/// thus survives in the decoded text as the marker for a slash that is
/// data rather than a segment separator.
///
/// # Errors
///
/// Returns `Err` under the same conditions as [`decode`].
pub fn decode_path(path: &str) -> Result<String, DecodeError> {
    let mut buf = String::with_capacity(path.len());
    for part in split_encoded_slash(path) {
        let part = decode(part)?;
        if part.is_empty() {
            continue;
        }
        if !buf.is_empty() {
            buf.push_str("%2F");
        }
        buf.push_str(&part);
    }
    Ok(buf)
}
