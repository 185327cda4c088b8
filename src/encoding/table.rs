//! Per-component character tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 2234].
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/

const fn gen_hex_table() -> [u8; 512] {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut i = 0;
    let mut out = [0; 512];
    while i < 256 {
        out[i * 2] = HEX_DIGITS[i >> 4];
        out[i * 2 + 1] = HEX_DIGITS[i & 0b1111];
        i += 1;
    }
    out
}

const HEX_TABLE: &[u8; 512] = &gen_hex_table();

/// A table determining the characters a component keeps in unencoded form.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    arr: [bool; 256],
}

impl Table {
    /// Generates a table that allows the given unencoded bytes.
    pub const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 256];
        while let [cur, rem @ ..] = bytes {
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table { arr }
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed either by
    /// `self` or by `other`.
    pub const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self
    }

    /// Returns `true` if the given unencoded byte is allowed by the table.
    #[inline]
    pub const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize]
    }

    /// Pushes a byte onto `buf`, percent-encoding it with uppercase
    /// hexadecimal digits unless the table allows it unencoded.
    #[inline]
    pub(crate) fn encode(&self, x: u8, buf: &mut String) {
        if self.allows(x) {
            buf.push(x as char);
        } else {
            buf.push('%');
            buf.push(HEX_TABLE[x as usize * 2] as char);
            buf.push(HEX_TABLE[x as usize * 2 + 1] as char);
        }
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// ALPHA = A-Z / a-z
pub const ALPHA: &Table = &gen(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// DIGIT = 0-9
pub const DIGIT: &Table = &gen(b"0123456789");

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub const UNRESERVED: &Table = &ALPHA.or(DIGIT).or(&gen(b"-._~"));

/// The user information subcomponent: unreserved / sub-delims
/// ([RFC 3986, Section 3.2.1]).
///
/// [RFC 3986, Section 3.2.1]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
pub const USERINFO: &Table = &UNRESERVED.or(SUB_DELIMS);

/// The host subcomponent: unreserved / sub-delims / ":" / "[" / "]"
/// ([RFC 3986, Section 3.2.2]).
///
/// The colon and brackets stay unencoded so that IP literals survive.
///
/// [RFC 3986, Section 3.2.2]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2
pub const HOST: &Table = &USERINFO.or(&gen(b":[]"));

/// The path component: pchar / "/" ([RFC 3986, Section 3.3]).
///
/// [RFC 3986, Section 3.3]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
pub const PATH: &Table = &USERINFO.or(&gen(b":@/"));

/// A query key or value ([RFC 3986, Section 3.4]).
///
/// Unlike the generic query production, the pair delimiters "&", "="
/// and "+" are always encoded so they cannot be confused with
/// structure when the component is parsed back.
pub const QUERY_PART: &Table = &UNRESERVED.or(&gen(b"!$'()*,;:@/?"));

/// The fragment component: pchar / "/" / "?" ([RFC 3986, Section 3.5]).
///
/// [RFC 3986, Section 3.5]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.5
pub const FRAGMENT: &Table = &PATH.or(&gen(b"?"));
