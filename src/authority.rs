use once_cell::sync::Lazy;
use regex::Regex;

use crate::encoding::{self, table};
use crate::error::{DecodeError, RecomposeError, RecomposeErrorKind};
use crate::UserInfo;

// port = *DIGIT (RFC 3986, Section 3.2.3)
static PORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// The [authority component] of a URI.
///
/// All fields are freely mutable; the port format is only checked by
/// [`recompose`](Self::recompose).
///
/// [authority component]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Authority {
    /// The user information subcomponent.
    pub user_info: Option<UserInfo>,
    /// The host subcomponent, in decoded form.
    pub host: Option<String>,
    /// The port subcomponent, kept as digits.
    ///
    /// `Some("")` records a colon with no digits after it.
    pub port: Option<String>,
}

impl Authority {
    /// Parses an authority string split off from a URI reference.
    ///
    /// Everything before the last "@" is user information. A trailing
    /// ":" yields an empty port; a last ":" followed by digits only
    /// yields that port; any other ":" stays in the host, so IPv6
    /// literals come through intact. An empty input yields an
    /// `Authority` with all fields unset.
    ///
    /// # Errors
    ///
    /// Returns `Err` if percent-decoding of a subcomponent fails.
    pub fn parse(s: &str) -> Result<Authority, DecodeError> {
        let mut authority = Authority::default();
        if s.is_empty() {
            return Ok(authority);
        }
        let mut rest = s;
        if let Some(at) = rest.rfind('@') {
            authority.user_info = Some(UserInfo::parse(&rest[..at])?);
            rest = &rest[at + 1..];
        }
        if let Some(colon) = rest.rfind(':') {
            let digits = &rest[colon + 1..];
            if digits.is_empty() || PORT.is_match(digits) {
                authority.port = Some(digits.to_owned());
                rest = &rest[..colon];
            }
        }
        authority.host = Some(encoding::decode(rest)?);
        Ok(authority)
    }

    /// Recomposes the subcomponents into the `[userinfo@]host[:port]` form.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the port is neither empty nor all digits.
    pub fn recompose(&self) -> Result<String, RecomposeError> {
        let mut buf = String::new();
        if let Some(user_info) = &self.user_info {
            buf.push_str(&user_info.recompose());
            buf.push('@');
        }
        if let Some(host) = &self.host {
            buf.push_str(&encoding::encode(host, table::HOST));
        }
        if let Some(port) = &self.port {
            if !port.is_empty() && !PORT.is_match(port) {
                return Err(RecomposeError {
                    kind: RecomposeErrorKind::InvalidPort,
                });
            }
            buf.push(':');
            buf.push_str(port);
        }
        Ok(buf)
    }
}
