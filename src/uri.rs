use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::encoding::{self, table};
use crate::error::{DecodeError, RecomposeError, RecomposeErrorKind, ResolveError};
use crate::{resolve, Authority, Query};

// The capturing pattern of RFC 3986, Appendix B, with the scheme,
// authority, path, query and fragment at groups 2, 4, 5, 7 and 9.
static URI_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?").unwrap()
});

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) (RFC 3986, Section 3.1),
// accepted in either case.
static SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+[A-Za-z0-9+.-]*$").unwrap());

/// A [URI reference] decomposed into its five components.
///
/// Parsing decodes each component once; the fields are then plain data,
/// freely mutable, and only validated again when the URI is
/// [recomposed](Self::recompose). `Clone` yields a deep copy sharing no
/// state with the original.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
///
/// # Examples
///
/// ```
/// use uri_parts::Uri;
///
/// let uri = Uri::parse("http://example.org:3000/some/path?a=1#frag")?;
/// assert_eq!(uri.scheme.as_deref(), Some("http"));
/// assert_eq!(uri.path, "/some/path");
/// assert_eq!(uri.recompose()?, "http://example.org:3000/some/path?a=1#frag");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Uri {
    /// The scheme component, in decoded form.
    ///
    /// Its format is only checked by [`recompose`](Self::recompose).
    pub scheme: Option<String>,
    /// The authority component.
    ///
    /// Present whenever the reference contained "//", even when what
    /// followed was empty.
    pub authority: Option<Authority>,
    /// The path component, in decoded form except for the literal
    /// token `%2F` standing for a slash that is data rather than a
    /// segment separator.
    ///
    /// Always present; the empty string is the "no path" state.
    pub path: String,
    /// The query component.
    pub query: Option<Query>,
    /// The fragment component, in decoded form.
    pub fragment: Option<String>,
}

impl Uri {
    /// Parses a URI reference.
    ///
    /// The grammar matches any input shape, so missing components are
    /// simply left unset; an empty input yields a `Uri` with every
    /// field unset and an empty path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if percent-decoding of a component fails.
    pub fn parse(s: &str) -> Result<Uri, DecodeError> {
        let mut uri = Uri::default();
        let caps = match URI_REFERENCE.captures(s) {
            Some(caps) => caps,
            None => return Ok(uri),
        };
        if let Some(scheme) = caps.get(2) {
            uri.scheme = Some(encoding::decode(scheme.as_str())?);
        }
        if let Some(authority) = caps.get(4) {
            uri.authority = Some(Authority::parse(authority.as_str())?);
        }
        if let Some(path) = caps.get(5) {
            uri.path = encoding::decode_path(path.as_str())?;
        }
        if let Some(query) = caps.get(7) {
            uri.query = Some(Query::parse(query.as_str())?);
        }
        if let Some(fragment) = caps.get(9) {
            uri.fragment = Some(encoding::decode(fragment.as_str())?);
        }
        Ok(uri)
    }

    /// Recomposes the components into a URI string.
    ///
    /// The inverse of [`parse`](Self::parse), per [RFC 3986,
    /// Section 5.3]: each present component is encoded and joined with
    /// the fixed delimiters of the generic grammar.
    ///
    /// [RFC 3986, Section 5.3]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.3
    ///
    /// # Errors
    ///
    /// Returns `Err` if the scheme or the authority port held at this
    /// moment fails its format rule. Nothing is emitted on failure.
    pub fn recompose(&self) -> Result<String, RecomposeError> {
        let mut buf = String::new();
        if let Some(scheme) = &self.scheme {
            if !SCHEME.is_match(scheme) {
                return Err(RecomposeError {
                    kind: RecomposeErrorKind::InvalidScheme,
                });
            }
            buf.push_str(scheme);
            buf.push(':');
        }
        if let Some(authority) = &self.authority {
            buf.push_str("//");
            buf.push_str(&authority.recompose()?);
        }
        buf.push_str(&encoding::encode_path(&self.path));
        if let Some(query) = &self.query {
            buf.push('?');
            buf.push_str(&query.recompose());
        }
        if let Some(fragment) = &self.fragment {
            buf.push('#');
            buf.push_str(&encoding::encode(fragment, table::FRAGMENT));
        }
        Ok(buf)
    }

    /// Resolves this reference against a base URI into its target URI,
    /// per [RFC 3986, Section 5.2].
    ///
    /// Operates purely on the parsed components; neither URI is
    /// re-parsed or modified.
    ///
    /// [RFC 3986, Section 5.2]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2
    ///
    /// # Errors
    ///
    /// Returns `Err` if the base has no scheme component.
    pub fn resolve_relative(&self, base: &Uri) -> Result<Uri, ResolveError> {
        resolve::resolve(base, self)
    }
}

impl FromStr for Uri {
    type Err = DecodeError;

    #[inline]
    fn from_str(s: &str) -> Result<Uri, DecodeError> {
        Uri::parse(s)
    }
}
