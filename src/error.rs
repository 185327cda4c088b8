use core::fmt;

/// Detailed cause of a [`DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// The decoded octets are not valid UTF-8.
    ///
    /// The error index points to the first undecodable octet of the
    /// decoded sequence.
    InvalidUtf8,
}

/// An error occurred when decoding a percent-encoded component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    index: usize,
    kind: DecodeErrorKind,
}

impl DecodeError {
    pub(crate) fn new(index: usize, kind: DecodeErrorKind) -> DecodeError {
        DecodeError { index, kind }
    }

    /// Returns the index where the error occurred in the component string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            DecodeErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            DecodeErrorKind::InvalidUtf8 => "decoded octets are not valid UTF-8 at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl std::error::Error for DecodeError {}

/// Detailed cause of a [`RecomposeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecomposeErrorKind {
    /// The scheme does not match `[a-z]+[a-z0-9+.-]*` case-insensitively.
    InvalidScheme,
    /// The port is neither empty nor all decimal digits.
    InvalidPort,
}

/// An error occurred when recomposing a URI into its string form.
///
/// Components hold whatever a caller assigns to them; format rules for
/// the scheme and port are only checked once recomposition is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecomposeError {
    pub(crate) kind: RecomposeErrorKind,
}

impl RecomposeError {
    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> RecomposeErrorKind {
        self.kind
    }
}

impl fmt::Display for RecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            RecomposeErrorKind::InvalidScheme => {
                "URI scheme must match ^[a-z]+[a-z0-9+.-]*$ case-insensitively"
            }
            RecomposeErrorKind::InvalidPort => "URI authority port must match ^\\d+$",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for RecomposeError {}

/// Detailed cause of a [`ResolveError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveErrorKind {
    /// The base URI has no scheme component.
    MissingBaseScheme,
}

/// An error occurred when resolving a URI reference against a base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveError {
    pub(crate) kind: ResolveErrorKind,
}

impl ResolveError {
    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> ResolveErrorKind {
        self.kind
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ResolveErrorKind::MissingBaseScheme => {
                "scheme component is required to be present in a base URI"
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ResolveError {}
