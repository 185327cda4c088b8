use crate::encoding::{self, table};
use crate::error::DecodeError;

/// The [user information] subcomponent of a URI authority.
///
/// Both fields hold decoded text and are freely mutable.
///
/// [user information]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInfo {
    /// The user part.
    pub user: Option<String>,
    /// The password part.
    ///
    /// `Some("")` records a colon with nothing after it, which is kept
    /// apart from a user-only string with no colon at all.
    pub password: Option<String>,
}

impl UserInfo {
    /// Parses a user information string split off from an authority.
    ///
    /// The input is split once at the first ":"; any further colons
    /// stay in the password. An empty input yields a `UserInfo` with
    /// both fields unset.
    ///
    /// # Errors
    ///
    /// Returns `Err` if percent-decoding of either part fails.
    pub fn parse(s: &str) -> Result<UserInfo, DecodeError> {
        let mut user_info = UserInfo::default();
        if s.is_empty() {
            return Ok(user_info);
        }
        match s.split_once(':') {
            Some((user, password)) => {
                user_info.user = Some(encoding::decode(user)?);
                user_info.password = Some(encoding::decode(password)?);
            }
            None => user_info.user = Some(encoding::decode(s)?),
        }
        Ok(user_info)
    }

    /// Recomposes the fields into the `user[:password]` form.
    pub fn recompose(&self) -> String {
        let mut buf = String::new();
        if let Some(user) = &self.user {
            buf.push_str(&encoding::encode(user, table::USERINFO));
        }
        if let Some(password) = &self.password {
            buf.push(':');
            buf.push_str(&encoding::encode(password, table::USERINFO));
        }
        buf
    }
}
