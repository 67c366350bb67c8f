use std::fmt;

use crate::error::CoreError;

/// A Bilibili `SESSDATA` session cookie value.
///
/// Only ever sent as a cookie to the panel endpoint. `Debug` is redacted so
/// the value cannot leak through logs or error reports.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Trim the raw input and reject it when nothing is left.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyCredential);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The `Cookie` header value carrying this credential.
    pub fn cookie_header(&self) -> String {
        format!("SESSDATA={}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
