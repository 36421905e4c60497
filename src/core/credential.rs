//! API credential handling.
//!
//! The bearer token is supplied per invocation and never persisted to disk.

use std::fmt;

use crate::error::{Error, Result};

/// A validated, non-empty API credential.
///
/// `Debug` redacts the token so it cannot leak through logs or error
/// output.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Validates an optional raw credential.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] when the value is absent or
    /// blank. This check runs before any network call is attempted.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            Some(token) if !token.is_empty() => Ok(Self(token.to_string())),
            _ => Err(Error::MissingCredential),
        }
    }

    /// Returns the token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
