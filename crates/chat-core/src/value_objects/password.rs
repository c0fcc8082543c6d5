//! Password - plaintext password that passed validation
//!
//! Hashing happens in the authentication layer (`chat_common::auth`); this
//! type only keeps the plaintext out of logs.

use std::fmt;

/// Validated plaintext password with a redacted `Debug`
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the plaintext, e.g. for hashing
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
