use std::{fmt, str::FromStr};

use pwhash::bcrypt;
use thiserror::Error;

/// A salted bcrypt password hash.
///
/// The plaintext never leaves [`Password::from_str`]; only the hash is kept.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Empty password")]
    Empty,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl Password {
    /// Wraps an already hashed password, e.g. loaded from the database.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_hash(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self(bcrypt::hash(plain)?))
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

// Never print the hash.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
