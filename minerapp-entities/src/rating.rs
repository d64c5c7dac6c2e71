use std::fmt;

use thiserror::Error;

/// A star rating between 1 and 5 (inclusive).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Rating value out of range: {0}")]
pub struct RatingValueOutOfRange(pub i64);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// All valid values, highest first.
    pub fn all_desc() -> impl Iterator<Item = Self> {
        (Self::min().0..=Self::max().0).rev().map(Self)
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueOutOfRange;

    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::min().0)..=i64::from(Self::max().0)).contains(&from) {
            Ok(Self(from as u8))
        } else {
            Err(RatingValueOutOfRange(from))
        }
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for i64 {
    fn from(from: RatingValue) -> Self {
        i64::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
