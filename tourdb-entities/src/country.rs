use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id   : Id,
    pub name : String,
    pub code : CountryCode,
}

/// Two-letter country code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub const LEN: usize = 2;

    /// For codes that have already been validated, e.g. when
    /// loading them from the database.
    pub const fn new_unchecked(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid country code")]
pub struct CountryCodeParseError;

impl FromStr for CountryCode {
    type Err = CountryCodeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != Self::LEN {
            return Err(CountryCodeParseError);
        }
        Ok(Self(s.to_uppercase()))
    }
}

impl From<CountryCode> for String {
    fn from(from: CountryCode) -> Self {
        from.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
