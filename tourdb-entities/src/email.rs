use std::{fmt, str::FromStr};

use thiserror::Error;

/// A validated e-mail address, stored lowercase.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }
    pub fn into_string(self) -> String {
        self.0
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let address = s.trim().to_lowercase();
        if !fast_chemail::is_valid_email(&address) {
            return Err(EmailAddressParseError);
        }
        // The mail exchanger must be a fully qualified domain,
        // bare host names are rejected.
        let domain = address.split('@').next_back().ok_or(EmailAddressParseError)?;
        if !domain.contains('.') {
            return Err(EmailAddressParseError);
        }
        Ok(Self(address))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
