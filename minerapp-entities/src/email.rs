use std::{fmt, str::FromStr};

use thiserror::Error;

/// A single mailbox address, normalized to lowercase.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new_unchecked(address: String) -> Self {
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
        let s = s.trim();
        // Display names ("Name <a@b>") are not accepted for accounts.
        if s.contains(['<', '>', '"', ',']) {
            return Err(EmailAddressParseError);
        }
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        let (local, domain) = info
            .addr
            .split_once('@')
            .ok_or(EmailAddressParseError)?;
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(EmailAddressParseError);
        }
        Ok(Self(info.addr.to_lowercase()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_normalize() {
        let email: EmailAddress = "  Ana@Example.COM ".parse().unwrap();
        assert_eq!("ana@example.com", email.as_str());
    }

    #[test]
    fn reject_invalid_addresses() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("ana".parse::<EmailAddress>().is_err());
        assert!("ana@".parse::<EmailAddress>().is_err());
        assert!("@example.com".parse::<EmailAddress>().is_err());
        assert!("ana@localhost".parse::<EmailAddress>().is_err());
        assert!("Ana <ana@example.com>".parse::<EmailAddress>().is_err());
    }
}
