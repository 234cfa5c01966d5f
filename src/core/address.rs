use crate::core::validator::validate_email;
use crate::utils::error::{EmailError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An email-shaped string that has passed [`validate_email`]. Construction is
/// the only way in, so holding one means the shape check already succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(candidate: &str) -> Result<Self> {
        if validate_email(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(EmailError::InvalidFormat {
                candidate: candidate.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }

    /// Substring after the `@`.
    pub fn domain_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(_, domain)| domain)
    }
}

impl FromStr for EmailAddress {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self> {
        if validate_email(&value) {
            Ok(Self(value))
        } else {
            Err(EmailError::InvalidFormat { candidate: value })
        }
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.0
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
    fn test_new_accepts_what_the_validator_accepts() {
        assert!(EmailAddress::new("user@example.com").is_ok());
        assert!(EmailAddress::new("test.email@domain.co.uk").is_ok());
        assert!(EmailAddress::new("invalid.email").is_err());
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn test_part_accessors_split_on_the_at_sign() {
        let address = EmailAddress::new("test.email@domain.co.uk").unwrap();
        assert_eq!(address.local_part(), "test.email");
        assert_eq!(address.domain_part(), "domain.co.uk");
        assert_eq!(address.as_str(), "test.email@domain.co.uk");
        assert_eq!(address.to_string(), "test.email@domain.co.uk");
    }

    #[test]
    fn test_from_str_round_trips_through_parse() {
        let address: EmailAddress = "user@example.com".parse().unwrap();
        assert_eq!(address.as_str(), "user@example.com");

        let err = "user@domain".parse::<EmailAddress>().unwrap_err();
        assert!(err.to_string().contains("user@domain"));
    }

    #[test]
    fn test_deserialization_revalidates() {
        let ok: EmailAddress = serde_json::from_str("\"user@example.com\"").unwrap();
        assert_eq!(ok.as_str(), "user@example.com");

        assert!(serde_json::from_str::<EmailAddress>("\"not-an-email\"").is_err());
        assert!(serde_json::from_str::<EmailAddress>("42").is_err());
    }
}
