//! Validated value objects for person emails and book ISBNs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::DomainError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

// Prefix-3 ISBN-13 with a single hyphen, e.g. 978-1234567890
static ISBN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}-\d{10}\b").expect("valid isbn regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !EMAIL_RE.is_match(&value) {
            return Err(DomainError::Validation("Invalid e-mail".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !ISBN_RE.is_match(&value) {
            return Err(DomainError::Validation("Invalid ISBN".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(Email::parse("ana.souza@school.edu").is_ok());
        assert!(Email::parse("no-at-sign.example.com").is_err());
        assert!(Email::parse("ana@school").is_err());
    }

    #[test]
    fn test_isbn_validation() {
        assert_eq!(
            Isbn::parse("978-1234567890").unwrap().as_str(),
            "978-1234567890"
        );
        assert!(Isbn::parse("9781234567890").is_err());
        assert!(Isbn::parse("978-12345").is_err());
    }
}
