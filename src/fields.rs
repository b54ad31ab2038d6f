//! Validated value holders for contact data.
//
// Every field keeps its original text. Phones and birthdays check their format
// when they are built and again whenever the value is replaced.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const PHONE_LENGTH: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("birthday pattern compiles"));

/// Errors raised when raw text does not satisfy a field's format
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid phone number '{0}': expected exactly 10 digits")]
    InvalidPhone(String),
    #[error("Invalid date '{0}': expected DD.MM.YYYY")]
    InvalidDate(String),
}

/// Anything that has a textual value
pub trait Field: fmt::Display {
    fn value(&self) -> &str;
}

/// Contact name, accepted as given
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number made of exactly ten decimal digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_phone(value)?;
        Ok(Self(value.to_string()))
    }

    /// Replace the number, keeping the current one if `value` is rejected
    pub fn set(&mut self, value: &str) -> Result<(), ValidationError> {
        validate_phone(value)?;
        self.0 = value.to_string();
        Ok(())
    }
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check the phone contract: exactly ten characters, all of them ASCII digits.
/// No normalization is applied, so `+` or `-` separators are rejected.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.len() == PHONE_LENGTH && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(value.to_string()))
    }
}

/// Birthday written as day.month.year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let date = parse_birthday(value)?;
        Ok(Self { value: value.to_string(), date })
    }

    /// Calendar date the stored text describes
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Parse `D.M.YYYY` text into a calendar date.
///
/// The year must have four digits and the day must exist in that month,
/// so `29.02` only passes in leap years.
pub fn parse_birthday(value: &str) -> Result<NaiveDate, ValidationError> {
    if !BIRTHDAY_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}
