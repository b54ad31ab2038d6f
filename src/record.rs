//! A single contact: a name, its phone numbers and an optional birthday.

use crate::fields::{Birthday, Field, Name, Phone, ValidationError};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Name::new(name), phones: Vec::new(), birthday: None }
    }

    /// Create a record whose birthday is set from `birthday` text
    pub fn with_birthday(name: impl Into<String>, birthday: &str) -> Result<Self, ValidationError> {
        let mut record = Self::new(name);
        record.add_birthday(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        debug!("Added phone {} to {}", phone, self.name);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Does nothing if there is none.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.value() == phone) {
            self.phones.remove(index);
            debug!("Removed phone {} from {}", phone, self.name);
        }
    }

    /// Replace `old` with `new` in place.
    ///
    /// When `old` is not one of the record's phones nothing happens and `Ok`
    /// is returned; callers that care must check with [`Record::find_phone`].
    /// An invalid `new` is rejected and `old` stays as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        match self.phones.iter_mut().find(|p| p.value() == old) {
            Some(phone) => {
                phone.set(new)?;
                debug!("Changed phone {} to {} for {}", old, new, self.name);
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    /// Set the birthday, overwriting any earlier one
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    pub fn show_birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self.phones.iter().map(Phone::value).collect::<Vec<_>>().join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str("not set"),
        }
    }
}
