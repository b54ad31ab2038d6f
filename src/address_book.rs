//! The address book and its upcoming-birthday scheduler.

use crate::record::Record;
use chrono::{Datelike, NaiveDate, Weekday};
use log::{debug, info};
use std::collections::HashMap;

/// Birthdays closer than this many days (today included) are reported
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Workdays in the order reminders are listed
const WORKDAYS: [Weekday; 5] = [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri];

/// Contacts keyed by name.
///
/// Records are kept in insertion order. Re-adding a name replaces the old
/// record where it stood.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, overwriting any record with that name
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => {
                info!("Replacing existing contact {}", record.name());
                self.records[index] = record;
            }
            None => {
                debug!("Adding contact {}", record.name());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove the record for `name`, returning it if there was one
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        info!("Deleting contact {}", name);
        Some(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Group contacts whose birthday falls within the next week of `reference`.
    ///
    /// A birthday equal to `reference` counts. Birthdays landing on a weekend
    /// are filed under Monday.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> UpcomingBirthdays {
        let mut upcoming = UpcomingBirthdays::default();

        for record in &self.records {
            let Some(birthday) = record.show_birthday() else {
                continue;
            };
            let next = next_occurrence(birthday.date(), reference);
            let days_ahead = (next - reference).num_days();
            if days_ahead >= UPCOMING_WINDOW_DAYS {
                continue;
            }

            let bucket = reminder_day(next.weekday());
            debug!(
                "{} has a birthday on {} ({} days ahead), reminding on {:?}",
                record.name(),
                next,
                days_ahead,
                bucket
            );
            upcoming.push(bucket, record.to_string());
        }

        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

/// First anniversary of `birthday` on or after `reference`
pub fn next_occurrence(birthday: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let this_year = anniversary(birthday, reference.year());
    if this_year < reference {
        anniversary(birthday, reference.year() + 1)
    } else {
        this_year
    }
}

// 29 February is observed on 1 March in common years
fn anniversary(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birthday)
}

/// Day the reminder is filed under: weekend birthdays roll to Monday
pub fn reminder_day(weekday: Weekday) -> Weekday {
    match weekday {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        other => other,
    }
}

/// Full English name of a weekday, e.g. `Monday`
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Rendered contacts grouped by reminder weekday
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    buckets: HashMap<Weekday, Vec<String>>,
}

impl UpcomingBirthdays {
    fn push(&mut self, weekday: Weekday, entry: String) {
        self.buckets.entry(weekday).or_default().push(entry);
    }

    /// Contacts filed under `weekday`, in address book order
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        self.buckets.get(&weekday).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of contacts across all days
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Non-empty buckets from Monday to Friday
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> + '_ {
        WORKDAYS.iter().filter_map(move |day| self.get(*day).map(|entries| (*day, entries)))
    }
}
