//! Birthday command handler
//!
//! Handles `add-birthday`, `show-birthday` and `birthdays`.

use super::{CONTACT_NOT_FOUND, CommandArgs, CommandHandler, Reply};
use crate::address_book::{AddressBook, weekday_name};
use anyhow::{Result, anyhow};
use chrono::{Local, NaiveDate};

/// Birthday commands. `birthdays` looks ahead from today unless a fixed
/// reference date was given.
#[derive(Debug, Default)]
pub struct BirthdayHandler {
    today: Option<NaiveDate>,
}

impl BirthdayHandler {
    pub fn at(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl CommandHandler for BirthdayHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> Result<Reply> {
        match args.command.as_str() {
            "add-birthday" => {
                let [name, birthday] = args.expect::<2>("add-birthday <name> <DD.MM.YYYY>")?;
                let Some(record) = book.find_mut(name) else {
                    return Ok(Reply::message(CONTACT_NOT_FOUND));
                };
                record.add_birthday(birthday)?;
                Ok(Reply::message(format!("Birthday {} added to {}.", birthday, name)))
            }
            "show-birthday" => {
                let [name] = args.expect::<1>("show-birthday <name>")?;
                let Some(record) = book.find(name) else {
                    return Ok(Reply::message(CONTACT_NOT_FOUND));
                };
                match record.show_birthday() {
                    Some(birthday) => Ok(Reply::message(format!("{} was born on {}.", name, birthday))),
                    None => Ok(Reply::message(format!("{} has no birthday set.", name))),
                }
            }
            "birthdays" => Ok(upcoming(book, self.today())),
            other => Err(anyhow!("Unsupported birthday command: {}", other)),
        }
    }
    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add-birthday" | "show-birthday" | "birthdays")
    }
}

fn upcoming(book: &AddressBook, today: NaiveDate) -> Reply {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Reply::message("No birthdays in the coming week.");
    }

    let mut lines = Vec::new();
    for (day, entries) in upcoming.iter() {
        lines.push(format!("{}:", weekday_name(day)));
        lines.extend(entries.iter().map(|entry| format!("  {}", entry)));
    }
    Reply::message(lines.join("\n"))
}
