//! Contacts command handler
//!
//! Handles `add`, `change`, `phone`, `remove-phone`, `delete` and `all`.

use super::{CONTACT_NOT_FOUND, CommandArgs, CommandHandler, Reply};
use crate::address_book::AddressBook;
use crate::fields::{Field, Phone};
use crate::record::Record;
use anyhow::{Result, anyhow};
use log::warn;

#[derive(Debug)]
pub struct ContactsHandler;

impl CommandHandler for ContactsHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> Result<Reply> {
        match args.command.as_str() {
            "add" => add_contact(args, book),
            "change" => change_phone(args, book),
            "phone" => show_phones(args, book),
            "remove-phone" => remove_phone(args, book),
            "delete" => delete_contact(args, book),
            "all" => Ok(list_all(book)),
            other => Err(anyhow!("Unsupported contacts command: {}", other)),
        }
    }
    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add" | "change" | "phone" | "remove-phone" | "delete" | "all")
    }
}

/// A fresh record replaces any contact already stored under the name
fn add_contact(args: &CommandArgs, book: &mut AddressBook) -> Result<Reply> {
    let [name, phone] = args.expect::<2>("add <name> <phone>")?;
    if name.trim().is_empty() {
        warn!("Rejected empty contact name");
        return Err(anyhow!("Contact name cannot be empty"));
    }
    let mut record = Record::new(name.as_str());
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(Reply::message("Contact added."))
}

fn change_phone(args: &CommandArgs, book: &mut AddressBook) -> Result<Reply> {
    match args.args.as_slice() {
        [name, new] => {
            let Some(record) = book.find_mut(name) else {
                return Ok(Reply::message(CONTACT_NOT_FOUND));
            };
            match record.phones().first().map(|p| p.value().to_string()) {
                Some(old) => record.edit_phone(&old, new)?,
                None => record.add_phone(new)?,
            }
            Ok(Reply::message(format!("Phone number {} for {} has changed.", new, name)))
        }
        [name, old, new] => {
            let Some(record) = book.find_mut(name) else {
                return Ok(Reply::message(CONTACT_NOT_FOUND));
            };
            if record.find_phone(old).is_none() {
                warn!("{} has no phone {}", name, old);
                return Ok(Reply::message(format!("Phone {} not found for {}.", old, name)));
            }
            record.edit_phone(old, new)?;
            Ok(Reply::message(format!("Phone number {} for {} has changed.", new, name)))
        }
        _ => Err(anyhow!("Usage: change <name> <new-phone> | change <name> <old-phone> <new-phone>")),
    }
}

fn show_phones(args: &CommandArgs, book: &mut AddressBook) -> Result<Reply> {
    let [name] = args.expect::<1>("phone <name>")?;
    let Some(record) = book.find(name) else {
        return Ok(Reply::message(CONTACT_NOT_FOUND));
    };
    if record.phones().is_empty() {
        return Ok(Reply::message(format!("{} has no phone numbers.", name)));
    }
    let phones = record.phones().iter().map(Phone::value).collect::<Vec<_>>().join("; ");
    Ok(Reply::message(format!("{}: {}", name, phones)))
}

fn remove_phone(args: &CommandArgs, book: &mut AddressBook) -> Result<Reply> {
    let [name, phone] = args.expect::<2>("remove-phone <name> <phone>")?;
    let Some(record) = book.find_mut(name) else {
        return Ok(Reply::message(CONTACT_NOT_FOUND));
    };
    if record.find_phone(phone).is_none() {
        return Ok(Reply::message(format!("Phone {} not found for {}.", phone, name)));
    }
    record.remove_phone(phone);
    Ok(Reply::message(format!("Phone {} removed from {}.", phone, name)))
}

fn delete_contact(args: &CommandArgs, book: &mut AddressBook) -> Result<Reply> {
    let [name] = args.expect::<1>("delete <name>")?;
    match book.delete(name) {
        Some(_) => Ok(Reply::message(format!("Contact {} deleted.", name))),
        None => Ok(Reply::message(CONTACT_NOT_FOUND)),
    }
}

fn list_all(book: &AddressBook) -> Reply {
    if book.is_empty() {
        return Reply::message("There are no contacts.");
    }
    let lines: Vec<String> = book.iter().map(Record::to_string).collect();
    Reply::message(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(book: &mut AddressBook, line: &str) -> Result<Reply> {
        ContactsHandler.execute(&CommandArgs::parse(line)?, book)
    }

    #[test]
    fn test_add_then_phone() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "add John 0991234567").unwrap(), Reply::message("Contact added."));
        assert_eq!(
            run(&mut book, "phone John").unwrap(),
            Reply::message("John: 0991234567")
        );
    }

    #[test]
    fn test_add_invalid_phone_stores_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "add John 12345").unwrap_err();
        assert!(err.to_string().starts_with("Invalid phone number"));
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "add \"\" 0991234567").unwrap_err();
        assert_eq!(err.to_string(), "Contact name cannot be empty");
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_adjacent_quotes_form_one_name() {
        let mut book = AddressBook::new();
        run(&mut book, "add \"John\"Smith 0991234567").unwrap();
        assert!(book.find("JohnSmith").is_some());
    }

    #[test]
    fn test_change_first_phone_or_add() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Jane"));
        run(&mut book, "change Jane 0501112233").unwrap();
        assert_eq!(book.find("Jane").unwrap().phones().len(), 1);

        run(&mut book, "change Jane 0661112233").unwrap();
        let phones: Vec<&str> = book.find("Jane").unwrap().phones().iter().map(Phone::value).collect();
        assert_eq!(phones, vec!["0661112233"]);
    }

    #[test]
    fn test_change_specific_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1111111111").unwrap();
        book.find_mut("John").unwrap().add_phone("2222222222").unwrap();

        run(&mut book, "change John 2222222222 3333333333").unwrap();
        let phones: Vec<&str> = book.find("John").unwrap().phones().iter().map(Phone::value).collect();
        assert_eq!(phones, vec!["1111111111", "3333333333"]);

        assert_eq!(
            run(&mut book, "change John 9999999999 3333333333").unwrap(),
            Reply::message("Phone 9999999999 not found for John.")
        );
    }

    #[test]
    fn test_missing_contact_is_reported() {
        let mut book = AddressBook::new();
        for line in ["phone Nobody", "change Nobody 0991234567", "delete Nobody", "remove-phone Nobody 0991234567"] {
            assert_eq!(run(&mut book, line).unwrap(), Reply::message(CONTACT_NOT_FOUND), "{}", line);
        }
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "add John").unwrap_err();
        assert_eq!(err.to_string(), "Usage: add <name> <phone>");
        assert!(run(&mut book, "change John").is_err());
    }

    #[test]
    fn test_remove_phone_and_delete() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1111111111").unwrap();
        run(&mut book, "remove-phone John 1111111111").unwrap();
        assert!(book.find("John").unwrap().phones().is_empty());

        run(&mut book, "delete John").unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_all() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "all").unwrap(), Reply::message("There are no contacts."));

        run(&mut book, "add John 1111111111").unwrap();
        run(&mut book, "add Jane 2222222222").unwrap();
        assert_eq!(
            run(&mut book, "all").unwrap(),
            Reply::message(
                "Contact name: John, phones: 1111111111, birthday: not set\n\
                 Contact name: Jane, phones: 2222222222, birthday: not set"
            )
        );
    }
}
