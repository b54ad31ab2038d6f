//! Help command handler
//!
//! Lists the available commands.

use super::{CommandArgs, CommandHandler, Reply};
use crate::address_book::AddressBook;
use anyhow::Result;

const HELP: &str = "\
Available commands:
  hello                              Greet the assistant
  add <name> <phone>                 Create a contact with one phone (replaces an existing one)
  change <name> <new-phone>          Change the first phone of a contact
  change <name> <old> <new>          Change a specific phone of a contact
  phone <name>                       Show the phones of a contact
  remove-phone <name> <phone>        Remove a phone from a contact
  delete <name>                      Delete a contact
  all                                List every contact
  add-birthday <name> <DD.MM.YYYY>   Set the birthday of a contact
  show-birthday <name>               Show the birthday of a contact
  birthdays                          Birthdays in the coming week
  help                               Show this help
  close | exit                       Leave the assistant

Use double quotes for names with spaces, e.g. add \"John Smith\" 0991234567";

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute(&self, _args: &CommandArgs, _book: &mut AddressBook) -> Result<Reply> {
        Ok(Reply::message(HELP))
    }
    fn can_handle(&self, command: &str) -> bool {
        command == "help" || command == "--help" || command == "-h"
    }
}
