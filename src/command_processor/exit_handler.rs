//! Exit command handler
//!
//! Handles `close` and `exit`. The loop decides what to print on the way out.

use super::{CommandArgs, CommandHandler, Reply};
use crate::address_book::AddressBook;
use anyhow::Result;

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(&self, _args: &CommandArgs, _book: &mut AddressBook) -> Result<Reply> {
        Ok(Reply::Exit)
    }
    fn can_handle(&self, command: &str) -> bool {
        command == "close" || command == "exit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_and_exit_both_stop() {
        let mut book = AddressBook::new();
        for word in ["close", "exit"] {
            assert!(ExitHandler.can_handle(word));
            let args = CommandArgs::new(word.to_string(), vec![]);
            assert_eq!(ExitHandler.execute(&args, &mut book).unwrap(), Reply::Exit);
        }
        assert!(!ExitHandler.can_handle("quit"));
    }
}
