//! Greeting command handler
//!
//! Answers `hello`.

use super::{CommandArgs, CommandHandler, Reply};
use crate::address_book::AddressBook;
use anyhow::Result;

#[derive(Debug)]
pub struct GreetingHandler;

impl CommandHandler for GreetingHandler {
    fn execute(&self, _args: &CommandArgs, _book: &mut AddressBook) -> Result<Reply> {
        Ok(Reply::message("How can I help you?"))
    }
    fn can_handle(&self, command: &str) -> bool {
        command == "hello" || command == "hi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_greets() {
        let mut book = AddressBook::new();
        assert!(GreetingHandler.can_handle("hello"));
        assert!(!GreetingHandler.can_handle("hey"));
        let args = CommandArgs::new("hello".to_string(), vec![]);
        assert_eq!(
            GreetingHandler.execute(&args, &mut book).unwrap(),
            Reply::message("How can I help you?")
        );
    }
}
