use crate::address_book::AddressBook;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::fmt::Debug;

pub mod birthday_handler;
pub mod contacts_handler;
pub mod exit_handler;
pub mod greeting_handler;
pub mod help_handler;

/// Reply shown when no handler recognizes the command
pub const INVALID_COMMAND: &str = "Invalid command.";
/// Reply for lookups of a name that is not in the address book
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// A command word and its positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    /// Split a line into a lowercased command and its arguments.
    ///
    /// Tokenizing follows shell rules, so `add "John Smith" 0991234567`
    /// carries a two-word name and `"John"Smith` is a single word.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized_input = input.replace('\u{a0}', " ");
        let mut tokens = shell_words::split(&normalized_input)
            .map_err(|e| anyhow!("Tokenization error: {}", e))?;
        debug!("Tokenized input: {:?}", tokens);

        if tokens.is_empty() {
            return Err(anyhow!("No command provided"));
        }

        let command = tokens.remove(0).to_lowercase();
        debug!("Parsed command: {:?}, args: {:?}", command, tokens);
        Ok(Self { command, args: tokens })
    }

    /// Return exactly `N` arguments, or a usage error
    pub fn expect<const N: usize>(&self, usage: &str) -> Result<&[String; N]> {
        <&[String; N]>::try_from(self.args.as_slice()).map_err(|_| {
            warn!("'{}' expects {} argument(s), got {}", self.command, N, self.args.len());
            anyhow!("Usage: {}", usage)
        })
    }
}

/// What the loop should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Exit,
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }
}

pub trait CommandHandler: Debug {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> Result<Reply>;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self::with_handlers(birthday_handler::BirthdayHandler::default())
    }

    /// Processor whose `birthdays` command is evaluated against a fixed date
    pub fn with_today(today: NaiveDate) -> Self {
        Self::with_handlers(birthday_handler::BirthdayHandler::at(today))
    }

    fn with_handlers(birthdays: birthday_handler::BirthdayHandler) -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(greeting_handler::GreetingHandler),
            Box::new(contacts_handler::ContactsHandler),
            Box::new(birthdays),
            Box::new(help_handler::HelpHandler),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    pub fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> Result<Reply> {
        debug!("Attempting to execute command: {}", args.command);
        for handler in &self.handlers {
            if handler.can_handle(&args.command) {
                info!("Executing command '{}' with arguments: {:?}", args.command, args.args);
                return handler.execute(args, book);
            }
        }
        warn!("Unrecognized command: {}", args.command);
        Ok(Reply::message(INVALID_COMMAND))
    }

    /// Parse and run one input line
    pub fn process_line(&self, line: &str, book: &mut AddressBook) -> Result<Reply> {
        let args = CommandArgs::parse(line)?;
        self.execute(&args, book)
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_command_only() {
        let args = CommandArgs::parse("ADD John 0991234567").unwrap();
        assert_eq!(args.command, "add");
        assert_eq!(args.args, vec!["John", "0991234567"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let args = CommandArgs::parse("  phone\t  John \u{a0} ").unwrap();
        assert_eq!(args, CommandArgs::new("phone".to_string(), vec!["John".to_string()]));
    }

    #[test]
    fn test_parse_quoted_name() {
        let args = CommandArgs::parse("add \"John Smith\" 0991234567").unwrap();
        assert_eq!(args.args, vec!["John Smith", "0991234567"]);
    }

    #[test]
    fn test_parse_joins_adjacent_quoted_parts() {
        let args = CommandArgs::parse("add \"John\"Smith 0991234567").unwrap();
        assert_eq!(args.args, vec!["JohnSmith", "0991234567"]);
    }

    #[test]
    fn test_parse_rejects_empty_and_unterminated() {
        assert!(CommandArgs::parse("   ").is_err());
        assert!(CommandArgs::parse("add \"John 0991234567").is_err());
    }

    #[test]
    fn test_expect_reports_usage() {
        let args = CommandArgs::parse("phone").unwrap();
        let err = args.expect::<1>("phone <name>").unwrap_err();
        assert_eq!(err.to_string(), "Usage: phone <name>");
    }

    #[test]
    fn test_unknown_command() {
        let processor = CommandProcessor::new();
        let mut book = AddressBook::new();
        let reply = processor.process_line("fly away", &mut book).unwrap();
        assert_eq!(reply, Reply::message(INVALID_COMMAND));
    }
}
