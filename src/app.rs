use crate::address_book::AddressBook;
use crate::command_processor::{CommandProcessor, Reply};
use crate::config::Config;
use crate::fields::ValidationError;
use anyhow::Result;
use log::Level;
use rustyline::DefaultEditor;

/// Interactive session owning the address book for its whole lifetime
pub struct Application {
    command_processor: CommandProcessor,
    book: AddressBook,
    config: Config,
}

impl Application {
    pub fn new(config: Config) -> Self {
        Self::with_processor(config, CommandProcessor::new())
    }

    pub fn with_processor(config: Config, command_processor: CommandProcessor) -> Self {
        Self { command_processor, book: AddressBook::new(), config }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one input line. Blank lines produce no reply; failures are turned
    /// into a message for the user.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        if line.trim().is_empty() {
            return None;
        }
        match self.command_processor.process_line(line, &mut self.book) {
            Ok(reply) => Some(reply),
            Err(err) => {
                log::log!(failure_level(&err), "Command failed: {:?}", err);
                Some(Reply::Message(err.to_string()))
            }
        }
    }

    pub fn run(&mut self) -> Result<()> {
        log::info!("Starting assistant bot");
        let mut rl = DefaultEditor::new()?;

        println!("{}", self.config.terminal.welcome);

        loop {
            match rl.readline(&self.config.terminal.prompt) {
                Ok(line) => {
                    if self.config.terminal.history {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    match self.handle_line(&line) {
                        Some(Reply::Message(text)) => println!("{}", text),
                        Some(Reply::Exit) => break,
                        None => {}
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    log::error!("Failed to read input: {:?}", err);
                    return Err(err.into());
                }
            }
        }

        println!("{}", self.config.terminal.farewell);
        log::info!("Assistant bot stopped with {} contact(s)", self.book.len());
        Ok(())
    }
}

/// Validation failures log at warn, anything else at debug
fn failure_level(err: &anyhow::Error) -> Level {
    if err.downcast_ref::<ValidationError>().is_some() {
        Level::Warn
    } else {
        Level::Debug
    }
}
