pub mod address_book;
pub mod app;
pub mod command_processor;
pub mod config;
pub mod fields;
pub mod record;

use anyhow::Result;
use env_logger::Env;
use log::info;

/// Run the interactive assistant until the user leaves
pub fn run(config: Config) -> Result<()> {
    info!("Initializing assistant bot");
    app::Application::new(config).run()
}

/// Install the global logger. `RUST_LOG` wins over `default_level`.
pub fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use address_book::{AddressBook, UpcomingBirthdays};
pub use config::Config;
pub use fields::{Birthday, Field, Name, Phone, ValidationError};
pub use record::Record;
