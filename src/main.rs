use anyhow::Result;
use assistant_bot::{Config, init_logger};

fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    init_logger(&config.logging.level);
    log::info!("Starting assistant bot terminal");

    assistant_bot::run(config)
}
