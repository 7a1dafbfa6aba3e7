use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod core;
mod generators;
mod models;
mod strength;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::models::GenerationOptions;

fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔑 Starting PassForge - Password Generator & Strength Checker");
    log::debug!("Command line args: {:?}", args);

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_upper,
            no_lower,
            no_digits,
            no_symbols,
        }) => {
            // Flags only disable classes; anything untouched keeps the
            // configured default.
            let defaults = &config.defaults;
            let options = GenerationOptions {
                length: length.unwrap_or(defaults.length),
                include_uppercase: !no_upper && defaults.include_uppercase,
                include_lowercase: !no_lower && defaults.include_lowercase,
                include_digits: !no_digits && defaults.include_digits,
                include_symbols: !no_symbols && defaults.include_symbols,
            };
            cli::handlers::handle_generate(&options, args.json)?;
        }
        Some(CliCommand::Check { password }) => {
            cli::handlers::handle_check(&password, args.json)?;
        }
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })?;
            }
            cli::menu::run_cli_menu(&config, should_exit)?;
        }
    }

    log::info!("✅ PassForge shutdown complete");
    Ok(())
}
