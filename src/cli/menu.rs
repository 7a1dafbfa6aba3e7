// src/cli/menu.rs
use inquire::{Confirm, CustomType, Password, PasswordDisplayMode, Select};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;

use crate::core::config::Config;
use crate::generators;
use crate::models::GenerationOptions;
use crate::strength;
use crate::utils::render_strength_bar;

const MENU_GENERATE: &str = "🔑 Generate a password";
const MENU_CHECK: &str = "🛡️ Check password strength";
const MENU_OPTIONS: &str = "⚙️ Adjust generation options";
const MENU_SAVE: &str = "💾 Save options as default";
const MENU_QUIT: &str = "🚪 Quit";

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("🦀🔑 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSFORGE CLI            ║");
    println!("╚══════════════════════════════════════╝");

    let mut options = config.defaults.clone();

    loop {
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let choice = Select::new(
            "What would you like to do?",
            vec![MENU_GENERATE, MENU_CHECK, MENU_OPTIONS, MENU_SAVE, MENU_QUIT],
        )
        .prompt()?;

        match choice {
            MENU_GENERATE => generate_password(&options),
            MENU_CHECK => check_password()?,
            MENU_OPTIONS => adjust_options(&mut options)?,
            MENU_SAVE => save_options(&options),
            MENU_QUIT => break,
            _ => unreachable!(),
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn generate_password(options: &GenerationOptions) {
    let password = generators::generate(options);

    if password.is_empty() {
        println!("⚠️ All character sets are disabled. Enable at least one and try again.");
        return;
    }

    println!("🔑 {}", style(&password).bold());
    println!("   Strength: {}", render_strength_bar(strength::evaluate(&password)));
}

fn check_password() -> Result<(), Box<dyn Error>> {
    let password = Password::new("Password to check:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    if password.is_empty() {
        println!("⚠️ Nothing to check.");
        return Ok(());
    }

    println!("🛡️ Strength: {}", render_strength_bar(strength::evaluate(&password)));
    Ok(())
}

fn adjust_options(options: &mut GenerationOptions) -> Result<(), Box<dyn Error>> {
    options.length = CustomType::<usize>::new("Password length:")
        .with_default(options.length)
        .with_error_message("Please enter a whole number")
        .prompt()?;

    options.include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(options.include_uppercase)
        .prompt()?;

    options.include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(options.include_lowercase)
        .prompt()?;

    options.include_digits = Confirm::new("Include digits?")
        .with_default(options.include_digits)
        .prompt()?;

    options.include_symbols = Confirm::new("Include symbols?")
        .with_default(options.include_symbols)
        .prompt()?;

    if options.enabled_classes() == 0 {
        println!("⚠️ No character sets enabled. Generation will produce an empty password.");
    }

    Ok(())
}

fn save_options(options: &GenerationOptions) {
    match Config::save_defaults(options) {
        Ok(path) => println!("✅ Saved default options to {}", path.display()),
        Err(e) => println!("❌ Failed to save options: {}", e),
    }
}
