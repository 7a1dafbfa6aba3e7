// src/cli/handlers.rs
use std::error::Error;

use console::style;
use serde_json::json;

use crate::generators;
use crate::models::GenerationOptions;
use crate::strength;
use crate::utils::render_strength_bar;

// Handlers for CLI commands
pub fn handle_generate(options: &GenerationOptions, json: bool) -> Result<(), Box<dyn Error>> {
    log::debug!(
        "Generating password: length {}, {} classes enabled",
        options.length,
        options.enabled_classes()
    );

    let password = generators::generate(options);

    if password.is_empty() {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "password": "",
                    "strength": null,
                    "error": "no character sets enabled",
                }))?
            );
        } else {
            println!("⚠️ All character sets are disabled, nothing to generate.");
        }
        return Ok(());
    }

    let level = strength::evaluate(&password);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "password": password,
                "strength": {
                    "level": level,
                    "color": level.color(),
                    "width": level.width(),
                },
            }))?
        );
    } else {
        println!("🔑 Generated password: {}", style(&password).bold());
        println!("   Strength: {}", render_strength_bar(level));
    }

    Ok(())
}

pub fn handle_check(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let level = strength::evaluate(password);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "level": level,
                "color": level.color(),
                "width": level.width(),
            }))?
        );
    } else {
        println!("🛡️ Strength: {}", render_strength_bar(level));
    }

    Ok(())
}
