// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Check the strength of a password
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,
    },
}
