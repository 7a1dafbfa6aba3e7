// src/generators/mod.rs
mod password;

pub use password::{generate, generate_with_rng};
pub use password::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
