// src/models.rs
use serde::{Serialize, Deserialize};

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GenerationOptions {
    /// Number of enabled character classes.
    pub fn enabled_classes(&self) -> usize {
        [
            self.include_uppercase,
            self.include_lowercase,
            self.include_digits,
            self.include_symbols,
        ]
        .iter()
        .filter(|&&enabled| enabled)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enable_every_class() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 12);
        assert_eq!(options.enabled_classes(), 4);
    }

    #[test]
    fn enabled_classes_counts_only_set_flags() {
        let options = GenerationOptions {
            length: 8,
            include_uppercase: false,
            include_lowercase: true,
            include_digits: true,
            include_symbols: false,
        };
        assert_eq!(options.enabled_classes(), 2);
    }
}
