// src/strength.rs
use serde::{Serialize, Deserialize};

/// Qualitative strength bucket for a candidate password.
///
/// Each variant carries fixed display metadata: a hex color and a
/// proportional fill width, so callers can render a strength meter
/// without re-deriving presentation from the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn color(&self) -> &'static str {
        match self {
            Strength::Weak => "#ef4444",
            Strength::Medium => "#f59e42",
            Strength::Strong => "#22c55e",
        }
    }

    pub fn width(&self) -> &'static str {
        match self {
            Strength::Weak => "33%",
            Strength::Medium => "66%",
            Strength::Strong => "100%",
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            Strength::Weak => 33,
            Strength::Medium => 66,
            Strength::Strong => 100,
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Medium => write!(f, "Medium"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

/// Classify a password. Pure and total: every input, including the empty
/// string, maps to exactly one level.
///
/// Rules are checked in precedence order, first match wins:
/// 1. shorter than 8, or all-alphabetic at any length -> Weak
/// 2. 8 to 12 characters with a digit or symbol -> Medium
/// 3. longer than 12 with lower, upper, digit and symbol -> Strong
/// 4. anything else -> Medium
pub fn evaluate(password: &str) -> Strength {
    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());
    let all_alphabetic =
        !password.is_empty() && password.chars().all(|c| c.is_ascii_alphabetic());

    if length < 8 || all_alphabetic {
        return Strength::Weak;
    }

    if (8..=12).contains(&length) && (has_digit || has_symbol) {
        return Strength::Medium;
    }

    if length > 12 && has_lower && has_upper && has_digit && has_symbol {
        return Strength::Strong;
    }

    Strength::Medium
}
