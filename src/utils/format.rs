// src/utils/format.rs
use console::style;

use crate::strength::Strength;

const BAR_SEGMENTS: usize = 12;

fn filled_segments(percent: u8) -> usize {
    (percent as usize * BAR_SEGMENTS + 50) / 100
}

// Style a strength label with its display color
pub fn styled_label(strength: Strength) -> String {
    let label = strength.to_string();
    match strength {
        Strength::Weak => style(label).red(),
        Strength::Medium => style(label).yellow(),
        Strength::Strong => style(label).green(),
    }
    .bold()
    .to_string()
}

// Render a proportional strength meter for the terminal
pub fn render_strength_bar(strength: Strength) -> String {
    let filled = filled_segments(strength.percent());
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_SEGMENTS - filled)
    );
    let bar = match strength {
        Strength::Weak => style(bar).red(),
        Strength::Medium => style(bar).yellow(),
        Strength::Strong => style(bar).green(),
    };
    format!("[{}] {}", bar, styled_label(strength))
}
