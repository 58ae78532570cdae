//! Theme tokens for the story viewer.
//!
//! One dark palette: neutral chrome, a single accent for focus, and a fixed
//! series ramp. Series colors are assigned by catalog position so every
//! indicator keeps its color from scene to scene.

use ratatui::style::{Color, Modifier, Style};

/// Fixed series ramp, cycled when a story declares more keys.
const SERIES: [Color; 8] = [
    Color::Rgb(78, 121, 167),  // blue
    Color::Rgb(242, 142, 44),  // orange
    Color::Rgb(225, 87, 89),   // red
    Color::Rgb(118, 183, 178), // teal
    Color::Rgb(89, 161, 79),   // green
    Color::Rgb(237, 201, 73),  // yellow
    Color::Rgb(175, 122, 161), // purple
    Color::Rgb(255, 157, 167), // pink
];

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep charcoal background.
    pub background: Color,
    /// Electric cyan accent (titles, enabled affordances).
    pub accent: Color,
    /// Hot pink (load errors).
    pub negative: Color,
    /// Steel blue (disabled affordances, axis chrome).
    pub muted: Color,
    /// White (primary text).
    pub text_primary: Color,
    /// Light gray (descriptions, axis titles).
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            negative: Color::Rgb(255, 20, 147),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }
}

impl Theme {
    /// Stable color for a series by its catalog position.
    pub fn series_color(&self, index: usize) -> Color {
        SERIES[index % SERIES.len()]
    }

    /// Style for a navigation affordance.
    pub fn affordance(&self, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.muted)
        } else {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        }
    }
}
