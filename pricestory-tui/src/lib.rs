//! PriceStory TUI — terminal story viewer for historical price data.
//!
//! Walks the guided scenes with next/back, then opens the exploration
//! selector. Chart drawing is ratatui's `Chart` widget behind the core's
//! renderer seam; everything else is thin layout around the scene
//! controller.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;
