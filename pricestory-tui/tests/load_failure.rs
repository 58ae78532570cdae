//! The viewer must come up and stay navigable when the dataset fails to load.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::Path;

use pricestory_core::config::StoryConfig;
use pricestory_tui::app::{AppState, StatusLevel};
use pricestory_tui::{handle_key, ui};

#[test]
fn full_story_walk_with_failed_load_never_panics() {
    let mut app = AppState::new(
        &StoryConfig::default_story(),
        Some(Path::new("definitely/not/here.csv")),
        false,
    )
    .unwrap();
    assert_eq!(app.status_level, StatusLevel::Error);

    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();

    // Walk forward past saturation and back to the start, drawing at every
    // step; the chart region must simply stay blank.
    for _ in 0..6 {
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
        handle_key(&mut app, KeyEvent::from(KeyCode::Right));
    }
    assert_eq!(app.controller.current(), 4);

    handle_key(&mut app, KeyEvent::from(KeyCode::Tab));
    terminal.draw(|f| ui::draw(f, &app)).unwrap();

    for _ in 0..6 {
        handle_key(&mut app, KeyEvent::from(KeyCode::Left));
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
    }
    assert_eq!(app.controller.current(), 0);

    let buffer = terminal.backend().buffer();
    let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
    assert!(content.contains("Error loading data"));
    assert!(content.contains("Scene 1 of 3"));
}

#[test]
fn synthetic_dataset_draws_the_exploration_selector() {
    let mut app = AppState::new(&StoryConfig::default_story(), None, true).unwrap();

    for _ in 0..3 {
        handle_key(&mut app, KeyEvent::from(KeyCode::Right));
    }

    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();

    let buffer = terminal.backend().buffer();
    let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
    assert!(content.contains("Exploration"));
    assert!(content.contains("Group:"));
    assert!(content.contains("Price ($)"));
}
