//! Keyboard handling — maps keys onto stepper events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;

/// Handle one key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }

        // Story navigation
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => {
            app.next();
        }
        KeyCode::Left | KeyCode::Char('b') => {
            app.back();
        }

        // Exploration selector
        KeyCode::Tab | KeyCode::Char('g') => {
            app.cycle_group();
        }
        KeyCode::Char(c @ '1'..='9') => {
            app.select_group(c as usize - '1' as usize);
        }

        // Help overlay
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
        }

        _ => {}
    }
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("→ / n / Space", "Next scene"),
        ("← / b", "Previous scene"),
        ("Tab / g", "Cycle exploration group"),
        ("1-9", "Pick exploration group"),
        ("?", "Toggle help"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricestory_core::config::StoryConfig;
    use pricestory_core::controller::Position;
    use proptest::prelude::*;

    fn app() -> AppState {
        AppState::new(&StoryConfig::default_story(), None, true).unwrap()
    }

    #[test]
    fn quit_on_q() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn quit_on_ctrl_c() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn arrows_step_through_the_story() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::from(KeyCode::Right));
        assert_eq!(app.controller.current(), 1);
        handle_key(&mut app, KeyEvent::from(KeyCode::Left));
        assert_eq!(app.controller.current(), 0);
        // Back at the first scene is a no-op.
        handle_key(&mut app, KeyEvent::from(KeyCode::Left));
        assert_eq!(app.controller.current(), 0);
    }

    #[test]
    fn digits_pick_groups_directly() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('2')));
        assert_eq!(app.controller.selected_group(), "oil");
    }

    #[test]
    fn question_mark_toggles_help() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('?')));
        assert!(!app.show_help);
    }

    #[test]
    fn help_lists_all_bindings() {
        let bindings = key_bindings_help();
        assert!(!bindings.is_empty());
        assert_eq!(bindings[0].0, "q / Ctrl+C");
    }

    fn arb_key() -> impl Strategy<Value = KeyEvent> {
        prop_oneof![
            Just(KeyEvent::from(KeyCode::Right)),
            Just(KeyEvent::from(KeyCode::Left)),
            Just(KeyEvent::from(KeyCode::Tab)),
            Just(KeyEvent::from(KeyCode::Char('n'))),
            Just(KeyEvent::from(KeyCode::Char('b'))),
            Just(KeyEvent::from(KeyCode::Char('g'))),
            Just(KeyEvent::from(KeyCode::Char('1'))),
            Just(KeyEvent::from(KeyCode::Char('5'))),
            Just(KeyEvent::from(KeyCode::Char('?'))),
        ]
    }

    proptest! {
        /// No key sequence can drive the cursor out of bounds or leave a
        /// guided scene showing the selector.
        #[test]
        fn key_mashing_keeps_state_consistent(keys in prop::collection::vec(arb_key(), 0..64)) {
            let mut app = app();
            let top = app.controller.scenes().len() + 1;
            for key in keys {
                handle_key(&mut app, key);
                prop_assert!(app.controller.current() <= top);
                let plan = app.plan();
                if matches!(plan.position, Position::Guided(_)) {
                    prop_assert!(!plan.selector_visible);
                }
            }
        }
    }
}
