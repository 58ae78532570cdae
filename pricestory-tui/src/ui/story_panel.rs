//! Story header — scene position, title, description, nav affordances.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use pricestory_core::controller::{Position, RenderPlan};

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, plan: &RenderPlan) {
    let position_label = match plan.position {
        Position::Guided(i) => format!("Scene {} of {}", i + 1, app.controller.scenes().len()),
        Position::Exploration => "Exploration".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {position_label} "));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let theme = &app.theme;
    let lines = vec![
        Line::from(Span::styled(
            plan.title.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            plan.text.clone(),
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(vec![
            Span::styled("[← back]", theme.affordance(plan.back_disabled)),
            Span::raw("  "),
            Span::styled("[next →]", theme.affordance(plan.next_disabled)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricestory_core::config::StoryConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn header_shows_scene_position_and_title() {
        let app = AppState::new(&StoryConfig::default_story(), None, true).unwrap();
        let plan = app.plan();

        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, f.area(), &app, &plan))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Scene 1 of 3"));
        assert!(content.contains("Stocks"));
        assert!(content.contains("back"));
    }
}
