//! Exploration group selector — shown only after the guided story ends.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let catalog = app.controller.catalog();
    // Highlight what the chart actually resolves to, fallback included.
    let resolved = catalog.resolve(app.controller.selected_group()).name.clone();

    let mut spans = vec![Span::styled(
        "Group: ",
        Style::default().fg(theme.text_secondary),
    )];
    for (i, group) in catalog.groups().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if group.name == resolved {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, group.name), style));
    }
    spans.push(Span::styled(
        "   (Tab cycles)",
        Style::default().fg(theme.muted),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricestory_core::config::StoryConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn selector_lists_every_group() {
        let app = AppState::new(&StoryConfig::default_story(), None, true).unwrap();

        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("stocks"));
        assert!(content.contains("oil"));
        assert!(content.contains("commodities"));
    }
}
