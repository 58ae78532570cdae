//! Help overlay with the key bindings.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::input::key_bindings_help;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let lines: Vec<Line> = key_bindings_help()
        .into_iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<16}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(action),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Help ");
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
