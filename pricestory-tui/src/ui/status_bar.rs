//! Bottom status bar — message on the left, dataset provenance on the right.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;

    let message_style = match app.status_level {
        StatusLevel::Info => Style::default().fg(theme.text_secondary),
        StatusLevel::Error => Style::default()
            .fg(theme.negative)
            .add_modifier(Modifier::BOLD),
    };

    let provenance = match &app.data {
        Some(loaded) => format!(
            "{} rows | {} dropped | {} | {}",
            loaded.dataset.len(),
            loaded.rows_dropped,
            &loaded.fingerprint[..8.min(loaded.fingerprint.len())],
            loaded.source.label(),
        ),
        None => "no data".to_string(),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(provenance.len() as u16 + 1)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(app.status.clone(), message_style)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            provenance,
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Right),
        chunks[1],
    );
}
