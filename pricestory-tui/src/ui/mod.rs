//! Top-level UI layout — story header, chart, selector, status bar.

pub mod chart_panel;
pub mod help_panel;
pub mod selector;
pub mod status_bar;
pub mod story_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let plan = app.plan();

    // The selector row collapses while the guided story is running.
    let selector_height = if plan.selector_visible { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(selector_height),
            Constraint::Length(1),
        ])
        .split(f.area());

    story_panel::render(f, chunks[0], app, &plan);
    draw_chart(f, chunks[1], app);
    if plan.selector_visible {
        selector::render(f, chunks[2], app);
    }
    status_bar::render(f, chunks[3], app);

    if app.show_help {
        help_panel::render(f, f.area());
    }
}

/// Chart region: a bordered block whose interior is handed to the renderer
/// seam. When there is nothing to draw the interior stays blank.
fn draw_chart(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Chart ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut surface = chart_panel::ChartSurface {
        area: inner,
        buf: f.buffer_mut(),
        key_order: &app.key_order,
        theme: &app.theme,
    };
    app.controller.render_into(app.dataset(), &mut surface);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
