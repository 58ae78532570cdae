//! Chart panel — multi-series line chart via ratatui's `Chart` widget.
//!
//! This is the renderer behind the core's chart seam: one line per key in
//! plan order, NaN cells skipped per series, axis titles "Date" and
//! "Price ($)", and an inline label at each series' most recent valid
//! point.

use chrono::{Datelike, NaiveDate};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset as ChartSeries, GraphType, Widget};

use pricestory_core::controller::ChartRenderer;
use pricestory_core::domain::{Dataset, IndicatorKey};

use crate::theme::Theme;

/// Adapter handing a frame's buffer to the renderer seam.
pub struct ChartSurface<'a> {
    pub area: Rect,
    pub buf: &'a mut Buffer,
    pub key_order: &'a [IndicatorKey],
    pub theme: &'a Theme,
}

impl ChartRenderer for ChartSurface<'_> {
    fn render(&mut self, dataset: &Dataset, keys: &[IndicatorKey]) {
        render_chart(self.area, self.buf, dataset, keys, self.key_order, self.theme);
    }
}

/// Draw the chart for the given keys into `area`.
///
/// Tolerates an empty key slice and datasets with all-NaN series: both draw
/// axes or nothing, never panic.
pub fn render_chart(
    area: Rect,
    buf: &mut Buffer,
    dataset: &Dataset,
    keys: &[IndicatorKey],
    key_order: &[IndicatorKey],
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let Some((start, end)) = dataset.date_range() else {
        return;
    };

    let x_min = start.num_days_from_ce() as f64;
    let mut x_max = end.num_days_from_ce() as f64;
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let y_max = dataset.max_value(keys).unwrap_or(0.0);
    let y_upper = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    // Per-series points with NaN cells skipped, kept alive for the chart.
    let series: Vec<(usize, Vec<(f64, f64)>)> = keys
        .iter()
        .map(|key| {
            let points: Vec<(f64, f64)> = dataset
                .records()
                .iter()
                .filter(|r| r.has_value(key))
                .map(|r| (r.date.num_days_from_ce() as f64, r.value(key)))
                .collect();
            (color_index(key_order, key), points)
        })
        .collect();

    let datasets: Vec<ChartSeries> = keys
        .iter()
        .zip(&series)
        .map(|(key, (color_idx, points))| {
            ChartSeries::default()
                .name(display_name(key))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series_color(*color_idx)))
                .data(points)
        })
        .collect();

    let x_labels = vec![
        Span::raw(start.format("%b %Y").to_string()),
        Span::raw(mid_date(start, end).format("%b %Y").to_string()),
        Span::raw(end.format("%b %Y").to_string()),
    ];
    let y_labels = vec![
        Span::raw("$0".to_string()),
        Span::raw(format!("${:.0}", y_upper / 2.0)),
        Span::raw(format!("${y_upper:.0}")),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", Style::default().fg(theme.text_secondary)))
                .style(Style::default().fg(theme.muted))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    "Price ($)",
                    Style::default().fg(theme.text_secondary),
                ))
                .style(Style::default().fg(theme.muted))
                .bounds([0.0, y_upper])
                .labels(y_labels),
        );

    chart.render(area, buf);

    // Inline labels at each series' most recent valid point. The Chart
    // widget has no point annotations, so labels go straight into the
    // buffer at approximated plot coordinates: the plot area is the chart
    // interior minus the Y-label gutter (~8 cols) and the X-axis rows.
    let plot_left = area.x + 8;
    let plot_top = area.y;
    let plot_width = area.width.saturating_sub(9);
    let plot_height = area.height.saturating_sub(2);
    if plot_width == 0 || plot_height == 0 {
        return;
    }

    for key in keys {
        let Some((date, value)) = dataset.last_valid_point(key) else {
            continue;
        };
        let x_frac = (date.num_days_from_ce() as f64 - x_min) / (x_max - x_min);
        let y_frac = (value / y_upper).clamp(0.0, 1.0);

        let px = plot_left + (x_frac * plot_width.saturating_sub(1) as f64) as u16;
        // Y is inverted (0 = top of screen).
        let py = plot_top + (plot_height - 1) - (y_frac * (plot_height - 1) as f64) as u16;

        if px < area.right() && py < area.bottom() {
            let style = Style::default().fg(theme.series_color(color_index(key_order, key)));
            let px = px.saturating_add(1).min(area.right().saturating_sub(1));
            buf.set_string(px, py, display_name(key), style);
        }
    }
}

/// Series label: the key with its `_Price` suffix dropped.
fn display_name(key: &str) -> String {
    key.strip_suffix("_Price").unwrap_or(key).to_string()
}

fn color_index(key_order: &[IndicatorKey], key: &str) -> usize {
    key_order.iter().position(|k| k == key).unwrap_or(0)
}

fn mid_date(start: NaiveDate, end: NaiveDate) -> NaiveDate {
    start + chrono::Duration::days((end - start).num_days() / 2)
}
