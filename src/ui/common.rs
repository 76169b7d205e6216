//! Common UI components shared across the gallery.
//!
//! This module contains the header bar, the filter bar, the status bar, and
//! the help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::data::FILTER_KEYS;

/// Render the header bar with collection overview.
///
/// Displays: title, shown/total counts, and the active filter.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    if !app.loaded {
        let line = Line::from(vec![
            Span::styled(" MINTVIEW ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("| Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let line = Line::from(vec![
        Span::styled(" MINTVIEW ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", app.visible.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" of {} items │ filter: ", app.items.len())),
        Span::styled(
            app.active_filter.label(),
            Style::default().fg(app.theme.highlight),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the filter bar.
///
/// Exactly one filter control is marked active at a time.
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = FILTER_KEYS
        .iter()
        .enumerate()
        .map(|(i, f)| Line::from(format!(" {}:{} ", i + 1, f.label())))
        .collect();

    let selected = FILTER_KEYS
        .iter()
        .position(|f| *f == app.active_filter)
        .unwrap_or(0);

    // Titles carry their own spacing so mouse hit-testing can mirror the
    // layout exactly (see `events::filter_at_column`)
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .padding("", "")
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, available controls, load errors, and temporary
/// status messages.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | r:reload q:quit", err)
    } else if !app.loaded {
        " Loading... | q:quit".to_string()
    } else {
        let controls = if app.is_detail_open() {
            "Esc/q:close | click outside to dismiss"
        } else {
            "←↑↓→:move Enter:detail Tab/1-5:filter e:export ?:help q:quit"
        };
        format!(" {} | {}", app.source_description(), controls)
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the gallery.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Move across a row"),
        Line::from("  ↑/↓ k/j     Move between rows"),
        Line::from("  Home/End    Jump to first/last card"),
        Line::from("  Enter       Open item detail"),
        Line::from("  Esc         Close detail"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Filters",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  1-5       Select a filter directly"),
        Line::from("  Tab       Next filter"),
        Line::from("  Shift-Tab Previous filter"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Reload the collection"),
        Line::from("  e         Export visible items"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
