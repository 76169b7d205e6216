//! Detail overlay rendering.
//!
//! Displays a modal overlay with the selected item's metadata. The overlay
//! content is rebuilt from the selection on every frame, so opening a new
//! item fully replaces whatever was shown before.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{LinkState, MediaKind};

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 50;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 16;

/// The screen rectangle the overlay occupies for a given terminal area.
///
/// Exposed so mouse handling can distinguish overlay clicks from backdrop
/// clicks.
pub fn overlay_area(area: Rect) -> Rect {
    // Width: 90% of screen, clamped to [MIN_OVERLAY_WIDTH, 100]
    let overlay_width = (area.width * 90 / 100).clamp(MIN_OVERLAY_WIDTH, 100);
    // Height: 85% of screen, clamped to [MIN_OVERLAY_HEIGHT, 44]
    let overlay_height = (area.height * 85 / 100).clamp(MIN_OVERLAY_HEIGHT, 44);

    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    Rect::new(x, y, overlay_width, overlay_height)
}

/// Render the item detail as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let Some(detail) = app.detail_view() else {
        return;
    };

    let overlay = overlay_area(area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay);

    let chunks = Layout::vertical([
        Constraint::Length(5), // Title and description
        Constraint::Length(4), // Media references
        Constraint::Min(4),    // Attributes table
        Constraint::Length(5), // Outbound links
        Constraint::Length(1), // Footer
    ])
    .split(overlay);

    // ===== HEADER SECTION =====
    let header_lines = vec![
        Line::from(Span::styled(
            format!(" {} ", detail.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(" {}", detail.description)),
    ];

    let header_block = Block::default()
        .title(" Item Detail ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let header = Paragraph::new(header_lines).wrap(Wrap { trim: false }).block(header_block);
    frame.render_widget(header, chunks[0]);

    // ===== MEDIA SECTION =====
    // The video line exists only when the animation reference is playable;
    // a missing preview is hidden in place, never an error.
    let mut media_lines = Vec::new();
    match &detail.image {
        Some(image) => media_lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", image.kind.badge()),
                app.theme.media_style(image.kind),
            ),
            Span::raw(image.url.clone()),
        ])),
        None => media_lines.push(Line::from(Span::styled(
            " No preview",
            Style::default().add_modifier(Modifier::DIM),
        ))),
    }
    if let Some(video) = &detail.video {
        media_lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", MediaKind::Video.badge()),
                app.theme.media_style(MediaKind::Video),
            ),
            Span::raw(video.clone()),
            Span::styled(" (playable)", Style::default().add_modifier(Modifier::DIM)),
        ]));
    }

    let media_block = Block::default()
        .title(" Media ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    frame.render_widget(Paragraph::new(media_lines).block(media_block), chunks[1]);

    // ===== ATTRIBUTES SECTION =====
    if !detail.attributes.is_empty() {
        let attr_header = Row::new(vec![Cell::from("Trait"), Cell::from("Value")])
            .height(1)
            .style(app.theme.header);

        let attr_rows: Vec<Row> = detail
            .attributes
            .iter()
            .map(|(trait_type, value)| {
                Row::new(vec![Cell::from(trait_type.clone()), Cell::from(value.clone())])
            })
            .collect();

        let attr_widths = [Constraint::Fill(1), Constraint::Fill(1)];

        let attr_table = Table::new(attr_rows, attr_widths).header(attr_header).block(
            Block::default()
                .title(format!(" Attributes ({}) ", detail.attributes.len()))
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        );

        frame.render_widget(attr_table, chunks[2]);
    } else {
        let empty_block = Block::default()
            .title(" Attributes (0) ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No attributes",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .block(empty_block);
        frame.render_widget(empty, chunks[2]);
    }

    // ===== LINKS SECTION =====
    let links_block = Block::default()
        .title(" Links ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let link_lines = vec![
        link_line(app, "Viewer", &detail.viewer),
        link_line(app, "Market", &detail.market),
        link_line(app, "Metadata", &detail.metadata),
    ];
    frame.render_widget(Paragraph::new(link_lines).block(links_block), chunks[3]);

    // ===== FOOTER =====
    let footer = Paragraph::new(Line::from(Span::styled(
        " Press Esc to close ",
        Style::default().add_modifier(Modifier::DIM),
    )));
    frame.render_widget(footer, chunks[4]);
}

/// One outbound link row; absent targets render inert.
fn link_line(app: &App, label: &str, link: &LinkState) -> Line<'static> {
    match link {
        LinkState::Enabled(url) => Line::from(vec![
            Span::raw(format!(" {}: ", label)),
            Span::styled(url.clone(), Style::default().fg(app.theme.highlight)),
        ]),
        LinkState::Disabled => Line::from(vec![
            Span::raw(format!(" {}: ", label)),
            Span::styled("—", Style::default().add_modifier(Modifier::DIM)),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_area_centered_and_clamped() {
        let overlay = overlay_area(Rect::new(0, 0, 120, 40));
        assert!(overlay.width >= MIN_OVERLAY_WIDTH);
        assert!(overlay.height >= MIN_OVERLAY_HEIGHT);
        assert!(overlay.x > 0);
        assert!(overlay.y > 0);
        assert!(overlay.x + overlay.width <= 120);
        assert!(overlay.y + overlay.height <= 40);
    }

    #[test]
    fn test_overlay_leaves_backdrop() {
        // There must always be backdrop around the overlay to click on
        let overlay = overlay_area(Rect::new(0, 0, 200, 60));
        assert!(overlay.width <= 100);
        assert!(overlay.height <= 44);
    }
}
