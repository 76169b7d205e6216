//! Gallery grid rendering.
//!
//! Rebuilds the card grid from the current view model on every frame: one
//! card per visible item, in list order, plus dedicated panels for the
//! loading, error, empty, and no-results states.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{CardView, GalleryView};

/// Height of one card row (borders plus two content lines).
const CARD_HEIGHT: u16 = 4;
/// Minimum card width before the grid drops to fewer columns.
const MIN_CARD_WIDTH: u16 = 24;

/// Render the gallery container.
///
/// Also records the grid geometry (column count, card hit-test areas) on the
/// app for keyboard navigation and mouse selection.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    app.card_areas.clear();

    match app.gallery_view() {
        GalleryView::Loading => render_notice(frame, app, area, "Loading collection...", false),
        GalleryView::Error(msg) => {
            render_notice(frame, app, area, &format!("Error: {}", msg), true)
        }
        GalleryView::Empty => {
            let msg = if app.items.is_empty() {
                "Collection is empty"
            } else {
                "No items match this filter"
            };
            render_notice(frame, app, area, msg, false);
        }
        GalleryView::Cards(cards) => render_grid(frame, app, area, &cards),
    }
}

/// Render a full-container notice panel (loading, error, no results).
fn render_notice(frame: &mut Frame, app: &App, area: Rect, message: &str, is_error: bool) {
    let style = if is_error {
        Style::default().fg(app.theme.error)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let block = Block::default()
        .title(" Gallery ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let lines = vec![Line::from(""), Line::from(Span::styled(message, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}

fn render_grid(frame: &mut Frame, app: &mut App, area: Rect, cards: &[CardView]) {
    let card_width = app.card_width.max(MIN_CARD_WIDTH);
    let columns = (area.width / card_width).max(1) as usize;
    app.grid_columns = columns;

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = app.cursor / columns;
    // Keep the cursor on screen; stateless, so the render stays idempotent
    let row_offset = cursor_row.saturating_sub(visible_rows - 1);

    for (visual, card) in cards.iter().enumerate() {
        let row = visual / columns;
        if row < row_offset || row >= row_offset + visible_rows {
            continue;
        }
        let col = visual % columns;

        let x = area.x + (col as u16) * card_width;
        let y = area.y + ((row - row_offset) as u16) * CARD_HEIGHT;
        let rect = Rect::new(x, y, card_width, CARD_HEIGHT);

        render_card(frame, app, rect, card, visual == app.cursor);
        app.card_areas.push((rect, visual));
    }
}

fn render_card(frame: &mut Frame, app: &App, rect: Rect, card: &CardView, is_cursor: bool) {
    let border_style = if is_cursor {
        Style::default().fg(app.theme.highlight)
    } else {
        Style::default().fg(app.theme.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(border_style);

    // Media line is hidden in place when the reference is unresolvable
    let media_line = match &card.media {
        Some(media) => Line::from(vec![
            Span::styled(media.kind.badge(), app.theme.media_style(media.kind)),
            Span::raw(" "),
            Span::styled(
                file_tail(&media.url),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        None => Line::from(""),
    };

    let name_style = if is_cursor {
        app.theme.selected
    } else {
        Style::default()
    };
    let lines = vec![media_line, Line::from(Span::styled(card.name.clone(), name_style))];

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// Last path segment of a media URL, for compact card display.
fn file_tail(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_tail() {
        assert_eq!(file_tail("https://cdn.example/a/b/clip.mp4"), "clip.mp4");
        assert_eq!(file_tail("local.gif"), "local.gif");
    }
}
