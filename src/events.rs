use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::App;
use crate::data::FILTER_KEYS;
use crate::ui;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If the detail overlay is open, keys only close it.
    // Esc is the cancellation key; 'q' and Enter act as the close control.
    if app.is_detail_open() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q')
        ) {
            app.close_detail();
        }
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Filter switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.apply_filter(app.active_filter.prev());
            } else {
                app.apply_filter(app.active_filter.next());
            }
        }
        KeyCode::BackTab => app.apply_filter(app.active_filter.prev()),

        // Direct filter access
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            app.apply_filter(FILTER_KEYS[index]);
        }

        // Grid navigation
        KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Open detail overlay
        KeyCode::Enter => app.open_detail(),

        // Reload
        KeyCode::Char('r') => {
            if app.reload() {
                app.set_status_message(format!("Loaded {} items", app.items.len()));
            }
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from("gallery_export.json");
            match app.export_visible(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events. `area` is the full terminal area of the last frame.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, area: Rect) {
    // While the overlay is open, a click on the backdrop closes it
    if app.is_detail_open() {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let overlay = ui::detail::overlay_area(area);
            let inside = mouse.column >= overlay.x
                && mouse.column < overlay.x + overlay.width
                && mouse.row >= overlay.y
                && mouse.row < overlay.y + overlay.height;
            if !inside {
                app.close_detail();
            }
        }
        return;
    }

    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        // Click to select and open
        MouseEventKind::Down(MouseButton::Left) => {
            // Filter bar click (row 1, after the header)
            if mouse.row == 1 {
                if let Some(filter) = filter_at_column(mouse.column) {
                    app.apply_filter(filter);
                }
                return;
            }

            // Card click opens the detail overlay for that item
            let hit = app
                .card_areas
                .iter()
                .find(|(rect, _)| {
                    mouse.column >= rect.x
                        && mouse.column < rect.x + rect.width
                        && mouse.row >= rect.y
                        && mouse.row < rect.y + rect.height
                })
                .map(|&(_, visual)| visual);
            if let Some(visual) = hit {
                app.open_detail_at(visual);
            }
        }

        _ => {}
    }
}

/// Map a filter-bar column to the filter rendered there.
///
/// Mirrors the tab layout in [`ui::common::render_filter_bar`]: titles are
/// `" N:Label "` joined by a one-column divider.
pub fn filter_at_column(column: u16) -> Option<crate::data::FilterKey> {
    let mut start = 0u16;
    for (i, filter) in FILTER_KEYS.iter().enumerate() {
        let title = format!(" {}:{} ", i + 1, filter.label());
        let end = start + title.len() as u16;
        if column >= start && column < end {
            return Some(*filter);
        }
        start = end + 1; // divider
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FilterKey;
    use crate::source::{ItemRecord, ItemSource, LoadError};
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[derive(Debug)]
    struct StaticSource(Vec<ItemRecord>);

    impl ItemSource for StaticSource {
        fn load(&mut self) -> Result<Vec<ItemRecord>, LoadError> {
            Ok(self.0.clone())
        }

        fn description(&self) -> &str {
            "static"
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn sample_app() -> App {
        let items: Vec<ItemRecord> = serde_json::from_str(
            r#"[
                { "name": "A", "preview_url": "a.gif", "animation_url": "a.mp4" },
                { "name": "B", "preview_url": "b.gif" }
            ]"#,
        )
        .unwrap();
        let mut app = App::new(Box::new(StaticSource(items)), FilterKey::All);
        app.reload();
        app
    }

    #[test]
    fn test_digit_keys_select_filters() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.active_filter, FilterKey::Size90);
        handle_key_event(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.active_filter, FilterKey::All);
    }

    #[test]
    fn test_tab_cycles_filters() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_filter, FilterKey::Size45);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.active_filter, FilterKey::All);
    }

    #[test]
    fn test_all_close_paths_agree() {
        let area = Rect::new(0, 0, 120, 40);

        // Cancellation key
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.is_detail_open());
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.is_detail_open());

        // Close control
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.is_detail_open());
        assert!(app.running, "close control must not quit the app");

        // Backdrop click
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        handle_mouse_event(&mut app, click(0, 0), area);
        assert!(!app.is_detail_open());
    }

    #[test]
    fn test_click_inside_overlay_keeps_it_open() {
        let area = Rect::new(0, 0, 120, 40);
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Enter));

        let overlay = ui::detail::overlay_area(area);
        handle_mouse_event(
            &mut app,
            click(overlay.x + 1, overlay.y + 1),
            area,
        );
        assert!(app.is_detail_open());
    }

    #[test]
    fn test_card_click_opens_detail() {
        let mut app = sample_app();
        app.card_areas = vec![
            (Rect::new(0, 2, 30, 6), 0),
            (Rect::new(30, 2, 30, 6), 1),
        ];

        handle_mouse_event(&mut app, click(35, 4), Rect::new(0, 0, 120, 40));
        assert_eq!(app.selected, Some(1));
    }

    #[test]
    fn test_filter_bar_click() {
        // Column 0 lands in " 1:All "
        assert_eq!(filter_at_column(0), Some(FilterKey::All));
        // First divider column maps to no filter
        assert_eq!(filter_at_column(7), None);
        // Column 8 starts " 2:45x45 "
        assert_eq!(filter_at_column(8), Some(FilterKey::Size45));
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit_key() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }
}
