//! Application state and gallery logic.

use std::time::Instant;

use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::data::{filter, view, DetailView, FilterKey, GalleryView};
use crate::source::{ItemRecord, ItemSource};
use crate::ui::Theme;

/// Main application state.
///
/// Holds the full item list and the currently visible subsequence, plus the
/// selection that drives the detail overlay. The overlay is a plain two-state
/// toggle: it is open exactly when [`App::selected`] is `Some`.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn ItemSource>,
    /// The full collection, populated once by `reload` and never mutated.
    pub items: Vec<ItemRecord>,
    /// Indices into `items` for the currently visible subsequence, in
    /// original order. Recomputed synchronously on every filter change.
    pub visible: Vec<usize>,
    pub load_error: Option<String>,
    pub loaded: bool,

    // Filter and selection state
    pub active_filter: FilterKey,
    /// Raw index of the item shown in the detail overlay, if open.
    pub selected: Option<usize>,
    /// Cursor position within `visible`.
    pub cursor: usize,

    // Grid geometry, recorded by the gallery renderer each frame
    pub grid_columns: usize,
    /// Configured card width in terminal columns.
    pub card_width: u16,
    /// Card hit-test areas: (screen rect, visual index), for mouse selection.
    pub card_areas: Vec<(Rect, usize)>,

    // UI
    pub theme: Theme,
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given source and initial filter.
    pub fn new(source: Box<dyn ItemSource>, initial_filter: FilterKey) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            items: Vec::new(),
            visible: Vec::new(),
            load_error: None,
            loaded: false,
            active_filter: initial_filter,
            selected: None,
            cursor: 0,
            grid_columns: 1,
            card_width: 32,
            card_areas: Vec::new(),
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Load the collection from the source.
    ///
    /// Called once at startup; calling it again repeats the same single load
    /// on demand. On failure the grid is replaced by an error state and the
    /// item list stays empty.
    pub fn reload(&mut self) -> bool {
        info!(source = self.source.description(), "loading collection");
        match self.source.load() {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.load_error = None;
                self.selected = None;
                self.recompute_visible();
                info!(items = self.items.len(), "collection loaded");
                true
            }
            Err(err) => {
                warn!(error = %err, "collection load failed");
                self.items.clear();
                self.visible.clear();
                self.loaded = false;
                self.selected = None;
                self.load_error = Some(err.to_string());
                false
            }
        }
    }

    /// Recompute the visible subsequence from the active filter.
    fn recompute_visible(&mut self) {
        self.visible = filter::apply(self.active_filter, &self.items);
        self.cursor = self.cursor.min(self.visible.len().saturating_sub(1));
    }

    /// Activate a filter and recompute the visible set.
    ///
    /// Activating any filter deactivates the previous one; exactly one is
    /// active at a time.
    pub fn apply_filter(&mut self, key: FilterKey) {
        self.active_filter = key;
        self.recompute_visible();
    }

    /// Activate a filter by key string, fail-open on unrecognized keys.
    pub fn filter_by_key(&mut self, key: &str) {
        self.apply_filter(FilterKey::from_key(key));
    }

    /// Build the gallery view model for the current frame.
    pub fn gallery_view(&self) -> GalleryView {
        view::gallery_view(
            self.loaded,
            self.load_error.as_deref(),
            &self.items,
            &self.visible,
        )
    }

    /// The item currently shown in the detail overlay, if any.
    pub fn selected_item(&self) -> Option<&ItemRecord> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Build the detail view model, rebuilt from the selection every frame.
    pub fn detail_view(&self) -> Option<DetailView> {
        self.selected_item().map(view::detail_view)
    }

    /// Whether the detail overlay is open.
    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open the detail overlay for the item under the cursor.
    ///
    /// No-op when nothing is visible.
    pub fn open_detail(&mut self) {
        if let Some(&raw) = self.visible.get(self.cursor) {
            self.selected = Some(raw);
        }
    }

    /// Open the detail overlay for a specific visual position.
    pub fn open_detail_at(&mut self, visual_index: usize) {
        if visual_index < self.visible.len() {
            self.cursor = visual_index;
            self.selected = Some(self.visible[visual_index]);
        }
    }

    /// Close the detail overlay. Closing an already-closed overlay is a no-op.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Move the cursor right by one card.
    pub fn select_next(&mut self) {
        let max = self.visible.len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(max);
    }

    /// Move the cursor left by one card.
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one grid row.
    pub fn select_down(&mut self) {
        let max = self.visible.len().saturating_sub(1);
        self.cursor = (self.cursor + self.grid_columns.max(1)).min(max);
    }

    /// Move the cursor up one grid row.
    pub fn select_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.grid_columns.max(1));
    }

    /// Jump to the first card.
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last card.
    pub fn select_last(&mut self) {
        self.cursor = self.visible.len().saturating_sub(1);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the currently visible items to a JSON file.
    pub fn export_visible(&self, path: &std::path::Path) -> anyhow::Result<()> {
        use std::io::Write;

        if !self.loaded {
            anyhow::bail!("No collection to export");
        }

        let mut export = serde_json::Map::new();

        let mut summary = serde_json::Map::new();
        summary.insert("total".to_string(), serde_json::json!(self.items.len()));
        summary.insert("shown".to_string(), serde_json::json!(self.visible.len()));
        summary.insert(
            "filter".to_string(),
            serde_json::json!(self.active_filter.key()),
        );
        export.insert("summary".to_string(), serde_json::Value::Object(summary));

        let items: Vec<serde_json::Value> = self
            .visible
            .iter()
            .filter_map(|&i| self.items.get(i))
            .map(|item| serde_json::to_value(item).unwrap_or(serde_json::Value::Null))
            .collect();
        export.insert("items".to_string(), serde_json::Value::Array(items));

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(export))?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        info!(path = %path.display(), shown = self.visible.len(), "exported visible items");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ItemAttribute, LoadError, TraitValue};

    #[derive(Debug)]
    struct StaticSource {
        items: Option<Vec<ItemRecord>>,
    }

    impl StaticSource {
        fn ok(items: Vec<ItemRecord>) -> Box<Self> {
            Box::new(Self { items: Some(items) })
        }

        fn failing() -> Box<Self> {
            Box::new(Self { items: None })
        }
    }

    impl ItemSource for StaticSource {
        fn load(&mut self) -> Result<Vec<ItemRecord>, LoadError> {
            match &self.items {
                Some(items) => Ok(items.clone()),
                None => Err(LoadError::Http("boom".to_string())),
            }
        }

        fn description(&self) -> &str {
            "static"
        }
    }

    fn item(name: &str, color: &str) -> ItemRecord {
        ItemRecord {
            id: serde_json::Value::Null,
            name: name.to_string(),
            description: String::new(),
            preview_url: format!("{}.gif", name),
            animation_url: None,
            attributes: vec![ItemAttribute {
                trait_type: "Base Color".to_string(),
                value: TraitValue::Text(color.to_string()),
            }],
            viewer_url: None,
            market_url: None,
            metadata_url: None,
        }
    }

    fn sample_app() -> App {
        let mut app = App::new(
            StaticSource::ok(vec![
                item("X", "#ffffff"),
                item("Y", "#3907ed"),
                item("Z", "#ffffff"),
            ]),
            FilterKey::All,
        );
        app.reload();
        app
    }

    #[test]
    fn test_load_populates_full_collection() {
        let app = sample_app();
        assert!(app.loaded);
        assert!(app.load_error.is_none());
        assert_eq!(app.items.len(), 3);
        assert_eq!(app.visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_load_failure_surfaces_error_and_leaves_items_empty() {
        let mut app = App::new(StaticSource::failing(), FilterKey::All);
        assert!(!app.reload());
        assert!(!app.loaded);
        assert!(app.items.is_empty());
        assert!(app.visible.is_empty());
        let err = app.load_error.as_deref().unwrap();
        assert!(err.contains("HTTP request failed"));
        assert!(matches!(app.gallery_view(), GalleryView::Error(_)));
    }

    #[test]
    fn test_filter_recomputes_visible_subsequence() {
        let mut app = sample_app();

        app.apply_filter(FilterKey::White);
        assert_eq!(app.visible, vec![0, 2]);

        app.apply_filter(FilterKey::Blue);
        assert_eq!(app.visible, vec![1]);

        app.apply_filter(FilterKey::All);
        assert_eq!(app.visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_unrecognized_key_behaves_like_all() {
        let mut app = sample_app();
        app.filter_by_key("no-such-key");
        assert_eq!(app.active_filter, FilterKey::All);
        assert_eq!(app.visible, vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_clamps_cursor() {
        let mut app = sample_app();
        app.select_last();
        assert_eq!(app.cursor, 2);

        app.apply_filter(FilterKey::Blue);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut app = sample_app();
        assert!(!app.is_detail_open());

        app.select_next();
        app.open_detail();
        assert_eq!(app.selected, Some(1));
        assert_eq!(app.detail_view().unwrap().title, "Y");

        app.close_detail();
        assert!(!app.is_detail_open());
        assert!(app.detail_view().is_none());

        // Closing an already-closed overlay is a no-op
        app.close_detail();
        assert!(!app.is_detail_open());
    }

    #[test]
    fn test_open_detail_noop_when_nothing_visible() {
        let mut app = App::new(StaticSource::ok(Vec::new()), FilterKey::All);
        app.reload();
        assert!(matches!(app.gallery_view(), GalleryView::Empty));

        app.open_detail();
        assert!(!app.is_detail_open());
    }

    #[test]
    fn test_open_detail_selects_through_filter() {
        let mut app = sample_app();
        app.apply_filter(FilterKey::White);

        // Visual position 1 is raw item 2 ("Z")
        app.select_next();
        app.open_detail();
        assert_eq!(app.selected, Some(2));
        assert_eq!(app.detail_view().unwrap().title, "Z");
    }

    #[test]
    fn test_grid_navigation_clamps() {
        let mut app = sample_app();
        app.grid_columns = 2;

        app.select_prev();
        assert_eq!(app.cursor, 0);

        app.select_down();
        assert_eq!(app.cursor, 2);
        app.select_down();
        assert_eq!(app.cursor, 2);

        app.select_up();
        assert_eq!(app.cursor, 0);

        app.select_last();
        assert_eq!(app.cursor, 2);
        app.select_next();
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_export_visible() {
        let mut app = sample_app();
        app.apply_filter(FilterKey::White);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        app.export_visible(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["summary"]["total"], 3);
        assert_eq!(parsed["summary"]["shown"], 2);
        assert_eq!(parsed["summary"]["filter"], "white");
        assert_eq!(parsed["items"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["items"][0]["name"], "X");
        assert_eq!(parsed["items"][1]["name"], "Z");
    }

    #[test]
    fn test_export_without_collection_fails() {
        let app = App::new(StaticSource::failing(), FilterKey::All);
        let dir = tempfile::tempdir().unwrap();
        assert!(app.export_visible(&dir.path().join("x.json")).is_err());
    }
}
