//! View models for the gallery grid and the detail overlay.
//!
//! The ui layer renders these structures and nothing else. Each view model is
//! rebuilt from current state on every frame, so a render is idempotent by
//! construction and no field from a previous selection can survive a
//! transition.

use crate::data::media::{self, MediaRef};
use crate::source::ItemRecord;

/// One card in the gallery grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    /// Hidden (`None`) when the preview reference is unresolvable.
    pub media: Option<MediaRef>,
}

impl CardView {
    fn from_item(item: &ItemRecord) -> Self {
        Self {
            name: item.name.clone(),
            media: media::resolve(&item.preview_url),
        }
    }
}

/// What the gallery container shows.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    /// The collection has not loaded yet.
    Loading,
    /// The load failed; shown in place of the grid.
    Error(String),
    /// The visible set is empty: explicit no-results state, zero cards.
    Empty,
    /// One card per visible item, in list order.
    Cards(Vec<CardView>),
}

/// Build the gallery view from current state.
pub fn gallery_view(
    loaded: bool,
    load_error: Option<&str>,
    items: &[ItemRecord],
    visible: &[usize],
) -> GalleryView {
    if let Some(err) = load_error {
        return GalleryView::Error(err.to_string());
    }
    if !loaded {
        return GalleryView::Loading;
    }
    if visible.is_empty() {
        return GalleryView::Empty;
    }
    let cards = visible
        .iter()
        .filter_map(|&i| items.get(i))
        .map(CardView::from_item)
        .collect();
    GalleryView::Cards(cards)
}

/// An outbound link slot in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Enabled(String),
    /// The field is absent; the control renders inert.
    Disabled,
}

impl LinkState {
    fn from_field(field: Option<&String>) -> Self {
        match field {
            Some(url) if !url.trim().is_empty() => LinkState::Enabled(url.clone()),
            _ => LinkState::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, LinkState::Enabled(_))
    }
}

/// Everything the detail overlay displays for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub description: String,
    /// Preview media, hidden when unresolvable.
    pub image: Option<MediaRef>,
    /// Present only when the item's animation reference ends in `.mp4`.
    pub video: Option<String>,
    /// Trait/value display pairs, in the item's original attribute order.
    pub attributes: Vec<(String, String)>,
    pub viewer: LinkState,
    pub market: LinkState,
    pub metadata: LinkState,
}

/// Build the detail view for a selected item.
pub fn detail_view(item: &ItemRecord) -> DetailView {
    let video = item
        .animation_url
        .as_deref()
        .filter(|url| media::is_video(url))
        .map(str::to_string);

    DetailView {
        title: item.name.clone(),
        description: item.description.clone(),
        image: media::resolve(&item.preview_url),
        video,
        attributes: item
            .attributes
            .iter()
            .map(|a| (a.trait_type.clone(), a.value.to_string()))
            .collect(),
        viewer: LinkState::from_field(item.viewer_url.as_ref()),
        market: LinkState::from_field(item.market_url.as_ref()),
        metadata: LinkState::from_field(item.metadata_url.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ItemAttribute, TraitValue};

    fn item(name: &str) -> ItemRecord {
        ItemRecord {
            id: serde_json::Value::Null,
            name: name.to_string(),
            description: format!("{} description", name),
            preview_url: format!("{}.gif", name),
            animation_url: None,
            attributes: Vec::new(),
            viewer_url: None,
            market_url: None,
            metadata_url: None,
        }
    }

    #[test]
    fn test_gallery_view_error_replaces_grid() {
        let view = gallery_view(false, Some("Read error: boom"), &[], &[]);
        assert_eq!(view, GalleryView::Error("Read error: boom".to_string()));
    }

    #[test]
    fn test_gallery_view_empty_filter_result() {
        let items = vec![item("a"), item("b")];
        let view = gallery_view(true, None, &items, &[]);
        assert_eq!(view, GalleryView::Empty);
    }

    #[test]
    fn test_gallery_view_cards_in_order() {
        let items = vec![item("a"), item("b"), item("c")];
        let view = gallery_view(true, None, &items, &[0, 2]);
        match view {
            GalleryView::Cards(cards) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].name, "a");
                assert_eq!(cards[1].name, "c");
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_video_only_for_mp4_reference() {
        let mut with_mp4 = item("a");
        with_mp4.animation_url = Some("https://cdn.example/a.mp4".to_string());
        let view = detail_view(&with_mp4);
        assert_eq!(view.video.as_deref(), Some("https://cdn.example/a.mp4"));

        let mut with_png = item("b");
        with_png.animation_url = Some("https://cdn.example/b.png".to_string());
        assert_eq!(detail_view(&with_png).video, None);

        assert_eq!(detail_view(&item("c")).video, None);
    }

    #[test]
    fn test_detail_replaces_prior_content() {
        // Opening A (with video) then B (without) leaves no trace of A's video.
        let mut a = item("a");
        a.animation_url = Some("a.mp4".to_string());
        let mut b = item("b");
        b.animation_url = Some("b.webm".to_string());

        let first = detail_view(&a);
        assert!(first.video.is_some());

        let second = detail_view(&b);
        assert_eq!(second.title, "b");
        assert_eq!(second.video, None);
    }

    #[test]
    fn test_links_default_disabled() {
        let mut rec = item("a");
        rec.market_url = Some("https://market.example/a".to_string());
        rec.metadata_url = Some("  ".to_string());

        let view = detail_view(&rec);
        assert_eq!(view.viewer, LinkState::Disabled);
        assert!(view.market.is_enabled());
        // Blank targets are as inert as absent ones
        assert_eq!(view.metadata, LinkState::Disabled);
    }

    #[test]
    fn test_attributes_in_original_order() {
        let mut rec = item("a");
        rec.attributes = vec![
            ItemAttribute { trait_type: "Size".into(), value: TraitValue::Number(45.0) },
            ItemAttribute {
                trait_type: "Base Color".into(),
                value: TraitValue::Text("#ffffff".into()),
            },
        ];

        let view = detail_view(&rec);
        assert_eq!(
            view.attributes,
            vec![
                ("Size".to_string(), "45".to_string()),
                ("Base Color".to_string(), "#ffffff".to_string()),
            ]
        );
    }

    #[test]
    fn test_card_media_hidden_when_blank() {
        let mut rec = item("a");
        rec.preview_url = String::new();
        let view = gallery_view(true, None, std::slice::from_ref(&rec), &[0]);
        match view {
            GalleryView::Cards(cards) => assert!(cards[0].media.is_none()),
            other => panic!("expected cards, got {:?}", other),
        }
    }
}
