//! Wire types for collection documents.
//!
//! These types match the JSON format exported by collection metadata tools.
//! Legacy documents use slightly different key names (`preview_gif`,
//! `viewer_html`, `opensea_url`, `metadata_json`); serde aliases accept both.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete collection document.
///
/// This is the top-level structure: an ordered sequence of item records.
/// Document order is preserved everywhere downstream.
pub type CollectionDocument = Vec<ItemRecord>;

/// A single item's metadata, loaded verbatim from the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Opaque identifier. Never interpreted, only carried through to export.
    #[serde(default)]
    pub id: serde_json::Value,

    /// Display name.
    pub name: String,

    /// Display description.
    #[serde(default)]
    pub description: String,

    /// Image/GIF reference shown on the card and in the detail overlay.
    #[serde(default, alias = "preview_gif")]
    pub preview_url: String,

    /// Video reference. Treated as a video only when it ends in `.mp4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_url: Option<String>,

    /// Trait/value pairs, in document order.
    #[serde(default)]
    pub attributes: Vec<ItemAttribute>,

    /// External viewer page.
    #[serde(default, alias = "viewer_html", skip_serializing_if = "Option::is_none")]
    pub viewer_url: Option<String>,

    /// Marketplace listing.
    #[serde(default, alias = "opensea_url", skip_serializing_if = "Option::is_none")]
    pub market_url: Option<String>,

    /// Raw metadata download.
    #[serde(default, alias = "metadata_json", skip_serializing_if = "Option::is_none")]
    pub metadata_url: Option<String>,
}

/// One trait of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub trait_type: String,
    pub value: TraitValue,
}

/// A trait value, which documents encode as either a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraitValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for TraitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral values print without a fraction ("45", not "45.0").
            TraitValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                write!(f, "{}", *n as i64)
            }
            TraitValue::Number(n) => write!(f, "{}", n),
            TraitValue::Text(s) => write!(f, "{}", s),
        }
    }
}
