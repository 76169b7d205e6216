//! Attribute filters.
//!
//! A small closed set of named predicates over item attributes. Exactly one
//! filter is active at a time; an unrecognized key resolves to [`FilterKey::All`]
//! (fail-open, never fail-closed).

use crate::source::{ItemRecord, TraitValue};

/// The recognized filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKey {
    /// Unrestricted: every item passes.
    #[default]
    All,
    /// Items with a size-45 attribute.
    Size45,
    /// Items with a size-90 attribute.
    Size90,
    /// Items with a white base color attribute.
    White,
    /// Items with a blue base color attribute.
    Blue,
}

/// All keys, in filter-bar order.
pub const FILTER_KEYS: [FilterKey; 5] = [
    FilterKey::All,
    FilterKey::Size45,
    FilterKey::Size90,
    FilterKey::White,
    FilterKey::Blue,
];

impl FilterKey {
    /// Resolve a key string to a filter.
    ///
    /// Exporter variants disagree on size literals (numeric `45` vs string
    /// `"45x45"`), so both spellings are accepted. Anything unrecognized is
    /// `All`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "all" => FilterKey::All,
            "45" | "45x45" => FilterKey::Size45,
            "90" | "90x90" => FilterKey::Size90,
            "white" => FilterKey::White,
            "blue" => FilterKey::Blue,
            _ => FilterKey::All,
        }
    }

    /// Returns the display label for the filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::All => "All",
            FilterKey::Size45 => "45x45",
            FilterKey::Size90 => "90x90",
            FilterKey::White => "White",
            FilterKey::Blue => "Blue",
        }
    }

    /// Cycle to the next filter.
    pub fn next(self) -> Self {
        match self {
            FilterKey::All => FilterKey::Size45,
            FilterKey::Size45 => FilterKey::Size90,
            FilterKey::Size90 => FilterKey::White,
            FilterKey::White => FilterKey::Blue,
            FilterKey::Blue => FilterKey::All,
        }
    }

    /// Cycle to the previous filter.
    pub fn prev(self) -> Self {
        match self {
            FilterKey::All => FilterKey::Blue,
            FilterKey::Size45 => FilterKey::All,
            FilterKey::Size90 => FilterKey::Size45,
            FilterKey::White => FilterKey::Size90,
            FilterKey::Blue => FilterKey::White,
        }
    }

    /// Returns the canonical key string (as accepted by `from_key`).
    pub fn key(&self) -> &'static str {
        match self {
            FilterKey::All => "all",
            FilterKey::Size45 => "45",
            FilterKey::Size90 => "90",
            FilterKey::White => "white",
            FilterKey::Blue => "blue",
        }
    }

    /// Test whether an item passes this filter.
    pub fn matches(&self, item: &ItemRecord) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Size45 => has_size(item, 45),
            FilterKey::Size90 => has_size(item, 90),
            FilterKey::White => has_color(item, "#ffffff"),
            FilterKey::Blue => has_color(item, "#3907ed"),
        }
    }
}

/// True when some attribute value names the given size, in any of the
/// conventions the exporters used: the number `45`, the string `"45"`, or the
/// string `"45x45"`.
fn has_size(item: &ItemRecord, size: u32) -> bool {
    let plain = size.to_string();
    let squared = format!("{}x{}", size, size);
    item.attributes.iter().any(|a| match &a.value {
        TraitValue::Number(n) => *n == f64::from(size),
        TraitValue::Text(s) => s == &plain || s == &squared,
    })
}

/// True when some attribute value is exactly the given color literal.
fn has_color(item: &ItemRecord, color: &str) -> bool {
    item.attributes
        .iter()
        .any(|a| matches!(&a.value, TraitValue::Text(s) if s == color))
}

/// Compute the visible subsequence for a filter.
///
/// Returns indices into `items`, in original order. This is the single place
/// the filter invariant is enforced: the result is always exactly
/// `{i : filter.matches(items[i])}`.
pub fn apply(filter: FilterKey, items: &[ItemRecord]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item))
        .map(|(i, _)| i)
        .collect()
}
