//! # mintview
//!
//! A terminal gallery and library for browsing NFT collection metadata.
//!
//! This crate loads a collection document (an ordered list of item records)
//! from a local file or an HTTP endpoint, renders the items as a card grid
//! in an interactive terminal UI, applies a small closed set of attribute
//! filters, and shows a detail overlay for a selected item.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(view models)  │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── FileSource | HttpSource                     │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, filtering, selection, and the detail
//!   overlay toggle
//! - **[`source`]**: Collection loading ([`ItemSource`] trait) with file and
//!   HTTP implementations; the document is fetched exactly once at startup
//! - **[`data`]**: Pure processing - the closed filter set, media
//!   classification, and the view models the renderers draw from
//! - **[`ui`]**: Terminal rendering using ratatui - card grid, filter bar,
//!   detail overlay, and theme support
//!
//! ## Behavior notes
//!
//! - The visible set is always the exact subsequence of the full collection
//!   satisfying the active filter, in document order.
//! - Unrecognized filter keys fail open to the unrestricted filter.
//! - The detail overlay is keyed to the selection: it is open exactly when
//!   an item is selected, and its content is rebuilt from the selection on
//!   every frame.
//! - A failed load replaces the grid with an error state and is never
//!   retried automatically.
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Browse a local collection document
//! mintview --file items.json
//!
//! # Fetch the document from an endpoint
//! mintview --url https://cdn.example/items.json
//!
//! # Non-interactive: write the filtered listing to a file
//! mintview --file items.json --filter white --export white.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use mintview::{App, FileSource, FilterKey};
//!
//! let source = Box::new(FileSource::new("items.json"));
//! let mut app = App::new(source, FilterKey::All);
//! app.reload();
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use crate::config::Settings;
pub use app::App;
pub use data::{CardView, DetailView, FilterKey, GalleryView, LinkState, MediaKind, MediaRef};
pub use source::{
    CollectionDocument, FileSource, HttpSource, ItemAttribute, ItemRecord, ItemSource, LoadError,
    TraitValue,
};
