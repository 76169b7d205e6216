//! Pure data processing: filters, media classification, and view models.
//!
//! ## Submodules
//!
//! - [`filter`]: the closed set of attribute predicates ([`FilterKey`])
//! - [`media`]: media reference classification (image vs `.mp4` video)
//! - [`view`]: display structures the ui layer renders from
//!
//! ## Data Flow
//!
//! ```text
//! Vec<ItemRecord> (wire)
//!        │
//!        ├──▶ filter::apply(key, items)  ──▶ visible indices
//!        │
//!        ├──▶ view::gallery_view(..)     ──▶ GalleryView (cards | empty | error)
//!        │
//!        └──▶ view::detail_view(item)    ──▶ DetailView (overlay content)
//! ```

pub mod filter;
pub mod media;
pub mod view;

pub use filter::{FilterKey, FILTER_KEYS};
pub use media::{MediaKind, MediaRef};
pub use view::{CardView, DetailView, GalleryView, LinkState};
