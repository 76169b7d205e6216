//! Terminal rendering using ratatui.
//!
//! Every renderer draws purely from current state (via the view models in
//! [`crate::data::view`]), so a full redraw is idempotent: two frames from
//! the same state are identical.

pub mod common;
pub mod detail;
pub mod gallery;
pub mod theme;

pub use theme::Theme;
