//! Search-as-you-type widget for the catalog.

pub mod debounce;
pub mod dispatcher;
pub mod navigation;
pub mod outside;
pub mod panel;
mod results;
mod search_box;

pub use search_box::SearchBox;
