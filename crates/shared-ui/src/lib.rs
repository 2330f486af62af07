//! Presentational components shared by the catalog pages and the search widget.

pub mod components;

pub use components::*;
