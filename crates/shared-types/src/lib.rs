pub mod error;
pub mod feature_flags;

// Catalog domain
pub mod catalog;
pub mod config;
pub mod metadata;
pub mod search;
pub mod text;

pub use error::*;
pub use feature_flags::*;

pub use catalog::*;
pub use config::*;
pub use metadata::*;
pub use search::*;
pub use text::*;
