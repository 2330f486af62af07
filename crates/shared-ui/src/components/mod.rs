pub mod badge;
pub mod detail_list;
pub mod highlighted_text;
pub mod panel;
pub mod poster;
pub mod skeleton;
pub mod spinner;

pub use badge::*;
pub use detail_list::*;
pub use highlighted_text::*;
pub use panel::*;
pub use poster::*;
pub use skeleton::*;
pub use spinner::*;
