pub mod terminal;
pub mod theme;
pub mod view;

pub use terminal::TuiManager;
pub use theme::Palette;
pub use view::{render_progress_bar, render_word_display};
