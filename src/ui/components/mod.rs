mod cards;
mod history_panel;
mod key_hints;
mod quiz_panel;
mod spinner;
mod text_input;
pub mod theme;

pub use history_panel::HistoryPanel;
pub use key_hints::{render_key_hints, KeyHintBarStyle};
pub use quiz_panel::QuizPanel;
pub use spinner::Spinner;
pub use text_input::TextInputState;
