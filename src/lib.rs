pub mod api;
pub mod config;
pub mod data;
pub mod domain;
pub mod session;
pub mod ui;
pub mod util;
pub mod view;

pub use api::{ApiError, HttpQuizService, MockQuizService, QuizService};
pub use config::Config;
pub use data::{Database, MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
pub use domain::{CheckRequest, CheckResult, Convention, Deal, Quiz, Seat};
pub use session::{HistoryBrowser, QuizSession, SessionDriver};
pub use ui::App;
