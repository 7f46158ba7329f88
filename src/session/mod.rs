//! Quiz and history state machines
//!
//! The state machines never perform I/O. Operations return [`Effect`] values
//! that the [`SessionDriver`] executes; results come back as [`Completion`]s
//! tagged with the [`RequestTicket`] of the request that produced them.

pub mod driver;
pub mod effect;
pub mod history;
pub mod quiz;

pub use driver::SessionDriver;
pub use effect::{Completion, Effect, RequestTicket};
pub use history::{HistoryBrowser, HistoryPhase, HistoryState, PageSize, DEFAULT_PAGE_SIZE, PAGE_SIZES};
pub use quiz::{CheckState, LoadedQuiz, QuizSession, QuizState};
