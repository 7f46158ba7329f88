use super::{auction_chips, BidChip, HandView, PLACEHOLDER};
use crate::domain::{Convention, Quiz};
use crate::session::{CheckState, QuizSession, QuizState};

/// Everything the quiz screen draws
#[derive(Debug, Clone, PartialEq)]
pub struct QuizScreen {
    pub primary: QuizPrimary,
    pub show_hcp: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizPrimary {
    /// No quiz requested yet
    Idle,
    Loading,
    Error { message: String },
    Quiz(Box<QuizPanel>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizPanel {
    pub hand: HandView,
    pub position: String,
    /// Convention the quiz was generated for
    pub quiz_convention: String,
    /// Convention that will be submitted
    pub selected_convention: String,
    pub conventions: Vec<ConventionOption>,
    pub auction: Vec<BidChip>,
    pub proposed_bid: String,
    pub check: CheckPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionOption {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckPanel {
    Empty,
    Checking,
    Result {
        suggested: BidChip,
        /// Whether the proposed bid matches the suggestion
        matches: bool,
        explanation: String,
    },
    Error { message: String },
}

pub fn compose_quiz(session: &QuizSession, show_hcp: bool) -> QuizScreen {
    let primary = match session.state() {
        QuizState::Idle => QuizPrimary::Idle,
        QuizState::Loading => QuizPrimary::Loading,
        QuizState::LoadError { message } => QuizPrimary::Error {
            message: message.clone(),
        },
        QuizState::Loaded(loaded) => {
            QuizPrimary::Quiz(Box::new(quiz_panel(session, &loaded.quiz, &loaded.check)))
        }
    };

    QuizScreen { primary, show_hcp }
}

fn quiz_panel(session: &QuizSession, quiz: &Quiz, check: &CheckState) -> QuizPanel {
    let selected = session
        .selected_convention()
        .cloned()
        .unwrap_or_else(|| quiz.convention.clone());

    let conventions = Convention::SELECTABLE
        .iter()
        .map(|c| ConventionOption {
            label: c.display_name().to_string(),
            selected: *c == selected,
        })
        .collect();

    QuizPanel {
        hand: HandView::new(&quiz.hand),
        position: quiz.position.name().to_string(),
        quiz_convention: convention_label(&quiz.convention),
        selected_convention: convention_label(&selected),
        conventions,
        auction: auction_chips(&quiz.auction, Some(quiz.dealer())),
        proposed_bid: session.proposed_bid().to_string(),
        check: check_panel(session.proposed_bid(), check),
    }
}

fn check_panel(proposed_bid: &str, check: &CheckState) -> CheckPanel {
    match check {
        CheckState::NoResult => CheckPanel::Empty,
        CheckState::Checking => CheckPanel::Checking,
        CheckState::HasResult(result) => CheckPanel::Result {
            suggested: BidChip::new(&result.suggested_bid, None),
            matches: proposed_bid
                .trim()
                .eq_ignore_ascii_case(result.suggested_bid.trim()),
            explanation: if result.explanation.trim().is_empty() {
                PLACEHOLDER.to_string()
            } else {
                result.explanation.clone()
            },
        },
        CheckState::CheckError { message } => CheckPanel::Error {
            message: message.clone(),
        },
    }
}

pub(crate) fn convention_label(convention: &Convention) -> String {
    if convention.is_blank() {
        PLACEHOLDER.to_string()
    } else {
        convention.display_name().to_string()
    }
}
