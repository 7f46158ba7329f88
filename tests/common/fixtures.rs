//! Canned service payloads

use std::path::PathBuf;
use std::sync::Arc;

use bidquiz::api::MockQuizService;
use bidquiz::data::PreferenceStore;
use bidquiz::session::{PageSize, SessionDriver};
use bidquiz::{CheckResult, Convention, Deal, Quiz, Seat};

pub const SAMPLE_HAND: &str = "AKQ.J.T98.7652";

pub fn quiz(hand: &str) -> Quiz {
    Quiz {
        hand: hand.to_string(),
        position: Seat::North,
        convention: Convention::Natural,
        auction: vec!["1C".into(), "PASS".into()],
    }
}

pub fn sample_quiz() -> Quiz {
    quiz(SAMPLE_HAND)
}

pub fn check_result(suggested: &str) -> CheckResult {
    CheckResult {
        suggested_bid: suggested.to_string(),
        explanation: format!("{} describes the hand best", suggested),
    }
}

pub fn deal(id: i64) -> Deal {
    Deal {
        id: Some(id),
        created_at: Some("2024-05-01T14:03:10Z".into()),
        dealer: Some(Seat::North),
        north_hand: Some(SAMPLE_HAND.into()),
        east_hand: Some("JT9.AKQ2.AK.AKQJ".into()),
        south_hand: Some("8765.9876.Q.T98".into()),
        west_hand: Some("432.T543.J765432.".into()),
        convention: Some(Convention::Natural),
        auction: vec!["1C".into(), "X".into()],
    }
}

pub fn deals(count: i64) -> Vec<Deal> {
    (1..=count).map(deal).collect()
}

/// Driver over a mock service with the default page size
pub fn driver(
    service: MockQuizService,
    preferences: Arc<dyn PreferenceStore>,
    exports_dir: PathBuf,
) -> SessionDriver {
    SessionDriver::new(Arc::new(service), preferences, PageSize::default(), exports_dir)
}
