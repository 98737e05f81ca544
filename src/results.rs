//! Results dashboard view model
//!
//! One fetch of every quiz with its statistics, rendered either as a grid of
//! cards or as an empty state. A refetch replaces the snapshot wholesale.

use crate::collection::ListState;
use crate::gateway::QuizGateway;
use crate::lifecycle::{run_request, Lifecycle, Outcome, StateCell};
use crate::notify::Notifier;
use crate::routes::Route;
use crate::scope::ViewScope;
use crate::types::QuizSummary;

pub const SYNC_FAILED: &str = "Sync failed: Analytics engine offline";

/// Minutes shown when a quiz has no explicit duration.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Lifecycle of the results fetch; the slot holds the current snapshot.
pub type ResultsState = Lifecycle<ListState<QuizSummary>>;

/// State for a results screen that fetches on mount.
pub fn initial_state() -> ResultsState {
    Lifecycle::pending(ListState::new())
}

/// Which branch of the results screen to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsBody<'a> {
    Loading,
    Empty,
    Grid(&'a [QuizSummary]),
}

impl<'a> ResultsBody<'a> {
    pub fn from_state(state: &'a ResultsState) -> Self {
        if state.is_pending() {
            ResultsBody::Loading
        } else if state.data().is_empty() {
            ResultsBody::Empty
        } else {
            ResultsBody::Grid(state.data().items())
        }
    }
}

/// Fetch the quiz snapshot and install it into `cell`.
pub async fn fetch_results<C, G, N>(
    scope: &ViewScope,
    cell: &C,
    gateway: &G,
    notifier: &N,
) -> Outcome<usize>
where
    C: StateCell<ResultsState>,
    G: QuizGateway + ?Sized,
    N: Notifier + ?Sized,
{
    run_request(scope, cell, notifier, SYNC_FAILED, gateway.quizzes_with_stats())
        .await
        .map(|quizzes| quizzes.len())
}

impl QuizSummary {
    /// Average score to one decimal with a `%` suffix; `0%` when unknown.
    pub fn average_score_label(&self) -> String {
        match self.average_score {
            Some(score) => format!("{:.1}%", score),
            None => "0%".to_string(),
        }
    }

    pub fn duration_label(&self) -> String {
        let minutes = match self.duration {
            Some(0) | None => DEFAULT_DURATION_MINUTES,
            Some(minutes) => minutes,
        };
        format!("{} MINS", minutes)
    }

    /// Creation date as `Mar 5`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %-d").to_string()
    }

    pub fn results_route(&self) -> Route {
        Route::QuizResults(self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn quiz(id: &str) -> QuizSummary {
        QuizSummary {
            id: id.to_string(),
            title: format!("Quiz {}", id),
            description: None,
            duration: None,
            created_at: Utc.with_ymd_and_hms(2026, 3, 5, 9, 30, 0).unwrap(),
            attempt_count: 0,
            submitted_count: 0,
            average_score: None,
        }
    }

    #[test]
    fn test_body_branches() {
        let mut state = initial_state();
        assert_eq!(ResultsBody::from_state(&state), ResultsBody::Loading);

        state = Lifecycle::new(ListState::new());
        assert_eq!(ResultsBody::from_state(&state), ResultsBody::Empty);

        state = Lifecycle::new(ListState::from(vec![quiz("a"), quiz("b")]));
        match ResultsBody::from_state(&state) {
            ResultsBody::Grid(cards) => assert_eq!(cards.len(), 2),
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn test_card_labels() {
        let mut q = quiz("x");
        assert_eq!(q.average_score_label(), "0%");
        assert_eq!(q.duration_label(), "30 MINS");
        assert_eq!(q.created_label(), "Mar 5");

        q.average_score = Some(66.666);
        q.duration = Some(45);
        assert_eq!(q.average_score_label(), "66.7%");
        assert_eq!(q.duration_label(), "45 MINS");
        assert_eq!(q.results_route(), Route::QuizResults("x".to_string()));
    }
}
