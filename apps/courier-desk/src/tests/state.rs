// Unit tests for the state actor

use crate::state::{AppState, StateCommand};

use models::{GeoPoint, Quote, QuoteBreakdown, TripLegs, TripPoints, TripResult};
use quote_core::QuoteEngine;
use quote_core::QuoteOutcome;
use quote_core::pricing::QuoteSummary;

fn outcome(total: &str) -> QuoteOutcome {
    let point = GeoPoint::new(40.8, -91.1, "Office");
    QuoteOutcome {
        quote: Quote {
            total_amount: 40.0,
            miles: 10.0,
            billable_wait_minutes: 0.0,
            breakdown: QuoteBreakdown {
                base_amount: 20.0,
                distance_amount: 20.0,
                wait_amount: 0.0,
            },
        },
        trip: TripResult::new(
            TripLegs {
                office_to_pickup: 4000.0,
                pickup_to_drop: 8093.44,
                drop_to_office: 4000.0,
            },
            TripPoints {
                office: point.clone(),
                pickup: point.clone(),
                drop: point,
            },
        ),
        summary: QuoteSummary {
            total: total.to_string(),
            distance: String::from("10.0 mi"),
            breakdown: Vec::new(),
        },
    }
}

fn app_state() -> AppState {
    AppState::new(std::env::temp_dir(), QuoteEngine::with_client(reqwest::Client::new()))
}

async fn current_total(state: &AppState) -> Option<String> {
    state.get_quote().await.map(|q| q.summary.total)
}

/// **VALUE**: Verifies a fresh state has no quote.
#[tokio::test]
async fn given_new_state_when_read_then_no_quote() {
    assert!(app_state().get_quote().await.is_none());
}

/// **VALUE**: Verifies each update is visible as soon as `update` returns.
///
/// **WHY THIS MATTERS**: The booking command reads the session quote right after the
/// quote command stored it. No yield or sleep happens in between.
///
/// **BUG THIS CATCHES**: Would catch `update` returning once the command is queued rather
/// than applied, which refuses a booking made straight after a quote.
#[tokio::test]
async fn given_update_returned_when_read_then_command_already_applied() {
    // GIVEN
    let state = app_state();

    // WHEN / THEN
    state
        .update(StateCommand::SetQuote(Box::new(outcome("$40.00"))))
        .await
        .expect("actor alive");
    assert_eq!(current_total(&state).await.as_deref(), Some("$40.00"));

    state
        .update(StateCommand::SetQuote(Box::new(outcome("$47.50"))))
        .await
        .expect("actor alive");
    assert_eq!(current_total(&state).await.as_deref(), Some("$47.50"));

    state.update(StateCommand::ClearQuote).await.expect("actor alive");
    assert_eq!(current_total(&state).await, None);
}

/// **VALUE**: Verifies clones share one session.
#[tokio::test]
async fn given_cloned_state_when_updated_then_both_see_quote() {
    let state = app_state();
    let clone = state.clone();

    clone
        .update(StateCommand::SetQuote(Box::new(outcome("$40.00"))))
        .await
        .expect("actor alive");

    assert_eq!(current_total(&state).await.as_deref(), Some("$40.00"));
}
