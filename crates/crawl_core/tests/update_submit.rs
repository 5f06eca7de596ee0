use std::sync::Once;
use std::time::Duration;

use crawl_core::{
    update, CrawlRequest, CrawlStatus, Effect, MonitorPhase, MonitorState, Msg, StatusReport,
};
use pretty_assertions::assert_eq;

const INTERVAL: Duration = Duration::from_millis(2000);

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(crawl_logging::initialize_for_tests);
}

fn example_request() -> CrawlRequest {
    CrawlRequest {
        start_url: "https://example.com".to_string(),
        max_pages: 5,
        num_threads: 2,
        max_depth: 1,
    }
}

#[test]
fn invalid_request_sets_error_and_emits_nothing() {
    init_logging();
    let request = CrawlRequest {
        start_url: String::new(),
        max_pages: 10,
        num_threads: 1,
        max_depth: 1,
    };

    let (mut state, effects) = update(MonitorState::new(), Msg::StartRequested(request));

    assert!(effects.is_empty());
    assert_eq!(
        state.status(),
        &CrawlStatus::Error("Please enter a valid URL.".into())
    );
    assert_eq!(state.phase(), MonitorPhase::Idle);
    assert!(!state.is_timer_armed());
    assert!(state.consume_dirty());
}

#[test]
fn valid_request_shows_starting_and_emits_submit() {
    init_logging();
    let (mut state, effects) = update(
        MonitorState::new(),
        Msg::StartRequested(example_request()),
    );

    assert_eq!(
        effects,
        vec![Effect::Submit {
            generation: 1,
            request: example_request(),
        }]
    );
    assert_eq!(state.status(), &CrawlStatus::Starting);
    assert_eq!(state.status().to_string(), "Starting crawl...");
    assert_eq!(state.phase(), MonitorPhase::Submitting);
    assert!(state.results().is_empty());
    assert!(!state.is_timer_armed());
    assert!(state.consume_dirty());
}

#[test]
fn submit_success_arms_a_single_timer() {
    init_logging();
    let (state, _) = update(
        MonitorState::new(),
        Msg::StartRequested(example_request()),
    );
    let (state, effects) = update(
        state,
        Msg::SubmitSucceeded {
            generation: 1,
            message: "Crawling started for https://example.com".into(),
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::DisarmTimer,
            Effect::ArmTimer {
                generation: 2,
                interval: INTERVAL,
            },
        ]
    );
    assert_eq!(state.phase(), MonitorPhase::Polling);
    assert!(state.is_timer_armed());
    // Starting indicator stays until the first poll answers.
    assert_eq!(state.status(), &CrawlStatus::Starting);
}

#[test]
fn submit_failure_is_terminal_and_does_not_track() {
    init_logging();
    let (state, _) = update(
        MonitorState::new(),
        Msg::StartRequested(example_request()),
    );
    let (state, effects) = update(
        state,
        Msg::SubmitFailed {
            generation: 1,
            message: "connection refused".into(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.phase(), MonitorPhase::Errored);
    assert_eq!(
        state.status(),
        &CrawlStatus::Error("Error starting crawl: connection refused".into())
    );
    assert!(!state.is_timer_armed());
}

#[test]
fn submit_answer_after_cancel_is_dropped() {
    init_logging();
    let (state, _) = update(
        MonitorState::new(),
        Msg::StartRequested(example_request()),
    );
    let (mut state, effects) = update(state, Msg::CancelRequested);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), MonitorPhase::Idle);
    assert_eq!(state.status(), &CrawlStatus::Idle);
    assert!(state.consume_dirty());

    let before = state.clone();
    let (state, effects) = update(
        state,
        Msg::SubmitSucceeded {
            generation: 1,
            message: "late".into(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn restart_while_polling_disarms_before_submitting() {
    init_logging();
    let (state, _) = update(MonitorState::new(), Msg::TrackRequested);
    assert!(state.is_timer_armed());

    let (state, effects) = update(state, Msg::StartRequested(example_request()));
    assert_eq!(
        effects,
        vec![
            Effect::DisarmTimer,
            Effect::Submit {
                generation: 2,
                request: example_request(),
            },
        ]
    );
    assert!(!state.is_timer_armed());
}

#[test]
fn end_to_end_running_then_completed() {
    init_logging();
    let (state, _) = update(
        MonitorState::new(),
        Msg::StartRequested(example_request()),
    );
    let (state, _) = update(
        state,
        Msg::SubmitSucceeded {
            generation: 1,
            message: String::new(),
        },
    );
    let generation = state.generation();

    let (state, effects) = update(state, Msg::PollTick { generation });
    assert_eq!(effects, vec![Effect::Poll { generation }]);
    let (state, effects) = update(
        state,
        Msg::PollSucceeded {
            generation,
            report: StatusReport::new("Running"),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.status(), &CrawlStatus::Running("Running".into()));
    assert!(state.results().is_empty());

    let (state, effects) = update(state, Msg::PollTick { generation });
    assert_eq!(effects, vec![Effect::Poll { generation }]);
    let (state, effects) = update(
        state,
        Msg::PollSucceeded {
            generation,
            report: StatusReport::new("Completed")
                .with_results(["https://example.com", "https://example.com/about"]),
        },
    );
    assert_eq!(effects, vec![Effect::DisarmTimer]);
    assert_eq!(state.status(), &CrawlStatus::Completed);
    assert_eq!(
        state.results(),
        ["https://example.com", "https://example.com/about"]
    );

    let (_state, effects) = update(state, Msg::PollTick { generation });
    assert!(effects.is_empty());
}

#[test]
fn late_submit_answers_are_recognized_as_stale() {
    init_logging();
    let (state, _) = update(
        MonitorState::new(),
        Msg::StartRequested(example_request()),
    );
    let answer = Msg::SubmitFailed {
        generation: state.generation(),
        message: "connection refused".into(),
    };
    assert!(!state.is_stale(&answer));
    assert!(!state.is_stale(&Msg::CancelRequested));

    let (state, _) = update(state, Msg::CancelRequested);
    assert!(state.is_stale(&answer));
    assert!(!state.is_stale(&Msg::TrackRequested));

    let (state, effects) = update(state, answer);
    assert!(effects.is_empty());
    assert_eq!(state.status(), &CrawlStatus::Idle);
}
