use std::sync::Once;
use std::time::Duration;

use hubby_core::{
    update, AlertKind, Effect, FormConfig, FormState, Msg, StatusView, TimerId, TimerKind,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hubby_logging::initialize_for_tests);
}

fn show(state: FormState, text: &str, kind: AlertKind) -> (FormState, Vec<Effect>) {
    update(
        state,
        Msg::ShowStatus {
            text: text.to_string(),
            kind,
        },
    )
}

#[test]
fn show_status_arms_clear_timer() {
    init_logging();
    let (state, effects) = show(FormState::default(), "Saved", AlertKind::Success);

    assert_eq!(
        effects,
        vec![Effect::ScheduleTimer {
            timer: TimerId(1),
            kind: TimerKind::StatusClear,
            delay: Duration::from_secs(5),
        }]
    );
    assert_eq!(
        state.view().status,
        Some(StatusView {
            text: "Saved".to_string(),
            kind: AlertKind::Success,
        })
    );
}

#[test]
fn newer_message_cancels_older_timer() {
    init_logging();
    let (state, _) = show(FormState::default(), "first", AlertKind::Info);
    let (state, effects) = show(state, "second", AlertKind::Warning);

    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer { timer: TimerId(1) },
            Effect::ScheduleTimer {
                timer: TimerId(2),
                kind: TimerKind::StatusClear,
                delay: Duration::from_secs(5),
            },
        ]
    );
    assert_eq!(state.view().status.map(|s| s.text), Some("second".to_string()));
}

#[test]
fn stale_timer_does_not_clear_newer_message() {
    init_logging();
    let (state, _) = show(FormState::default(), "first", AlertKind::Info);
    let (state, _) = show(state, "second", AlertKind::Danger);

    let (mut state, _) = update(state, Msg::StatusExpired(TimerId(1)));
    assert_eq!(
        state.view().status,
        Some(StatusView {
            text: "second".to_string(),
            kind: AlertKind::Danger,
        })
    );
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::StatusExpired(TimerId(1)));
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::StatusExpired(TimerId(2)));
    assert_eq!(state.view().status, None);
}

#[test]
fn repeated_invalid_submissions_keep_one_message() {
    init_logging();
    let (state, _) = update(FormState::default(), Msg::SubmitRequested("bad".into()));
    let (state, effects) = update(state, Msg::SubmitRequested("bad".into()));

    assert_eq!(
        effects,
        vec![
            Effect::PreventSubmission,
            Effect::CancelTimer { timer: TimerId(1) },
            Effect::ScheduleTimer {
                timer: TimerId(2),
                kind: TimerKind::StatusClear,
                delay: Duration::from_secs(5),
            },
        ]
    );

    let (state, _) = update(state, Msg::StatusExpired(TimerId(1)));
    assert!(state.view().status.is_some());
}

#[test]
fn configured_timeout_and_message_are_used() {
    init_logging();
    let config = FormConfig {
        status_timeout: Duration::from_millis(1500),
        invalid_url_message: "Paste a post link".to_string(),
        ..FormConfig::default()
    };
    let (state, effects) = update(FormState::new(config), Msg::SubmitRequested(String::new()));

    assert_eq!(
        effects.last(),
        Some(&Effect::ScheduleTimer {
            timer: TimerId(1),
            kind: TimerKind::StatusClear,
            delay: Duration::from_millis(1500),
        })
    );
    assert_eq!(
        state.view().status.map(|s| s.text),
        Some("Paste a post link".to_string())
    );
}

#[test]
fn alert_kinds_map_to_bootstrap_classes() {
    assert_eq!(AlertKind::Danger.css_class(), "alert-danger");
    assert_eq!(AlertKind::Warning.css_class(), "alert-warning");
    assert_eq!(AlertKind::Info.css_class(), "alert-info");
    assert_eq!(AlertKind::Success.css_class(), "alert-success");
}
