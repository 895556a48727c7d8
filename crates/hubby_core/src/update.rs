use crate::state::StatusMessage;
use crate::{parse_status_url, AlertKind, Effect, FormState, Msg, TimerKind};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited(text) => {
            state.set_url_text(text);
            Vec::new()
        }
        Msg::UrlPasted => {
            let delay = state.config().paste_settle;
            if delay.is_zero() {
                // The input event that follows the paste revalidates.
                return (state, Vec::new());
            }
            let (previous, timer) = state.arm_paste_timer();
            let mut effects = Vec::with_capacity(2);
            if let Some(previous) = previous {
                effects.push(Effect::CancelTimer { timer: previous });
            }
            effects.push(Effect::ScheduleTimer {
                timer,
                kind: TimerKind::PasteSettle,
                delay,
            });
            effects
        }
        Msg::PasteSettled { timer, text } => {
            if state.settle_paste_timer(timer) {
                state.set_url_text(text);
            }
            Vec::new()
        }
        Msg::CookieFileChanged(name) => {
            state.set_cookie_file(name);
            Vec::new()
        }
        Msg::SubmitRequested(text) => {
            state.set_url_text(text);
            match parse_status_url(state.url_text()) {
                Some(target) => {
                    state.begin_submission();
                    vec![Effect::AllowSubmission { target }]
                }
                None => {
                    state.end_submission();
                    let text = state.config().invalid_url_message.clone();
                    let mut effects = vec![Effect::PreventSubmission];
                    effects.extend(show_status(&mut state, text, AlertKind::Danger));
                    effects
                }
            }
        }
        Msg::ShowStatus { text, kind } => show_status(&mut state, text, kind),
        Msg::StatusExpired(timer) => {
            state.expire_status(timer);
            Vec::new()
        }
        Msg::PageRestored => {
            state.end_submission();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn show_status(state: &mut FormState, text: String, kind: AlertKind) -> Vec<Effect> {
    let delay = state.config().status_timeout;
    let (previous, timer) = state.replace_status(StatusMessage { text, kind });
    let mut effects = Vec::with_capacity(2);
    if let Some(previous) = previous {
        effects.push(Effect::CancelTimer { timer: previous });
    }
    effects.push(Effect::ScheduleTimer {
        timer,
        kind: TimerKind::StatusClear,
        delay,
    });
    effects
}
