use crate::{Effect, MonitorPhase, MonitorState, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every `ArmTimer` is preceded by a `DisarmTimer`, so a runtime that executes the
/// effects in order never holds two live timers. Messages from a superseded session
/// (see [`MonitorState::is_stale`]) are dropped without effects.
pub fn update(mut state: MonitorState, msg: Msg) -> (MonitorState, Vec<Effect>) {
    if state.is_stale(&msg) {
        return (state, Vec::new());
    }
    let effects = match msg {
        Msg::StartRequested(request) => {
            if let Err(err) = request.validate() {
                state.reject_request(err.to_string());
                return (state, Vec::new());
            }
            let (generation, was_armed) = state.begin_submit();
            let mut effects = Vec::with_capacity(2);
            if was_armed {
                effects.push(Effect::DisarmTimer);
            }
            effects.push(Effect::Submit {
                generation,
                request,
            });
            effects
        }
        Msg::SubmitSucceeded { .. } => {
            if state.phase() != MonitorPhase::Submitting {
                return (state, Vec::new());
            }
            track(&mut state)
        }
        Msg::SubmitFailed { message, .. } => {
            if state.phase() != MonitorPhase::Submitting {
                return (state, Vec::new());
            }
            state.fail_submit(&message);
            Vec::new()
        }
        Msg::TrackRequested => track(&mut state),
        Msg::PollTick { generation } => {
            if state.phase() != MonitorPhase::Polling || state.is_poll_in_flight() {
                return (state, Vec::new());
            }
            state.begin_poll();
            vec![Effect::Poll { generation }]
        }
        Msg::PollSucceeded { report, .. } => {
            if state.phase() != MonitorPhase::Polling {
                return (state, Vec::new());
            }
            if state.apply_report(report) {
                vec![Effect::DisarmTimer]
            } else {
                Vec::new()
            }
        }
        Msg::PollFailed { message, .. } => {
            if state.phase() != MonitorPhase::Polling {
                return (state, Vec::new());
            }
            state.fail_poll(&message);
            vec![Effect::DisarmTimer]
        }
        Msg::CancelRequested => {
            if state.cancel() {
                vec![Effect::DisarmTimer]
            } else {
                Vec::new()
            }
        }
        Msg::ResetRequested => {
            if state.reset() {
                vec![Effect::DisarmTimer]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn track(state: &mut MonitorState) -> Vec<Effect> {
    let generation = state.begin_tracking();
    vec![
        Effect::DisarmTimer,
        Effect::ArmTimer {
            generation,
            interval: state.poll_interval(),
        },
    ]
}
