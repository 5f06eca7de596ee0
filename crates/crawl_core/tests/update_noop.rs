use crawl_core::{update, MonitorState, Msg};

#[test]
fn update_is_noop() {
    let state = MonitorState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
