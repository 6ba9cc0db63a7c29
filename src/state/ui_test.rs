use super::*;

#[test]
fn ui_state_default_shows_sources() {
    let state = UiState::default();
    assert!(state.show_sources);
}
