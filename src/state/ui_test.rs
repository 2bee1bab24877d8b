use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_mobile_menu_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
}
