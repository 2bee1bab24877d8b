#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: dark mode and the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
}
