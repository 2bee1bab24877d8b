//! Dark mode toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Button flipping between light and dark themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle title="Toggle dark mode">
            {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
        </button>
    }
}
