//! Sticky top navigation bar with brand, service links, and session actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Dashboard", "/dashboard"),
    ("Fake Detection", "/fake-detection"),
    ("Phishing Detection", "/phishing-detection"),
    ("Document Analysis", "/document-analysis"),
];

/// Navigation bar shown on the authenticated pages.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let location = use_location();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.update(AuthState::sign_out);
        notify(toasts, ToastKind::Success, "Logged out successfully");
        navigate("/login", NavigateOptions::default());
    };

    let on_menu = move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open);

    let pathname = location.pathname;
    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(title, path)| {
                let path = *path;
                view! {
                    <a
                        href=path
                        class="navbar__link"
                        class:navbar__link--active=move || pathname.get() == path
                        on:click=move |_| ui.update(|u| u.mobile_menu_open = false)
                    >
                        {*title}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="navbar">
            <a href="/dashboard" class="navbar__brand">
                <span class="navbar__logo">"S"</span>
                <span class="navbar__name">"SecureAI"</span>
            </a>

            <nav class="navbar__links">{links()}</nav>

            <div class="navbar__actions">
                <ThemeToggle/>
                <a href="/profile" class="navbar__user" title="Your profile">
                    {move || auth.get().display_name()}
                </a>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
                <button class="btn navbar__menu" on:click=on_menu title="Toggle menu">
                    "\u{2630}"
                </button>
            </div>

            {move || {
                ui.get().mobile_menu_open.then(|| {
                    view! {
                        <nav class="navbar__mobile">
                            {links()}
                            <a
                                href="/profile"
                                class="navbar__link"
                                on:click=move |_| ui.update(|u| u.mobile_menu_open = false)
                            >
                                "Profile"
                            </a>
                        </nav>
                    }
                })
            }}
        </header>
    }
}
