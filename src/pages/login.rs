//! Login page posting credentials to the auth endpoint.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast::notify;
use crate::net::types::{Credentials, User};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};

/// Login page. A failed sign-in stays on the page with an error toast;
/// success is never simulated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }

        let credentials = Credentials {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            notify(toasts, ToastKind::Error, "Please enter your email and password");
            return;
        }

        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&credentials).await {
                    Ok(()) => {
                        let name = credentials
                            .email
                            .split('@')
                            .next()
                            .unwrap_or(credentials.email.as_str())
                            .to_owned();
                        auth.update(|a| {
                            a.sign_in(User {
                                name,
                                email: credentials.email.clone(),
                            });
                        });
                        notify(toasts, ToastKind::Success, "Login successful!");
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::error!("login failed: {err}");
                        notify(toasts, ToastKind::Error, "Invalid email or password");
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &navigate);
            loading.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__corner">
                <ThemeToggle/>
            </div>
            <div class="card auth-card">
                <div class="card__header">
                    <h1 class="card__title">"Welcome back"</h1>
                    <p class="card__description">
                        "Enter your credentials to access your account"
                    </p>
                </div>
                <form class="auth-card__form" on:submit=on_submit>
                    <label class="auth-card__label">
                        "Email"
                        <input
                            class="auth-card__input"
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary auth-card__submit"
                        type="submit"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
