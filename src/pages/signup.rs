//! Signup page with client-side confirmation check and a mocked registration.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::notify;
use crate::state::toast::{ToastKind, ToastState};

/// Account creation page. Registration has no endpoint yet; the mocked
/// call succeeds after the auth latency and redirects to login.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }

        if password.get() != confirm.get() {
            notify(toasts, ToastKind::Error, "Passwords do not match");
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            notify(toasts, ToastKind::Error, "Please fill in all fields");
            return;
        }

        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&name_value, &email_value, &password_value).await {
                    Ok(()) => {
                        notify(toasts, ToastKind::Success, "Account created successfully!");
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::error!("registration failed: {err}");
                        notify(toasts, ToastKind::Error, "Failed to create account");
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value, &navigate);
            loading.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="card__header">
                    <h1 class="card__title">"Create an account"</h1>
                    <p class="card__description">"Enter your details to create your account"</p>
                </div>
                <form class="auth-card__form" on:submit=on_submit>
                    <label class="auth-card__label">
                        "Full Name"
                        <input
                            class="auth-card__input"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                    <label class="auth-card__label">
                        "Confirm Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary auth-card__submit"
                        type="submit"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
