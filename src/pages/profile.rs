//! Profile page showing the signed-in user's details.

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};

/// Read-only view of the current account. There is no profile endpoint,
/// so the update button only acknowledges the click.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_update = move |_| {
        notify(toasts, ToastKind::Success, "Profile updated");
    };

    view! {
        <MainLayout>
            <div class="profile-page">
                <header class="profile-page__header">
                    <h1>"Your Profile"</h1>
                    <p class="profile-page__subtitle">"Manage your personal information"</p>
                </header>

                <div class="card profile-card">
                    <div class="card__header profile-card__identity">
                        <span class="profile-card__avatar">
                            {move || auth.get().initials()}
                        </span>
                        <h2 class="card__title">{move || auth.get().display_name()}</h2>
                    </div>
                    <div class="card__content">
                        <label class="profile-card__label">
                            "Full Name"
                            <input
                                class="profile-card__input"
                                type="text"
                                readonly
                                prop:value=move || auth.get().display_name()
                            />
                        </label>
                        <label class="profile-card__label">
                            "Email"
                            <input
                                class="profile-card__input"
                                type="email"
                                readonly
                                prop:value=move || auth.get().email()
                            />
                        </label>
                    </div>
                    <div class="card__footer profile-card__actions">
                        <button class="btn btn--primary" on:click=on_update>
                            "Update Profile"
                        </button>
                    </div>
                </div>
            </div>
        </MainLayout>
    }
}
