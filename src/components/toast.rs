//! Toast notification host and the `notify` helper the pages call.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen before auto-dismissal.
pub const DISMISS_AFTER_MS: u64 = 4000;

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let id = toasts
        .try_update(|t| t.push(kind, message.into()))
        .unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS)).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed overlay rendering the active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .iter()
                    .map(|t| {
                        let id = t.id;
                        let message = t.message.clone();
                        let is_error = t.kind == ToastKind::Error;
                        view! {
                            <div class="toast" class:toast--error=is_error>
                                <span class="toast__message">{message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|s| s.dismiss(id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
