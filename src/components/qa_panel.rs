//! Q&A assistant panel for follow-up questions about the analyzed document.

use leptos::prelude::*;

use crate::components::toast::notify;
use crate::net::types::AnalysisRequest;
use crate::state::chat::{ChatState, Role};
use crate::state::document::DocumentState;
use crate::state::toast::{ToastKind, ToastState};

/// Chat panel showing the transcript and a question input.
///
/// The input stays disabled until a document analysis has completed, and
/// while an answer is outstanding — at most one question is ever in flight.
#[component]
pub fn QaPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let document = expect_context::<RwSignal<DocumentState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the transcript pinned to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let has_report = move || document.get().report.is_some();
    let disabled = move || !has_report() || chat.get().asking;

    let do_ask = move || {
        let text = input.get();
        let question = text.trim();
        if question.is_empty() || disabled() {
            return;
        }
        let question = question.to_owned();

        // Optimistic append, then one request; the answer lands on response.
        chat.update(|c| {
            c.push_question(question.clone());
        });
        input.set(String::new());

        let request = AnalysisRequest::Question(question);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::ask_question(&request).await {
                    Ok(answer) => chat.update(|c| {
                        c.push_answer(answer);
                    }),
                    Err(err) => {
                        leptos::logging::error!("question failed: {err}");
                        chat.update(ChatState::abort_question);
                        notify(toasts, ToastKind::Error, "Failed to get an answer");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let on_click = move |_| do_ask();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_ask();
        }
    };

    let placeholder = move || {
        if has_report() {
            "Ask a question about the document..."
        } else {
            "Upload a document first to ask questions"
        }
    };

    view! {
        <div class="qa-panel">
            <div class="qa-panel__header">
                <h2 class="qa-panel__title">"Q&A Assistant"</h2>
                <p class="qa-panel__description">
                    "Ask questions about the document and get AI-powered answers"
                </p>
            </div>

            <div class="qa-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let content = msg.content.clone();
                            let is_user = msg.role == Role::User;
                            view! {
                                <div class="qa-panel__message" class:qa-panel__message--user=is_user>
                                    <div class="qa-panel__bubble">{content}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    chat.get().asking.then(|| {
                        view! {
                            <div class="qa-panel__message">
                                <div class="qa-panel__bubble qa-panel__bubble--typing">
                                    <span class="qa-panel__dot"></span>
                                    <span class="qa-panel__dot"></span>
                                    <span class="qa-panel__dot"></span>
                                </div>
                            </div>
                        }
                    })
                }}
            </div>

            <div class="qa-panel__input-row">
                <input
                    class="qa-panel__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    disabled=disabled
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary qa-panel__send"
                    disabled=move || disabled() || input.get().trim().is_empty()
                    on:click=on_click
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
