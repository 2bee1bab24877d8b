//! Fake-content detection page: paste text, get a verdict with signals.

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::components::toast::notify;
use crate::net::types::AnalysisRequest;
use crate::state::analysis::AnalysisPhase;
use crate::state::fake::FakeState;
use crate::state::toast::{ToastKind, ToastState};

/// Fake content detection page — free-form text in, verdict card out.
#[component]
pub fn FakeDetectionPage() -> impl IntoView {
    let fake = expect_context::<RwSignal<FakeState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let scanning = move || fake.get().lifecycle.phase == AnalysisPhase::InFlight;

    let on_scan = move |_| {
        if scanning() {
            return;
        }
        let request = AnalysisRequest::Text(fake.get().text);
        if request.is_empty() {
            notify(toasts, ToastKind::Error, "Please enter some text to analyze");
            return;
        }

        let token = fake.try_update(FakeState::begin_scan).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::scan_text(&request).await {
                    Ok(report) => fake.update(|f| {
                        f.apply_report(token, report);
                    }),
                    Err(err) => {
                        leptos::logging::error!("fake-content scan failed: {err}");
                        let was_current =
                            fake.try_update(|f| f.fail_scan(token)).unwrap_or(false);
                        if was_current {
                            notify(toasts, ToastKind::Error, "Failed to analyze the text");
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, token);
        }
    };

    view! {
        <MainLayout>
            <div class="fake-page">
                <header class="fake-page__header">
                    <h1>"Fake Content Detection"</h1>
                    <p class="fake-page__subtitle">
                        "Paste text to check for signs of manipulated or misleading content."
                    </p>
                </header>

                <div class="fake-page__grid">
                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Text to Analyze"</h2>
                            <p class="card__description">
                                "Paste an article, post, or message below"
                            </p>
                        </div>
                        <div class="card__content">
                            <textarea
                                class="fake-page__textarea"
                                rows="10"
                                placeholder="Paste the text you want to check..."
                                prop:value=move || fake.get().text
                                on:input=move |ev| {
                                    fake.update(|f| f.text = event_target_value(&ev));
                                }
                            ></textarea>
                        </div>
                        <div class="card__footer">
                            <button class="btn btn--primary" disabled=scanning on:click=on_scan>
                                {move || if scanning() { "Analyzing..." } else { "Analyze Text" }}
                            </button>
                        </div>
                    </div>

                    {move || {
                        scanning()
                            .then(|| {
                                view! {
                                    <div class="card fake-page__progress">
                                        <div class="spinner"></div>
                                        <p>"Scanning for fake-content markers..."</p>
                                    </div>
                                }
                            })
                    }}

                    {move || {
                        fake.get()
                            .report
                            .map(|report| {
                                let verdict_class = match report.verdict {
                                    crate::net::types::FakeVerdict::LikelyAuthentic => {
                                        "fake-page__verdict fake-page__verdict--safe"
                                    }
                                    crate::net::types::FakeVerdict::LikelyFake => {
                                        "fake-page__verdict fake-page__verdict--danger"
                                    }
                                };
                                view! {
                                    <div class="card fake-page__report">
                                        <div class=verdict_class>
                                            <h2>{report.verdict.label()}</h2>
                                            <p>
                                                {report.confidence} "% confidence"
                                            </p>
                                        </div>
                                        {report
                                            .signal_lines()
                                            .map_or_else(
                                                || {
                                                    view! {
                                                        <p class="fake-page__no-signals">
                                                            "No manipulation signals found."
                                                        </p>
                                                    }
                                                        .into_any()
                                                },
                                                |signals| {
                                                    view! {
                                                        <div class="fake-page__signal-section">
                                                            <h3>"Signals"</h3>
                                                            <ul class="fake-page__signals">
                                                                {signals
                                                                    .iter()
                                                                    .map(|signal| view! { <li>{signal.clone()}</li> })
                                                                    .collect::<Vec<_>>()}
                                                            </ul>
                                                        </div>
                                                    }
                                                        .into_any()
                                                },
                                            )}
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </MainLayout>
    }
}
