//! Phishing-detection page: URL check against the prediction endpoint.

use leptos::prelude::*;

use crate::components::connection_chart::ConnectionChart;
use crate::components::layout::MainLayout;
use crate::components::metric_chart::MetricChart;
use crate::components::toast::notify;
use crate::net::api::normalize_url;
use crate::net::types::AnalysisRequest;
use crate::state::analysis::AnalysisPhase;
use crate::state::phishing::PhishingState;
use crate::state::toast::{ToastKind, ToastState};

/// Phishing detection page — URL input plus connection and metric charts
/// for the returned report.
#[component]
pub fn PhishingDetectionPage() -> impl IntoView {
    let phishing = expect_context::<RwSignal<PhishingState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let checking = move || phishing.get().lifecycle.phase == AnalysisPhase::InFlight;

    let do_check = move || {
        if checking() {
            return;
        }
        let raw = phishing.get().url;
        if raw.trim().is_empty() {
            notify(toasts, ToastKind::Error, "Please enter a URL to analyze");
            return;
        }
        let normalized = match normalize_url(&raw) {
            Ok(url) => url,
            Err(err) => {
                leptos::logging::warn!("rejected URL {raw:?}: {err}");
                notify(toasts, ToastKind::Error, "Please enter a valid URL");
                return;
            }
        };
        let request = AnalysisRequest::Url(normalized);

        let token = phishing
            .try_update(PhishingState::begin_check)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::check_url(&request).await {
                    Ok(report) => phishing.update(|p| {
                        p.apply_report(token, report);
                    }),
                    Err(err) => {
                        leptos::logging::error!("phishing check failed: {err}");
                        let was_current = phishing
                            .try_update(|p| p.fail_check(token))
                            .unwrap_or(false);
                        if was_current {
                            notify(toasts, ToastKind::Error, "Failed to analyze the URL");
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

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            do_check();
        }
    };

    view! {
        <MainLayout>
            <div class="phishing-page">
                <header class="phishing-page__header">
                    <h1>"Phishing Website Detection"</h1>
                    <p class="phishing-page__subtitle">
                        "Check if a website is legitimate or a phishing attempt by analyzing \
                         its connections."
                    </p>
                </header>

                <div class="phishing-page__grid">
                    <div class="phishing-page__left">
                        <div class="card">
                            <div class="card__header">
                                <h2 class="card__title">"Website URL"</h2>
                                <p class="card__description">
                                    "Enter the URL of the website you want to check"
                                </p>
                            </div>
                            <div class="card__content phishing-page__input-row">
                                <input
                                    class="phishing-page__url-input"
                                    type="text"
                                    placeholder="https://example.com"
                                    prop:value=move || phishing.get().url
                                    on:input=move |ev| {
                                        phishing.update(|p| p.url = event_target_value(&ev));
                                    }
                                    on:keydown=on_keydown
                                />
                                <button
                                    class="btn btn--primary"
                                    disabled=checking
                                    on:click=move |_| do_check()
                                >
                                    {move || if checking() { "Analyzing..." } else { "Analyze" }}
                                </button>
                            </div>
                        </div>

                        <div class="card phishing-page__how">
                            <div class="card__header">
                                <h2 class="card__title">"How It Works"</h2>
                            </div>
                            <div class="card__content">
                                <ul class="phishing-page__how-list">
                                    <li>"We analyze the website's network of connections"</li>
                                    <li>"Our AI checks each connected site for suspicious patterns"</li>
                                    <li>"Connection scores are combined into an overall risk score"</li>
                                    <li>"You get a clear verdict with supporting evidence"</li>
                                </ul>
                            </div>
                        </div>
                    </div>

                    <div class="phishing-page__right">
                        {move || {
                            let state = phishing.get();
                            if state.lifecycle.phase == AnalysisPhase::InFlight {
                                view! {
                                    <div class="card phishing-page__progress">
                                        <div class="spinner"></div>
                                        <p>"Analyzing website connections..."</p>
                                    </div>
                                }
                                    .into_any()
                            } else if let Some(report) = state.report {
                                let banner_class = if report.is_phishing {
                                    "phishing-page__verdict phishing-page__verdict--danger"
                                } else {
                                    "phishing-page__verdict phishing-page__verdict--safe"
                                };
                                let heading = if report.is_phishing {
                                    "Potential Phishing Detected"
                                } else {
                                    "Website Appears Safe"
                                };
                                view! {
                                    <div class="card phishing-page__report">
                                        <div class=banner_class>
                                            <h2>{heading}</h2>
                                            <p>{report.details.clone()}</p>
                                        </div>
                                        <div class="phishing-page__stats">
                                            <div class="phishing-page__stat">
                                                <span class="phishing-page__stat-value">
                                                    {report.score} "%"
                                                </span>
                                                <span class="phishing-page__stat-label">"Risk Score"</span>
                                            </div>
                                            <div class="phishing-page__stat">
                                                <span class="phishing-page__stat-value">
                                                    {report.connected_sites}
                                                </span>
                                                <span class="phishing-page__stat-label">"Connected Sites"</span>
                                            </div>
                                            <div class="phishing-page__stat">
                                                <span class="phishing-page__stat-value">
                                                    {report.phishing_sites}
                                                </span>
                                                <span class="phishing-page__stat-label">
                                                    "Suspicious Connections"
                                                </span>
                                            </div>
                                        </div>
                                        <h3>"Connected Sites"</h3>
                                        <ConnectionChart data=report.connection_data/>
                                        <h3>"Security Metrics"</h3>
                                        <MetricChart data=report.chart_data/>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card phishing-page__empty">
                                        <h2>"No Analysis Yet"</h2>
                                        <p>
                                            "Enter a website URL and click Analyze to check for \
                                             phishing indicators."
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </MainLayout>
    }
}
