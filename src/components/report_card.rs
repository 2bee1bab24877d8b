//! Document summary card with collapsible detail sections.

use leptos::prelude::*;

use crate::net::types::DocumentReport;

/// Rendered result of a completed document analysis.
#[component]
pub fn DocumentReportCard(report: DocumentReport) -> impl IntoView {
    view! {
        <div class="card report-card">
            <div class="card__header">
                <h2 class="card__title">"Document Summary"</h2>
                <p class="card__description">
                    "AI-generated summary of the key document contents"
                </p>
            </div>
            <div class="card__content">
                <p class="report-card__summary">{report.summary}</p>
                <CollapsibleSection title="Key Points" items=report.key_points/>
                <CollapsibleSection title="Recommendations" items=report.recommendations/>
                <CollapsibleSection title="Risk Areas" items=report.risk_areas/>
            </div>
        </div>
    }
}

/// One titled bullet-list section with a show/hide toggle.
#[component]
fn CollapsibleSection(title: &'static str, items: Vec<String>) -> impl IntoView {
    let open = RwSignal::new(true);

    view! {
        <section class="report-card__section">
            <div class="report-card__section-header">
                <h3 class="report-card__section-title">{title}</h3>
                <button
                    class="report-card__toggle"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "\u{2212}" } else { "+" }}
                </button>
            </div>
            {move || {
                open.get().then(|| {
                    view! {
                        <ul class="report-card__list">
                            {items
                                .iter()
                                .map(|item| view! { <li>{item.clone()}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                })
            }}
        </section>
    }
}
