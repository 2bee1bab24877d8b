//! Horizontal bars for the named security metrics of a phishing report.

use leptos::prelude::*;

use crate::net::types::MetricPoint;

/// Security metrics rendered as labeled score bars.
#[component]
pub fn MetricChart(data: Vec<MetricPoint>) -> impl IntoView {
    view! {
        <div class="metric-chart">
            {data
                .into_iter()
                .map(|m| {
                    let width = format!("{}%", m.value.min(100));
                    let label = format!("{}%", m.value);
                    view! {
                        <div class="metric-chart__row" title=m.description>
                            <span class="metric-chart__name">{m.name}</span>
                            <div class="metric-chart__track">
                                <div class="metric-chart__bar" style:width=width></div>
                            </div>
                            <span class="metric-chart__value">{label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
