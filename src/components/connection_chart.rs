//! Bar chart of sites connected to the checked URL, colored by status.

use leptos::prelude::*;

use crate::net::types::ConnectionDatum;

/// Connection graph rendered as one risk-score bar per connected site.
#[component]
pub fn ConnectionChart(data: Vec<ConnectionDatum>) -> impl IntoView {
    view! {
        <div class="connection-chart">
            {data
                .into_iter()
                .map(|d| {
                    let height = format!("{}%", d.score.min(100));
                    let bar_class = format!(
                        "connection-chart__bar connection-chart__bar--{}",
                        d.status.css_modifier()
                    );
                    let title = format!("{}: {}% risk", d.url, d.score);
                    view! {
                        <div class="connection-chart__column" title=title>
                            <div class="connection-chart__track">
                                <div class=bar_class style:height=height></div>
                            </div>
                            <span class="connection-chart__label">{d.url}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
