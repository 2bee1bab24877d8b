//! Reusable card component for the dashboard service list.

use leptos::prelude::*;

/// A card linking to one of the analysis services.
#[component]
pub fn ServiceCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
    button_text: &'static str,
) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-card__header">
                <h2 class="service-card__title">{title}</h2>
                <p class="service-card__description">{description}</p>
            </div>
            <div class="service-card__actions">
                <a class="btn btn--primary" href=href>
                    {button_text}
                </a>
            </div>
        </div>
    }
}
