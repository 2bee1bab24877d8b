//! Dashboard page listing the three analysis services.

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::components::service_card::ServiceCard;
use crate::state::auth::AuthState;

/// Dashboard page — greeting plus a card per service.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || format!("Welcome back, {}!", auth.get().display_name());

    view! {
        <MainLayout>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{greeting}</h1>
                    <p class="dashboard-page__subtitle">
                        "Access our suite of AI-powered security and analysis tools."
                    </p>
                </header>

                <div class="dashboard-page__grid">
                    <ServiceCard
                        title="Fake Detection"
                        description="Detect fake content in images and text"
                        href="/fake-detection"
                        button_text="Get Started"
                    />
                    <ServiceCard
                        title="Phishing Detection"
                        description="Analyze websites for phishing attempts"
                        href="/phishing-detection"
                        button_text="Check Websites"
                    />
                    <ServiceCard
                        title="Legal Document Analysis"
                        description="Analyze and summarize legal documents"
                        href="/document-analysis"
                        button_text="Analyze Documents"
                    />
                </div>

                <div class="dashboard-page__promo">
                    <h2>"Enhance your security"</h2>
                    <p>
                        "Our AI-powered platform helps you detect threats and analyze documents \
                         with ease. Protect yourself from fake content, phishing attempts, and \
                         understand legal documents better."
                    </p>
                    <div class="dashboard-page__promo-actions">
                        <button class="btn btn--primary">"Explore Premium Plans"</button>
                        <button class="btn">"Learn More"</button>
                    </div>
                </div>
            </div>
        </MainLayout>
    }
}
