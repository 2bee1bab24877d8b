//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, document_analysis::DocumentAnalysisPage,
    fake_detection::FakeDetectionPage, landing::LandingPage, login::LoginPage,
    not_found::NotFoundPage, phishing_detection::PhishingDetectionPage, profile::ProfilePage,
    signup::SignUpPage,
};
use crate::state::{
    auth::AuthState, chat::ChatState, document::DocumentState, fake::FakeState,
    phishing::PhishingState, toast::ToastState, ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let document = RwSignal::new(DocumentState::default());
    let chat = RwSignal::new(ChatState::default());
    let phishing = RwSignal::new(PhishingState::default());
    let fake = RwSignal::new(FakeState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(document);
    provide_context(chat);
    provide_context(phishing);
    provide_context(fake);

    // Apply the persisted dark-mode preference once on startup.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/secureai-client.css"/>
        <Title text="SecureAI"/>

        <crate::components::toast::ToastHost/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("fake-detection") view=FakeDetectionPage/>
                <Route path=StaticSegment("phishing-detection") view=PhishingDetectionPage/>
                <Route path=StaticSegment("document-analysis") view=DocumentAnalysisPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
