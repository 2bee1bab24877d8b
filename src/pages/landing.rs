//! Public landing page with hero, how-it-works, and signup call to action.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Marketing page shown to signed-out visitors.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__header">
                <div class="landing-page__brand">
                    <span class="navbar__logo">"S"</span>
                    <span class="navbar__name">"SecureAI"</span>
                </div>
                <div class="landing-page__header-actions">
                    <ThemeToggle/>
                    <a class="btn" href="/login">"Log in"</a>
                    <a class="btn btn--primary" href="/signup">"Sign up"</a>
                </div>
            </header>

            <section class="landing-page__hero">
                <div class="landing-page__hero-copy">
                    <h1>
                        "Secure Your Digital Experience with "
                        <span class="landing-page__accent">"AI-Powered"</span>
                        " Analysis"
                    </h1>
                    <p>
                        "Our platform uses cutting-edge artificial intelligence to protect you \
                         from fake content, phishing attempts, and simplify complex legal \
                         documents."
                    </p>
                    <div class="landing-page__hero-actions">
                        <a class="btn btn--primary" href="/signup">"Get Started"</a>
                        <a class="btn" href="/login">"Sign In"</a>
                    </div>
                </div>
                <div class="landing-page__hero-panel">
                    <FeatureTile
                        title="Fake Content Detection"
                        blurb="Detect manipulated images and misleading text"
                    />
                    <FeatureTile
                        title="Phishing Protection"
                        blurb="Identify dangerous websites and protect your data"
                    />
                    <FeatureTile
                        title="Legal Document Analysis"
                        blurb="Understand complex legal documents with AI summaries"
                    />
                </div>
            </section>

            <section class="landing-page__steps">
                <h2>"How It Works"</h2>
                <p class="landing-page__steps-intro">
                    "Our platform leverages advanced AI to provide you with reliable security \
                     and analysis tools"
                </p>
                <div class="landing-page__steps-grid">
                    <StepCard
                        number="1"
                        title="Upload Content"
                        blurb="Upload images, paste text, or provide website URLs for our AI to analyze"
                    />
                    <StepCard
                        number="2"
                        title="AI Analysis"
                        blurb="Our advanced algorithms analyze the content for security threats or complexity"
                    />
                    <StepCard
                        number="3"
                        title="Get Results"
                        blurb="Receive detailed reports, risk assessments, and actionable insights"
                    />
                </div>
            </section>

            <section class="landing-page__cta">
                <h2>"Ready to Get Started?"</h2>
                <p>
                    "Join thousands of users who trust our platform to protect their digital \
                     experiences and simplify complex information."
                </p>
                <a class="btn btn--primary" href="/signup">"Create Your Account"</a>
            </section>

            <footer class="landing-page__footer">
                <span>"\u{a9} 2025 SecureAI. All rights reserved."</span>
            </footer>
        </div>
    }
}

/// One highlighted capability in the hero panel.
#[component]
fn FeatureTile(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="landing-page__tile">
            <h3>{title}</h3>
            <p>{blurb}</p>
        </div>
    }
}

/// One numbered step in the how-it-works section.
#[component]
fn StepCard(number: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="landing-page__step">
            <span class="landing-page__step-number">{number}</span>
            <h3>{title}</h3>
            <p>{blurb}</p>
        </div>
    }
}
