//! Page chrome wrapping the authenticated pages: navbar, content, footer.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Main layout for the service pages.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__main">{children()}</main>
            <footer class="layout__footer">
                <p>"\u{a9} 2025 SecureAI. All rights reserved."</p>
                <div class="layout__footer-links">
                    <a href="#">"Terms"</a>
                    <a href="#">"Privacy"</a>
                    <a href="#">"Contact"</a>
                </div>
            </footer>
        </div>
    }
}
