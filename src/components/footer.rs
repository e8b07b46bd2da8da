//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="features">
                <span class="feature">"⚡ Instant Processing"</span>
                <span class="feature">"🛡️ Secure & Private"</span>
                <span class="feature">"✨ AI-Powered Analysis"</span>
            </div>
            <div class="footer-note">
                "Trusted by " <span class="footer-strong">"10,000+"</span> " professionals worldwide"
            </div>
        </footer>
    }
}
