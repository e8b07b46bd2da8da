//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-badge">"✨ ATS Resume Checker"</div>
            <h1>"ATS Resume Checker"</h1>
            <p class="subtitle">
                "Check your resume's ATS compatibility. "
                "Get instant feedback and improve your chances of getting noticed."
            </p>
        </div>
    }
}
