//! ATS Resume Checker - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page frontend that collects an applicant form
//! and a resume file, forwards both to an externally hosted analysis
//! webhook, and renders whatever JSON the webhook sends back. All of
//! the actual ATS scoring happens outside this repository.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── ApplicantFormCard (name, email, role, skills)          │
//! │  ├── UploadZone (drag & drop, progress, submit)             │
//! │  └── ResultSection (when a report arrived)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NoticeStack (toasts) · Footer                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Webhook endpoint, limits, timer cadence
//! - [`types`] - Common types (ApplicantForm, AnalysisReport, etc.)
//! - [`state`] - The per-cycle upload state machine
//! - [`components`] - UI components
//! - [`services`] - Webhook submission

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// State machine
pub use state::{Phase, UploadState};

// Types
pub use types::{
    AnalysisReport, AppError, AppResult, ApplicantForm, Notice, NoticeLevel, ResumeMeta,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 ATS Resume Checker - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (state, set_state) = create_signal(UploadState::default());
    let (resume_file, set_resume_file) = create_signal(None::<File>);
    let (form, set_form) = create_signal(ApplicantForm::default());
    let (notices, set_notices) = create_signal(Vec::<Notice>::new());

    view! {
        <div class="container">
            <Hero/>

            <ApplicantFormCard form=form set_form=set_form/>

            <UploadZone
                state=state
                set_state=set_state
                resume_file=resume_file
                set_resume_file=set_resume_file
                form=form
                set_notices=set_notices
            />

            // Result section (appears once the webhook responded)
            <ResultSection state=state/>
        </div>

        <NoticeStack notices=notices/>
        <Footer/>
    }
}
