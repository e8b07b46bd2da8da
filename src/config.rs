//! Application configuration.
//!
//! Centralized configuration for the ATS checker frontend.
//! The webhook endpoint can be overridden at deploy time by setting
//! `window.ATS_WEBHOOK_URL` before the WASM bundle loads; everything
//! else is a compile-time constant.

/// Default analysis webhook endpoint.
///
/// The externally hosted automation that performs the actual ATS
/// scoring. Overridable via `window.ATS_WEBHOOK_URL`.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://yeswanthvuddagiri.app.n8n.cloud/webhook-test/ats-resume";

/// MIME types accepted for the resume upload.
///
/// PDF, legacy Word, modern Word. Everything else is rejected
/// client-side before any network activity.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Maximum resume size for upload (in bytes).
///
/// 10 MB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Cadence of the simulated upload progress timer (milliseconds).
pub const PROGRESS_TICK_MS: u32 = 130;

/// Per-tick progress increment bounds (inclusive).
pub const PROGRESS_STEP_MIN: u8 = 10;
pub const PROGRESS_STEP_MAX: u8 = 30;

/// Hard deadline for the webhook request (milliseconds).
///
/// Expiry is treated as a transport failure.
pub const SUBMIT_TIMEOUT_MS: u32 = 30_000;

/// How long a toast notice stays on screen (milliseconds).
pub const NOTICE_TTL_MS: u32 = 4_000;

/// Resolve the webhook endpoint for this page load.
///
/// Reads the optional `window.ATS_WEBHOOK_URL` global, falling back to
/// [`DEFAULT_WEBHOOK_URL`]. Keeping the endpoint injectable lets a
/// deployment (or a test page) point at its own webhook without a
/// rebuild.
pub fn webhook_url() -> String {
    web_sys::window()
        .and_then(|w| {
            js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str("ATS_WEBHOOK_URL")).ok()
        })
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string())
}
