//! Resume upload component with drag & drop support.
//!
//! Owns the drop zone, the simulated progress animation, the reset
//! button and the submit trigger. All transitions go through the
//! [`UploadState`] machine; this component only wires browser events
//! and timers to it.

use leptos::*;
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::notices::push_notice;
use crate::config::{webhook_url, PROGRESS_STEP_MAX, PROGRESS_STEP_MIN, PROGRESS_TICK_MS};
use crate::services::submit_application;
use crate::state::{Phase, UploadState};
use crate::types::{ApplicantForm, Notice, NoticeLevel};

#[component]
pub fn UploadZone(
    state: ReadSignal<UploadState>,
    set_state: WriteSignal<UploadState>,
    resume_file: ReadSignal<Option<File>>,
    set_resume_file: WriteSignal<Option<File>>,
    form: ReadSignal<ApplicantForm>,
    set_notices: WriteSignal<Vec<Notice>>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);

    // Validate and accept a candidate file, then drive the simulated
    // progress animation. The percentage is a fixed-cadence cosmetic
    // timer, not a transfer measurement: the actual bytes only move in
    // the submit service.
    let accept_file = move |file: File| {
        let name = file.name();
        let mime = file.type_();
        let size = file.size() as u64;

        let mut outcome = None;
        set_state.update(|s| outcome = Some(s.select_file(&name, &mime, size)));

        match outcome {
            Some(Ok(cycle)) => {
                log::info!("📄 Accepted resume: {} ({})", name, mime);
                set_resume_file.set(Some(file));
                set_state.update(|s| s.begin_progress());

                spawn_local(async move {
                    loop {
                        gloo_timers::future::TimeoutFuture::new(PROGRESS_TICK_MS).await;
                        let step =
                            rand::thread_rng().gen_range(PROGRESS_STEP_MIN..=PROGRESS_STEP_MAX);
                        let mut keep_going = false;
                        set_state.update(|s| keep_going = s.tick(cycle, step));
                        if !keep_going {
                            break;
                        }
                    }
                });
            }
            Some(Err(e)) => {
                log::warn!("Rejected file {}: {}", name, e);
                push_notice(set_notices, NoticeLevel::Error, &e.to_string());
            }
            None => {}
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            if let Some(file) = files.get(0) {
                accept_file(file);
            }
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                accept_file(file);
            }
        }
        // Clear the input so re-selecting the same file fires again.
        input.set_value("");
    };

    // Clicking anywhere on the zone opens the file picker.
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    // Preconditions are checked independently so the user knows which
    // one to fix. begin_submit refuses a second trigger while a
    // request is out, and the button is disabled as well.
    let on_submit = move |_| {
        let Some(file) = resume_file.get_untracked() else {
            push_notice(set_notices, NoticeLevel::Error, "Upload a resume first");
            return;
        };
        if !form.with_untracked(|f| f.is_valid()) {
            push_notice(
                set_notices,
                NoticeLevel::Error,
                "Fill in your name, email, target role and skills",
            );
            return;
        }

        let mut cycle = None;
        set_state.update(|s| cycle = s.begin_submit());
        let Some(cycle) = cycle else {
            return;
        };

        let form_snapshot = form.get_untracked();
        let url = webhook_url();
        log::info!("📤 Submitting application to analysis webhook...");

        spawn_local(async move {
            match submit_application(&form_snapshot, &file, &url).await {
                Ok(report) => {
                    let mut applied = false;
                    set_state.update(|s| applied = s.complete(cycle, report));
                    if applied {
                        push_notice(set_notices, NoticeLevel::Success, "ATS analysis complete!");
                    } else {
                        log::warn!("Discarded response for stale cycle {}", cycle);
                    }
                }
                Err(e) => {
                    log::error!("❌ Submission failed: {}", e);
                    let mut applied = false;
                    set_state.update(|s| applied = s.fail(cycle));
                    if applied {
                        push_notice(
                            set_notices,
                            NoticeLevel::Error,
                            "Submission failed, please try again",
                        );
                    }
                }
            }
        });
    };

    let on_reset = move |_| {
        log::info!("🔄 Upload reset");
        set_state.update(|s| s.reset());
        set_resume_file.set(None);
    };

    view! {
        // Drop zone, shown while no file is selected.
        <Show
            when=move || state.with(|s| s.file.is_none())
            fallback=|| view! { }
        >
            <div
                class="upload-zone"
                class:dragging=move || is_dragging.get()
                id="uploadZone"
                on:click=trigger_file_input
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_is_dragging.set(true);
                }
                on:dragleave=move |_| set_is_dragging.set(false)
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drag & drop your resume here"</div>
                <div class="upload-hint">"or click to select · PDF, DOC, DOCX up to 10 MB"</div>
                <input
                    type="file"
                    id="fileInput"
                    accept=".pdf,.doc,.docx"
                    style="display:none"
                    // Programmatic clicks bubble back to the zone's
                    // click handler; stop them here.
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_file_change
                />
            </div>
        </Show>

        // File card with progress and submit, once a file is accepted.
        <Show
            when=move || state.with(|s| s.file.is_some())
            fallback=|| view! { }
        >
            <div class="file-card" id="fileCard">
                <div class="file-row">
                    <span class="file-icon">"📄"</span>
                    <span class="file-name">
                        {move || state.with(|s| {
                            s.file.as_ref().map(|f| f.name.clone()).unwrap_or_default()
                        })}
                    </span>
                    <span class="file-size">
                        {move || state.with(|s| {
                            s.file.as_ref().map(|f| format_size(f.size)).unwrap_or_default()
                        })}
                    </span>
                    <button class="btn btn-secondary" id="resetBtn" on:click=on_reset>
                        "✕"
                    </button>
                </div>

                <Show
                    when=move || state.with(|s| s.phase == Phase::ProgressSimulating)
                    fallback=|| view! { }
                >
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            style:width=move || format!("{}%", state.with(|s| s.progress))
                        ></div>
                    </div>
                    <div class="progress-label">
                        "Uploading... " {move || state.with(|s| s.progress)} "%"
                    </div>
                </Show>

                <Show
                    when=move || state.with(|s| {
                        matches!(s.phase, Phase::ReadyToSubmit | Phase::Submitting)
                    })
                    fallback=|| view! { }
                >
                    <button
                        class="btn btn-primary"
                        id="submitBtn"
                        disabled=move || {
                            !state.with(|s| s.can_submit(form.with(|f| f.is_valid())))
                        }
                        on:click=on_submit
                    >
                        {move || if state.with(|s| s.phase == Phase::Submitting) {
                            "⏳ Checking ATS..."
                        } else {
                            "Check ATS Score"
                        }}
                    </button>
                </Show>
            </div>
        </Show>
    }
}

/// Human-readable file size for the file card.
fn format_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
