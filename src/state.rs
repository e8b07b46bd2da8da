//! Per-cycle upload state machine.
//!
//! One upload cycle runs `Empty → FileSelected → ProgressSimulating →
//! ReadyToSubmit → Submitting → ResultReceived`, with a failed
//! submission dropping back to `ReadyToSubmit` (file and form kept for
//! retry) and a manual reset returning to `Empty` from anywhere.
//!
//! The struct is deliberately free of browser types and signals so the
//! transitions can be unit-tested on the host target. Components hold
//! it in a signal and call the transition methods inside `update`.
//!
//! Every cycle carries a monotonically increasing id; timer ticks and
//! request completions are tagged with the id they started under, and
//! anything tagged with a stale id is ignored. That is what "cancels"
//! an old progress timer or orphans an in-flight request when the user
//! resets or swaps the file mid-flight.

use crate::types::{AnalysisReport, AppError, ResumeMeta};

/// Where the current upload cycle stands.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Phase {
    /// No file selected.
    #[default]
    Empty,
    /// File accepted, progress animation not yet started.
    FileSelected,
    /// Simulated progress timer running.
    ProgressSimulating,
    /// Progress reached 100; submission is allowed.
    ReadyToSubmit,
    /// Exactly one webhook request in flight.
    Submitting,
    /// Webhook responded; report available.
    ResultReceived,
}

/// The whole per-cycle state: phase, file metadata, progress counter,
/// cycle id, and the decoded report once one arrives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub phase: Phase,
    pub file: Option<ResumeMeta>,
    /// Simulated completion percentage, 0..=100. Cosmetic only — not a
    /// measurement of bytes transferred.
    pub progress: u8,
    /// Current cycle id. Only ever increases, including across resets.
    pub cycle: u64,
    pub report: Option<AnalysisReport>,
}

impl UploadState {
    /// Accept a candidate file, starting a new cycle.
    ///
    /// Rejects unsupported MIME types and oversized files without
    /// touching the current state, so a bad drop leaves the slot
    /// exactly as it was. On success returns the new cycle id for
    /// tagging the progress timer.
    pub fn select_file(&mut self, name: &str, mime: &str, size: u64) -> Result<u64, AppError> {
        if !ResumeMeta::is_accepted_type(mime) {
            return Err(AppError::InvalidFile(
                "only PDF, DOC and DOCX resumes are accepted".to_string(),
            ));
        }
        if !ResumeMeta::is_accepted_size(size) {
            return Err(AppError::InvalidFile(format!(
                "file is too large ({} bytes)",
                size
            )));
        }

        self.cycle += 1;
        self.phase = Phase::FileSelected;
        self.file = Some(ResumeMeta {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
        });
        self.progress = 0;
        self.report = None;
        Ok(self.cycle)
    }

    /// Mark the progress animation as started.
    pub fn begin_progress(&mut self) {
        if self.phase == Phase::FileSelected {
            self.phase = Phase::ProgressSimulating;
        }
    }

    /// Advance the simulated progress counter by `step`.
    ///
    /// Returns `true` while the timer should keep ticking. A stale
    /// cycle id or a phase other than `ProgressSimulating` stops the
    /// caller's loop without touching the counter. The counter is
    /// clamped so it finishes at exactly 100, at which point the phase
    /// flips to `ReadyToSubmit`.
    pub fn tick(&mut self, cycle: u64, step: u8) -> bool {
        if cycle != self.cycle || self.phase != Phase::ProgressSimulating {
            return false;
        }
        self.progress = self.progress.saturating_add(step).min(100);
        if self.progress >= 100 {
            self.phase = Phase::ReadyToSubmit;
            return false;
        }
        true
    }

    /// Whether the submit trigger should be enabled.
    ///
    /// Requires a present file, finished progress, a valid form, and
    /// no request already in flight — all four, independently.
    pub fn can_submit(&self, form_valid: bool) -> bool {
        self.phase == Phase::ReadyToSubmit && self.file.is_some() && form_valid
    }

    /// Enter the in-flight state.
    ///
    /// Only legal from `ReadyToSubmit`; returns the cycle id to tag
    /// the request with, or `None` when a request is already out (the
    /// at-most-one-in-flight policy).
    pub fn begin_submit(&mut self) -> Option<u64> {
        if self.phase != Phase::ReadyToSubmit {
            return None;
        }
        self.phase = Phase::Submitting;
        Some(self.cycle)
    }

    /// Apply a successful response.
    ///
    /// Ignored (returns `false`) when the response belongs to an older
    /// cycle or arrives outside `Submitting` — a late response must
    /// never be applied to a newer cycle.
    pub fn complete(&mut self, cycle: u64, report: AnalysisReport) -> bool {
        if cycle != self.cycle || self.phase != Phase::Submitting {
            return false;
        }
        self.phase = Phase::ResultReceived;
        self.report = Some(report);
        true
    }

    /// Apply a failed submission: back to `ReadyToSubmit`, file and
    /// progress untouched so the user can retry without re-uploading.
    ///
    /// Returns `false` for stale cycles, same as [`complete`].
    ///
    /// [`complete`]: UploadState::complete
    pub fn fail(&mut self, cycle: u64) -> bool {
        if cycle != self.cycle || self.phase != Phase::Submitting {
            return false;
        }
        self.phase = Phase::ReadyToSubmit;
        true
    }

    /// Clear everything and return to `Empty`. Idempotent, legal from
    /// any state. The cycle id keeps increasing so stale timers and
    /// responses stay orphaned.
    pub fn reset(&mut self) {
        let cycle = self.cycle + 1;
        *self = UploadState {
            cycle,
            ..UploadState::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn accepted(state: &mut UploadState) -> u64 {
        let cycle = state
            .select_file("resume.pdf", "application/pdf", 24_000)
            .unwrap();
        state.begin_progress();
        cycle
    }

    fn drive_to_ready(state: &mut UploadState) -> u64 {
        let cycle = accepted(state);
        while state.tick(cycle, 17) {}
        cycle
    }

    #[test]
    fn test_rejected_mime_leaves_slot_empty() {
        let mut state = UploadState::default();
        let err = state.select_file("cat.png", "image/png", 1_000);
        assert!(matches!(err, Err(AppError::InvalidFile(_))));
        assert_eq!(state.phase, Phase::Empty);
        assert!(state.file.is_none());
        assert_eq!(state.cycle, 0);
    }

    #[test]
    fn test_rejected_oversize_leaves_slot_empty() {
        let mut state = UploadState::default();
        let err = state.select_file("big.pdf", "application/pdf", 11 * 1024 * 1024);
        assert!(matches!(err, Err(AppError::InvalidFile(_))));
        assert!(state.file.is_none());
    }

    #[test]
    fn test_progress_is_monotonic_and_finishes_at_exactly_100() {
        let mut state = UploadState::default();
        let cycle = accepted(&mut state);

        let mut last = 0;
        loop {
            let keep_going = state.tick(cycle, 30);
            assert!(state.progress >= last, "progress went backwards");
            assert!(state.progress <= 100, "progress overshot 100");
            last = state.progress;
            if !keep_going {
                break;
            }
            // Complete flag must not be set before 100.
            assert_ne!(state.phase, Phase::ReadyToSubmit);
        }

        assert_eq!(state.progress, 100);
        assert_eq!(state.phase, Phase::ReadyToSubmit);
    }

    #[test]
    fn test_stale_cycle_tick_is_ignored() {
        let mut state = UploadState::default();
        let old_cycle = accepted(&mut state);

        // User swaps the file: new cycle starts.
        let new_cycle = accepted(&mut state);
        assert!(new_cycle > old_cycle);

        assert!(!state.tick(old_cycle, 30));
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_submit_gating() {
        let mut state = UploadState::default();
        assert!(!state.can_submit(true)); // no file

        let cycle = accepted(&mut state);
        assert!(!state.can_submit(true)); // progress not finished

        while state.tick(cycle, 25) {}
        assert!(!state.can_submit(false)); // form incomplete
        assert!(state.can_submit(true));

        state.begin_submit().unwrap();
        assert!(!state.can_submit(true)); // already sending
    }

    #[test]
    fn test_at_most_one_submission_in_flight() {
        let mut state = UploadState::default();
        drive_to_ready(&mut state);

        assert!(state.begin_submit().is_some());
        // Second trigger while the first is in flight: refused.
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_result_applied_for_current_cycle() {
        let mut state = UploadState::default();
        drive_to_ready(&mut state);
        let cycle = state.begin_submit().unwrap();

        let report = AnalysisReport::from_value(json!({"score": 72}));
        assert!(state.complete(cycle, report.clone()));
        assert_eq!(state.phase, Phase::ResultReceived);
        assert_eq!(state.report, Some(report));
    }

    #[test]
    fn test_late_response_never_applies_to_newer_cycle() {
        let mut state = UploadState::default();
        drive_to_ready(&mut state);
        let old_cycle = state.begin_submit().unwrap();

        // Reset while the request is still out.
        state.reset();

        let report = AnalysisReport::from_value(json!({"score": 99}));
        assert!(!state.complete(old_cycle, report));
        assert!(!state.fail(old_cycle));
        assert_eq!(state.phase, Phase::Empty);
        assert!(state.report.is_none());
    }

    #[test]
    fn test_failed_submission_returns_to_ready_with_file_kept() {
        let mut state = UploadState::default();
        drive_to_ready(&mut state);
        let cycle = state.begin_submit().unwrap();

        assert!(state.fail(cycle));
        assert_eq!(state.phase, Phase::ReadyToSubmit);
        assert!(state.file.is_some());
        assert_eq!(state.progress, 100);
        // And the user can retry.
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_reset_clears_everything_from_any_state() {
        let mut state = UploadState::default();
        drive_to_ready(&mut state);
        let cycle = state.begin_submit().unwrap();
        state.complete(cycle, AnalysisReport::from_value(json!({"score": 50})));

        state.reset();
        assert_eq!(state.phase, Phase::Empty);
        assert!(state.file.is_none());
        assert_eq!(state.progress, 0);
        assert!(state.report.is_none());

        // Idempotent.
        let cycle_after_first = state.cycle;
        state.reset();
        assert_eq!(state.phase, Phase::Empty);
        assert!(state.cycle > cycle_after_first);
    }
}
