//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Form Types** - Applicant form data
//! - **File Types** - Metadata for the selected resume
//! - **Report Types** - Decoded webhook response
//! - **Notice Types** - Transient toast notifications
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::config::{ACCEPTED_MIME_TYPES, MAX_FILE_SIZE};

// =============================================================================
// Form Types
// =============================================================================

/// The four applicant fields sent alongside the resume.
///
/// Mutated on every keystroke; considered valid only when every field
/// is non-blank. Email format is deliberately not checked here — the
/// webhook owns any deeper validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicantForm {
    /// Applicant full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Target role / job title
    pub role: String,
    /// Comma-separated skills
    pub skills: String,
}

impl ApplicantForm {
    /// All four fields filled in (whitespace-only counts as empty).
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.role.trim().is_empty()
            && !self.skills.trim().is_empty()
    }
}

// =============================================================================
// File Types
// =============================================================================

/// Metadata captured from the selected resume file.
///
/// The `web_sys::File` handle itself lives in a separate signal so the
/// state machine stays free of browser types.
#[derive(Clone, Debug, PartialEq)]
pub struct ResumeMeta {
    /// File name as reported by the browser
    pub name: String,
    /// Declared MIME type
    pub mime: String,
    /// Size in bytes
    pub size: u64,
}

impl ResumeMeta {
    /// Check the declared MIME type against the fixed allow-list.
    pub fn is_accepted_type(mime: &str) -> bool {
        ACCEPTED_MIME_TYPES.contains(&mime)
    }

    /// Check the byte size against the upload limit.
    pub fn is_accepted_size(size: u64) -> bool {
        size <= MAX_FILE_SIZE
    }
}

// =============================================================================
// Report Types
// =============================================================================

/// Decoded webhook response.
///
/// The webhook's JSON shape is structurally loose, so the decision of
/// what the payload means is made exactly once, here, at the response
/// boundary. Downstream rendering matches exhaustively instead of
/// probing optional fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnalysisReport {
    /// A recognised scored analysis.
    Scored {
        /// ATS score, clamped to 0–100
        score: f64,
        /// Free-text summary, when the webhook sent one
        summary: Option<String>,
        /// Keywords the resume already covers
        matched_keywords: Vec<String>,
        /// Keywords the resume is missing
        missing_keywords: Vec<String>,
        /// Improvement suggestions
        suggestions: Vec<String>,
    },
    /// No score key found; keep the raw payload for a dump display.
    Unrecognized {
        /// The payload exactly as received
        raw: Value,
    },
}

impl AnalysisReport {
    /// Decode an arbitrary JSON value.
    ///
    /// The score is taken from the first present of `score`,
    /// `ats_score`, `match_percentage`; the summary from `summary` or
    /// `feedback`. Keyword and suggestion lists default to empty. A
    /// payload with no score key at all becomes [`Unrecognized`],
    /// never an error.
    ///
    /// [`Unrecognized`]: AnalysisReport::Unrecognized
    pub fn from_value(raw: Value) -> Self {
        let score = ["score", "ats_score", "match_percentage"]
            .iter()
            .find_map(|key| raw.get(key).and_then(Value::as_f64));

        match score {
            Some(score) => AnalysisReport::Scored {
                score: score.clamp(0.0, 100.0),
                summary: ["summary", "feedback"]
                    .iter()
                    .find_map(|key| raw.get(key).and_then(Value::as_str))
                    .map(str::to_string),
                matched_keywords: string_list(&raw, "matched_keywords"),
                missing_keywords: string_list(&raw, "missing_keywords"),
                suggestions: string_list(&raw, "suggestions"),
            },
            None => AnalysisReport::Unrecognized { raw },
        }
    }

    /// Qualitative label for a score, used next to the score figure.
    pub fn score_label(score: f64) -> &'static str {
        if score >= 80.0 {
            "Excellent match"
        } else if score >= 60.0 {
            "Good match"
        } else if score >= 40.0 {
            "Fair match"
        } else {
            "Needs work"
        }
    }
}

/// Pull a sequence of strings out of `raw[key]`, tolerating absence
/// and non-string entries.
fn string_list(raw: &Value, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Notice Types
// =============================================================================

/// Severity of a toast notice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice-info",
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Error => "notice-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
        }
    }
}

/// A transient toast notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Unique id, used to expire this notice and nothing else
    pub id: u64,
    /// Severity level
    pub level: NoticeLevel,
    /// Message shown to the user
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant is user-recoverable: re-select a file, complete the
/// form, or re-trigger the submission.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Unsupported or oversized resume file.
    InvalidFile(String),
    /// Submission attempted without a file or with blank fields.
    IncompleteForm(String),
    /// Network failure, timeout, or non-2xx response.
    Network(String),
    /// Response body was not valid JSON.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidFile(msg) => write!(f, "Invalid file: {}", msg),
            AppError::IncompleteForm(msg) => write!(f, "Incomplete form: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_validity_requires_all_fields() {
        let mut form = ApplicantForm::default();
        assert!(!form.is_valid());

        form.name = "Ada Lovelace".to_string();
        form.email = "ada@example.com".to_string();
        form.role = "Backend Engineer".to_string();
        assert!(!form.is_valid());

        form.skills = "Rust, SQL".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_form_whitespace_only_is_blank() {
        let form = ApplicantForm {
            name: "Ada".to_string(),
            email: "   ".to_string(),
            role: "Engineer".to_string(),
            skills: "Rust".to_string(),
        };
        assert!(!form.is_valid());
    }

    #[test]
    fn test_accepted_mime_types() {
        assert!(ResumeMeta::is_accepted_type("application/pdf"));
        assert!(ResumeMeta::is_accepted_type("application/msword"));
        assert!(ResumeMeta::is_accepted_type(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(!ResumeMeta::is_accepted_type("image/png"));
        assert!(!ResumeMeta::is_accepted_type("text/plain"));
        assert!(!ResumeMeta::is_accepted_type(""));
    }

    #[test]
    fn test_score_label_boundaries() {
        assert_eq!(AnalysisReport::score_label(100.0), "Excellent match");
        assert_eq!(AnalysisReport::score_label(80.0), "Excellent match");
        assert_eq!(AnalysisReport::score_label(79.9), "Good match");
        assert_eq!(AnalysisReport::score_label(60.0), "Good match");
        assert_eq!(AnalysisReport::score_label(40.0), "Fair match");
        assert_eq!(AnalysisReport::score_label(0.0), "Needs work");
    }
}
