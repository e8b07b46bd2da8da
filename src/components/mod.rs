//! UI Components for the ATS checker application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Features line and page footer
//!
//! # Feature Components
//! - [`ApplicantFormCard`] - The four required applicant fields
//! - [`UploadZone`] - Resume drag & drop, progress, submit trigger
//! - [`ResultSection`] - Webhook result rendering
//! - [`NoticeStack`] - Transient toast notifications

mod applicant_form;
mod footer;
mod hero;
mod notices;
mod result;
mod upload;

pub use applicant_form::*;
pub use footer::*;
pub use hero::*;
pub use notices::*;
pub use result::*;
pub use upload::*;
