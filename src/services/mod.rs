//! External communication.
//!
//! One service: [`submit`], the multipart POST carrying the applicant
//! form and the resume to the analysis webhook.

pub mod submit;

pub use submit::*;
