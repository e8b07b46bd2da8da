//! HTTP service for submitting an application to the analysis webhook.
//!
//! One multipart POST per submission: the four form fields plus the
//! resume blob under the `resume` field. Multipart is the single
//! canonical encoding — the file is never base64-wrapped in JSON.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{File, FormData};

use crate::config::SUBMIT_TIMEOUT_MS;
use crate::types::{AnalysisReport, AppError, AppResult, ApplicantForm};

/// Send the form fields and resume to the webhook and decode the
/// response.
///
/// The request races a hard deadline ([`SUBMIT_TIMEOUT_MS`]); expiry
/// counts as a network failure. Success requires an OK status and a
/// JSON body — a response we cannot read is never reported as a
/// success. The body is decoded as an untyped JSON value and handed to
/// [`AnalysisReport::from_value`], which never fails: an unfamiliar
/// shape becomes `Unrecognized`, not an error.
pub async fn submit_application(
    form: &ApplicantForm,
    resume: &File,
    webhook_url: &str,
) -> AppResult<AnalysisReport> {
    let payload = FormData::new()
        .map_err(|e| AppError::Network(format!("failed to create FormData: {:?}", e)))?;

    payload
        .append_with_str("name", &form.name)
        .map_err(|e| AppError::Network(format!("failed to append field: {:?}", e)))?;
    payload
        .append_with_str("email", &form.email)
        .map_err(|e| AppError::Network(format!("failed to append field: {:?}", e)))?;
    payload
        .append_with_str("role", &form.role)
        .map_err(|e| AppError::Network(format!("failed to append field: {:?}", e)))?;
    payload
        .append_with_str("skills", &form.skills)
        .map_err(|e| AppError::Network(format!("failed to append field: {:?}", e)))?;
    payload
        .append_with_blob("resume", resume)
        .map_err(|e| AppError::Network(format!("failed to append resume: {:?}", e)))?;

    let request = Request::post(webhook_url)
        .body(payload)
        .map_err(|e| AppError::Network(format!("failed to build request: {}", e)))?;

    let send = request.send();
    let deadline = TimeoutFuture::new(SUBMIT_TIMEOUT_MS);
    pin_mut!(send);
    pin_mut!(deadline);

    let response = match select(send, deadline).await {
        Either::Left((result, _)) => {
            result.map_err(|e| AppError::Network(format!("request failed: {}", e)))?
        }
        Either::Right(_) => {
            return Err(AppError::Network(format!(
                "no response within {} s",
                SUBMIT_TIMEOUT_MS / 1000
            )))
        }
    };

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(AppError::Network(format!(
            "server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::Decode(format!("response was not JSON: {}", e)))?;

    Ok(AnalysisReport::from_value(body))
}

#[cfg(test)]
mod tests {
    use crate::types::AnalysisReport;
    use serde_json::json;

    #[test]
    fn test_decode_scored_response() {
        let report = AnalysisReport::from_value(json!({
            "score": 72,
            "missing_keywords": ["Python"]
        }));

        match report {
            AnalysisReport::Scored {
                score,
                summary,
                matched_keywords,
                missing_keywords,
                suggestions,
            } => {
                assert_eq!(score, 72.0);
                assert_eq!(summary, None);
                assert!(matched_keywords.is_empty());
                assert_eq!(missing_keywords, vec!["Python".to_string()]);
                assert!(suggestions.is_empty());
            }
            other => panic!("expected Scored, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_alternate_score_keys() {
        for key in ["score", "ats_score", "match_percentage"] {
            let mut object = serde_json::Map::new();
            object.insert(key.to_string(), json!(55.5));

            let report = AnalysisReport::from_value(serde_json::Value::Object(object));
            assert!(
                matches!(report, AnalysisReport::Scored { score, .. } if score == 55.5),
                "key {} not recognised",
                key
            );
        }
    }

    #[test]
    fn test_decode_clamps_out_of_range_scores() {
        let report = AnalysisReport::from_value(json!({"score": 140}));
        assert!(matches!(report, AnalysisReport::Scored { score, .. } if score == 100.0));

        let report = AnalysisReport::from_value(json!({"score": -3}));
        assert!(matches!(report, AnalysisReport::Scored { score, .. } if score == 0.0));
    }

    #[test]
    fn test_decode_feedback_as_summary() {
        let report = AnalysisReport::from_value(json!({
            "ats_score": 61,
            "feedback": "Add more measurable results."
        }));
        assert!(matches!(
            report,
            AnalysisReport::Scored { summary: Some(s), .. }
                if s == "Add more measurable results."
        ));
    }

    #[test]
    fn test_decode_unknown_shape_falls_back_to_raw() {
        let value = json!({"status": "queued", "job": 17});
        let report = AnalysisReport::from_value(value.clone());
        assert_eq!(report, AnalysisReport::Unrecognized { raw: value });
    }

    #[test]
    fn test_decode_tolerates_non_string_list_entries() {
        let report = AnalysisReport::from_value(json!({
            "score": 80,
            "suggestions": ["Quantify impact", 42, null]
        }));
        assert!(matches!(
            report,
            AnalysisReport::Scored { suggestions, .. }
                if suggestions == vec!["Quantify impact".to_string()]
        ));
    }
}
