//! Analysis result rendering.
//!
//! Matches exhaustively on [`AnalysisReport`]: a recognised scored
//! payload gets the score figure, label, summary and keyword lists
//! (each section only when non-empty); anything else gets a labelled
//! raw JSON dump. Absent keys can never crash the view.

use leptos::*;

use crate::state::UploadState;
use crate::types::AnalysisReport;

#[component]
pub fn ResultSection(state: ReadSignal<UploadState>) -> impl IntoView {
    let report = create_memo(move |_| state.with(|s| s.report.clone()));

    view! {
        <Show
            when=move || report.get().is_some()
            fallback=|| view! { }
        >
            {move || report.get().map(|report| match report {
                AnalysisReport::Scored {
                    score,
                    summary,
                    matched_keywords,
                    missing_keywords,
                    suggestions,
                } => view! {
                    <div class="result-section" id="resultSection">
                        <div class="result-score">
                            <span class="score-value">{score.round() as i64}</span>
                            <span class="score-total">"/ 100"</span>
                        </div>
                        <div class="score-label">{AnalysisReport::score_label(score)}</div>

                        {summary.map(|text| view! {
                            <p class="result-summary">{text}</p>
                        })}

                        <KeywordList title="Matched keywords" kind="matched" items=matched_keywords/>
                        <KeywordList title="Missing keywords" kind="missing" items=missing_keywords/>
                        <KeywordList title="Suggestions" kind="suggestions" items=suggestions/>
                    </div>
                }.into_view(),
                AnalysisReport::Unrecognized { raw } => {
                    let dump = serde_json::to_string_pretty(&raw)
                        .unwrap_or_else(|_| raw.to_string());
                    view! {
                        <div class="result-section" id="resultSection">
                            <div class="result-title">"Analysis response"</div>
                            <pre class="result-raw">{dump}</pre>
                        </div>
                    }.into_view()
                }
            })}
        </Show>
    }
}

/// One titled list of strings; renders nothing when the list is empty.
#[component]
fn KeywordList(
    title: &'static str,
    kind: &'static str,
    items: Vec<String>,
) -> impl IntoView {
    if items.is_empty() {
        return None;
    }

    Some(view! {
        <div class=format!("keyword-list {}", kind)>
            <div class="keyword-title">{title}</div>
            <ul>
                <For
                    each=move || items.clone().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, item)| view! { <li>{item}</li> }
                />
            </ul>
        </div>
    })
}
