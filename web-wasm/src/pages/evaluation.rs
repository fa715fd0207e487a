//! Evaluation: スコア内訳とレジュメ
//!
//! 選択中候補者が保存されていない場合は読み込み中表示のまま。

use crate::browser::BrowserSelectionStore;
use crate::components::resume_viewer::ResumeViewer;
use crate::components::score_breakdown::ScoreBreakdownCard;
use crate::config::app_config;
use compass_common::{load_evaluation, Candidate, Evaluation};
use leptos::prelude::*;

fn insight(title: &'static str, class: &'static str, text: Option<String>) -> Option<impl IntoView> {
    text.map(|text| {
        view! {
            <div class=format!("insight {}", class)>
                <h3>{title}</h3>
                <p>{text}</p>
            </div>
        }
    })
}

#[component]
fn CandidateSummary(candidate: Candidate, role: String) -> impl IntoView {
    let Candidate { name, email, contact_no, strengths, weaknesses, suggestions, .. } = candidate;

    view! {
        <section class="card candidate-summary">
            <div class="summary-head">
                <div>
                    <h1 class="candidate-name">{name}</h1>
                    <p class="text-muted">{role}</p>
                </div>
                <span class="badge active">"Active Candidate"</span>
            </div>
            <dl class="contact">
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Contact"</dt>
                <dd>{contact_no}</dd>
            </dl>
            <div class="insights">
                {insight("Strengths", "strengths", strengths)}
                {insight("Weaknesses", "weaknesses", weaknesses)}
                {insight("Suggestions", "suggestions", suggestions)}
            </div>
        </section>
    }
}

#[component]
pub fn EvaluationPage() -> impl IntoView {
    let store = BrowserSelectionStore::new(app_config().selection_key);

    match load_evaluation(&store) {
        Some(Evaluation { selection, breakdown, resume }) => view! {
            <div class="page evaluation">
                <div class="evaluation-column">
                    <CandidateSummary candidate=selection.candidate role=selection.role />
                    <ScoreBreakdownCard breakdown=breakdown />
                </div>
                <div class="evaluation-column">
                    <ResumeViewer document=resume />
                </div>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="page evaluation loading">
                <p class="text-muted">"Loading candidate data..."</p>
            </div>
        }
        .into_any(),
    }
}
