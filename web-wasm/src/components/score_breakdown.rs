//! スコア内訳カード

use crate::components::progress_bar::ProgressBar;
use compass_common::{format_percentage, BreakdownRow, ScoreBreakdown};
use leptos::prelude::*;

fn format_points(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

fn match_label(percentage: f64) -> String {
    format!("{} Match", format_percentage(percentage))
}

fn render_row(row: BreakdownRow) -> impl IntoView {
    let status = row.status;
    let percentage = row.percentage();

    view! {
        <div class=format!("breakdown-row {}", status.as_str())>
            <div class="breakdown-head">
                <span class="status-icon">{status.icon()}</span>
                <span class="breakdown-label">{row.label()}</span>
                <span class="breakdown-score">
                    {format!("{}/{}", format_points(row.score), row.max_points)}
                </span>
                <span class="breakdown-percentage">{format_percentage(percentage)}</span>
            </div>
            <ProgressBar percentage=percentage tone=status.as_str() />
            <span class="notes-badge">{row.notes}</span>
        </div>
    }
}

#[component]
pub fn ScoreBreakdownCard(breakdown: ScoreBreakdown) -> impl IntoView {
    let ScoreBreakdown { rows, total_score, total_max, overall_percentage } = breakdown;

    view! {
        <section class="card score-breakdown">
            <header class="card-header">
                <h2>"Score Breakdown"</h2>
            </header>
            <div class="overall-score">
                <div class="overall-numbers">
                    <span class="overall-total">
                        {format!("{}/{}", format_points(total_score), total_max)}
                    </span>
                    <span class="overall-percentage">{match_label(overall_percentage)}</span>
                </div>
                <ProgressBar percentage=overall_percentage />
            </div>
            <div class="breakdown-rows">
                {rows.into_iter().map(render_row).collect_view()}
            </div>
        </section>
    }
}
