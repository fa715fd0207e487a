//! Approved: 承認済み候補者（固定データ）

use crate::browser::BrowserNavigator;
use compass_common::{approved_badge, approved_candidates, Navigator, Route};
use leptos::prelude::*;

#[component]
pub fn Approved() -> impl IntoView {
    let candidates = approved_candidates();
    let badge = approved_badge(candidates.len());

    view! {
        <div class="page approved">
            <header class="page-header">
                <h1>"Approved"</h1>
                <span class="badge approved">{badge}</span>
            </header>
            <div class="card candidate-list">
                {candidates
                    .into_iter()
                    .map(|c| {
                        let hm_class = if c.sent_to_hm { "hm-status sent" } else { "hm-status pending" };
                        view! {
                            <div class="candidate-row">
                                <div class="candidate-main">
                                    <p class="candidate-name">{c.name}</p>
                                    <p class="text-muted">{c.role}</p>
                                </div>
                                <span class="candidate-score">{c.score_label()}</span>
                                <span class="upload-date">{c.approved_date}</span>
                                <span class=hm_class>{c.hm_status_label()}</span>
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| BrowserNavigator.navigate(Route::Evaluation)
                                >
                                    "View"
                                </button>
                                // 送付APIは未提供
                                <button class="btn btn-primary" type="button" disabled={!c.can_send_to_hm()}>
                                    "Send to HM"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
