//! Under Review: 審査待ち候補者の一覧

use crate::api::HttpScoringService;
use crate::browser::{BrowserNavigator, BrowserSelectionStore};
use crate::components::progress_bar::ProgressBar;
use crate::components::toast::Toaster;
use crate::config::app_config;
use compass_common::{
    load_review_queue, pending_badge, select_for_review, Notification, Notifier, ReviewRow,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 行キー（バックエンドのidと位置由来のidが衝突しうるため位置も含める）
fn row_key(index: usize, row: &ReviewRow) -> (usize, String) {
    (index, row.id.clone())
}

#[component]
pub fn UnderReview() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let config = app_config();
    let store = StoredValue::new(BrowserSelectionStore::new(config.selection_key.clone()));

    let rows = RwSignal::new(Vec::<ReviewRow>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        let service = HttpScoringService::new(config);
        let today = chrono::Local::now().date_naive();
        let selection = store.get_value();
        rows.set(load_review_queue(&service, &selection, today).await);
        set_loading.set(false);
    });

    let on_review = move |row: ReviewRow| {
        let result = store.with_value(|s| select_for_review(&row, s, &BrowserNavigator));
        if result.is_err() {
            toaster.notify(Notification::destructive(
                "Review Unavailable",
                "The selected candidate could not be saved in this browser.",
            ));
        }
    };

    view! {
        <div class="page under-review">
            <header class="page-header">
                <h1>"Under Review"</h1>
                <span class="badge pending">{move || pending_badge(rows.with(Vec::len))}</span>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="text-muted">"Loading candidates..."</p> }
            >
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="text-muted">"No candidates awaiting review."</p> }
                >
                    <div class="card candidate-list">
                        <For
                            each=move || rows.get().into_iter().enumerate()
                            key=|(index, row)| row_key(*index, row)
                            children=move |(_, row)| {
                                let percentage = row.score * 100.0 / f64::from(row.max_score);
                                let selected = row.clone();
                                view! {
                                    <div class="candidate-row">
                                        <div class="candidate-main">
                                            <p class="candidate-name">{row.name.clone()}</p>
                                            <p class="text-muted">{row.role.clone()}</p>
                                        </div>
                                        <div class="candidate-score">
                                            <span>{format!("{}/{}", row.score, row.max_score)}</span>
                                            <ProgressBar percentage=percentage />
                                        </div>
                                        <span class="upload-date">{row.upload_date.clone()}</span>
                                        <span class=format!("status-badge {}", row.status.as_str())>
                                            {row.status.label()}
                                        </span>
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| on_review(selected.clone())
                                        >
                                            "Review"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
