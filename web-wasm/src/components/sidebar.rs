//! サイドバー

use crate::browser::BrowserNavigator;
use compass_common::{Navigator, Route, SIDEBAR_ITEMS};
use leptos::prelude::*;

/// 評価画面は「Under Review」配下として強調する
fn highlights(item: Route, active: Route) -> bool {
    item == active || (active == Route::Evaluation && item == Route::UnderReview)
}

#[component]
pub fn Sidebar(active: Route) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="brand">"CC"</div>
            <nav class="sidebar-nav">
                {SIDEBAR_ITEMS
                    .iter()
                    .map(|item| {
                        let route = item.route;
                        view! {
                            <button
                                class="nav-item"
                                class:active=highlights(route, active)
                                title=item.label
                                on:click=move |_| BrowserNavigator.navigate(route)
                            >
                                <span class="nav-icon">{item.icon}</span>
                                <span class="nav-label">{item.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
