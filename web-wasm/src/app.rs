//! メインアプリケーションコンポーネント
//!
//! 画面はURLパスで決まる（全画面遷移のためクライアントルーターは使わない）。

use crate::browser::current_path;
use crate::components::{
    sidebar::Sidebar,
    toast::{ToastHost, Toaster},
};
use crate::pages::{
    approved::Approved, evaluation::EvaluationPage, home::Home, under_review::UnderReview,
};
use compass_common::Route;
use leptos::prelude::*;

fn page(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <Home /> }.into_any(),
        Route::UnderReview => view! { <UnderReview /> }.into_any(),
        Route::Evaluation => view! { <EvaluationPage /> }.into_any(),
        Route::Approved => view! { <Approved /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let route = Route::from_path(&current_path());
    log::debug!("rendering {:?}", route);

    provide_context(Toaster::new());

    view! {
        <div class="app-shell">
            <Sidebar active=route />
            <main class="main-content">{page(route)}</main>
            <ToastHost />
        </div>
    }
}
