//! プログレスバーコンポーネント

use leptos::prelude::*;

/// 描画幅のみ 0〜100% に丸める（ラベルは元の値のまま）
fn bar_width(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

#[component]
pub fn ProgressBar(
    percentage: f64,
    #[prop(optional)] tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class=format!("progress-fill {}", tone)
                style=format!("width: {}%", bar_width(percentage))
            />
        </div>
    }
}
