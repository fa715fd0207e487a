//! ファイル選択カード

use crate::browser::{files_from_input, BrowserFile};
use leptos::prelude::*;
use web_sys::HtmlInputElement;

#[component]
pub fn UploadCard<F>(
    title: &'static str,
    hint: &'static str,
    icon: &'static str,
    input_id: &'static str,
    accept: &'static str,
    #[prop(optional)] multiple: bool,
    /// 選択済みファイル名
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_files: F,
) -> impl IntoView
where
    F: Fn(Vec<BrowserFile>) + 'static,
{
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = files_from_input(&input);
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
        on_files(files);
    };

    view! {
        <div class="upload-card">
            <h3 class="upload-title">{title}</h3>
            <label class="upload-area" for=input_id>
                <div class="upload-icon">{icon}</div>
                <p>"Click to select"</p>
                <p class="text-muted">{hint}</p>
            </label>
            <input
                id=input_id
                class="hidden-input"
                type="file"
                accept=accept
                multiple=multiple
                on:change=on_change
            />
            <Show when=move || !selected.get().is_empty()>
                <ul class="file-list">
                    <For
                        each=move || selected.get().into_iter().enumerate()
                        key=|(i, name)| format!("{}-{}", i, name)
                        children=|(_, name)| view! {
                            <li class="file-item">
                                <span class="file-check">"✔"</span>
                                <span class="file-name">{name}</span>
                            </li>
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
