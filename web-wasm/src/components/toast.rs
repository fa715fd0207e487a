//! トースト通知
//!
//! `Toaster` をコンテキストに置き、`Notifier` として画面ロジックに渡す。

use compass_common::{Notification, Notifier};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// 自動で閉じるまでの時間
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    notification: Notification,
}

#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::debug!("toast: {}", notification.title);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let toaster = *self;
        Timeout::new(TOAST_DURATION_MS, move || toaster.dismiss(id)).forget();
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let Notification { title, description, variant } = toast.notification;
                    view! {
                        <div class=format!("toast {}", variant.as_str()) role="status">
                            <div class="toast-body">
                                <p class="toast-title">{title}</p>
                                <p class="toast-description">{description}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
