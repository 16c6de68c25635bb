//! Status Banner Component
//!
//! Loading spinner and load-error alert for the initial fetch. A failed load
//! also lists the recent log lines so the cause is visible without devtools.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, LoadStatus};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    move || match store.status().get() {
        LoadStatus::Loading => view! {
            <div class="loading-spinner text-center py-5">
                <div class="spinner-border text-primary" role="status"></div>
                <p class="mt-2">"Đang tải dữ liệu..."</p>
            </div>
        }
        .into_any(),
        LoadStatus::Failed(message) => {
            let lines = console_logger::recent_lines();
            let details = (!lines.is_empty()).then(|| {
                view! {
                    <details class="mt-2 small">
                        <summary>"Nhật ký gần đây"</summary>
                        <pre class="mb-0">{lines.join("\n")}</pre>
                    </details>
                }
            });
            view! {
                <div class="alert alert-danger" role="alert">
                    {message}
                    {details}
                </div>
            }
            .into_any()
        }
        LoadStatus::Ready => view! { <></> }.into_any(),
    }
}
