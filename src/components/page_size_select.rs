//! Page Size Selector

use catalog_engine::{Intent, PAGE_SIZE_CHOICES};
use leptos::prelude::*;

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

/// Dropdown of the supported page sizes
#[component]
pub fn PageSizeSelect() -> impl IntoView {
    let store = use_app_store();
    let current = move || store.view().read().items_per_page();

    let on_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<usize>() {
            Ok(size) => {
                store_dispatch(&store, Intent::SetPageSize(size));
            }
            Err(e) => log::warn!("[PageSize] bad value: {}", e),
        }
    };

    view! {
        <label class="page-size-select">
            "Hiển thị "
            <select
                class="form-select form-select-sm"
                prop:value=move || current().to_string()
                on:change=on_change
            >
                {PAGE_SIZE_CHOICES.iter().map(|size| {
                    let size = *size;
                    view! {
                        <option value=size.to_string()>
                            {size}
                        </option>
                    }
                }).collect_view()}
            </select>
            " sản phẩm / trang"
        </label>
    }
}
