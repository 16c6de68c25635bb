//! Search Bar Component
//!
//! Title search box with a live result count.

use catalog_engine::Intent;
use leptos::prelude::*;

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    let result_count = move || store.view().read().filtered_products().len();

    view! {
        <div class="search-container">
            <div class="input-group">
                <span class="input-group-text">"🔍"</span>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Tìm kiếm theo tên sản phẩm..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_query.set(value.clone());
                        store_dispatch(&store, Intent::Search(value));
                    }
                />
            </div>
            <small class="search-result-count">{move || format!("{} kết quả", result_count())}</small>
        </div>
    }
}
