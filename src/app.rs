//! Catalog Viewer App
//!
//! Main application component: toolbar, product table, pagination and modals.

use catalog_engine::Intent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::api::ProductApi;
use crate::components::{
    CreateProductModal, ExportButton, PageSizeSelect, PaginationBar, ProductModal, ProductTable,
    SearchBar, StatusBanner,
};
use crate::config::CatalogConfig;
use crate::context::AppContext;
use crate::store::{store_dispatch, store_set_status, AppState, AppStateStoreFields, LoadStatus};

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config.default_page_size));
    provide_context(store);

    let ctx = AppContext::new(ProductApi::new(config.api_base_url, config.fetch_limit));
    provide_context(ctx);

    let projection = Memo::new(move |_| store.view().read().project());
    let table_ref = NodeRef::<leptos::html::Div>::new();

    // Load products on mount
    Effect::new(move |_| {
        let api = ctx.api.get_value();
        spawn_local(async move {
            match api.list_products().await {
                Ok(products) => {
                    log::info!("[App] Loaded {} products", products.len());
                    store_dispatch(&store, Intent::Loaded(products));
                    store_set_status(&store, LoadStatus::Ready);
                }
                Err(e) => {
                    log::error!("[App] Error fetching products: {}", e);
                    store_set_status(&store, LoadStatus::Failed(format!("Không thể tải dữ liệu: {}", e)));
                }
            }
        });
    });

    let scroll_to_table = move |_page: usize| {
        if let Some(el) = table_ref.get_untracked() {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    };

    let is_ready = move || store.status().with(|s| *s == LoadStatus::Ready);

    view! {
        <div class="container py-4">
            <h1 class="text-center mb-4">"Danh Sách Sản Phẩm"</h1>

            <StatusBanner />

            <Show when=is_ready>
                <div class="toolbar">
                    <SearchBar />
                    <PageSizeSelect />
                    <button type="button" class="btn btn-primary" on:click=move |_| ctx.show_create.set(true)>
                        "+ Thêm sản phẩm"
                    </button>
                    <ExportButton />
                </div>

                <div class="table-container" node_ref=table_ref>
                    <ProductTable projection=projection />
                </div>

                <PaginationBar projection=projection on_navigate=scroll_to_table />
            </Show>

            <ProductModal />
            <CreateProductModal />
        </div>
    }
}
