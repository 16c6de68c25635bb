//! Pagination Bar Component
//!
//! Page buttons with previous/next controls and page/total counters.

use catalog_engine::{page_items, Intent, PageItem, Projection};
use leptos::prelude::*;

use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn PaginationBar(
    projection: Memo<Projection>,
    /// Called after the page actually changed
    #[prop(into)] on_navigate: Callback<usize>,
) -> impl IntoView {
    let store = use_app_store();

    let go_to = move |page: usize| {
        if store_dispatch(&store, Intent::GoToPage(page)) {
            on_navigate.run(page);
        }
    };

    let buttons = move || {
        let meta = projection.get().meta;
        page_items(meta.current_page, meta.total_pages)
            .into_iter()
            .map(move |item| match item {
                PageItem::Previous { target, disabled } => view! {
                    <li class="page-item" class:disabled=disabled>
                        <a class="page-link" href="#" on:click=move |ev| {
                            ev.prevent_default();
                            if !disabled { go_to(target) }
                        }>"← Trước"</a>
                    </li>
                }
                .into_any(),
                PageItem::Page { number, active } => view! {
                    <li class="page-item" class:active=active>
                        <a class="page-link" href="#" on:click=move |ev| {
                            ev.prevent_default();
                            go_to(number)
                        }>{number}</a>
                    </li>
                }
                .into_any(),
                PageItem::Ellipsis => view! {
                    <li class="page-item disabled">
                        <span class="page-link">"..."</span>
                    </li>
                }
                .into_any(),
                PageItem::Next { target, disabled } => view! {
                    <li class="page-item" class:disabled=disabled>
                        <a class="page-link" href="#" on:click=move |ev| {
                            ev.prevent_default();
                            if !disabled { go_to(target) }
                        }>"Tiếp →"</a>
                    </li>
                }
                .into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="pagination-info">
            "Trang " <span>{move || projection.with(|p| if p.meta.is_empty() { 0 } else { p.meta.current_page })}</span>
            " / " <span>{move || projection.with(|p| p.meta.total_pages)}</span>
            " · Tổng " <span>{move || projection.with(|p| p.meta.total_items)}</span> " sản phẩm"
        </div>
        <nav>
            <ul class="pagination justify-content-center">{buttons}</ul>
        </nav>
    }
}
