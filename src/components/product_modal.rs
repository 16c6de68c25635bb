//! Product Detail Modal
//!
//! Shows one product and lets the user edit its title and price.

use catalog_engine::{EditProductForm, Intent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{alert, AppContext};
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

pub const MODAL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300?text=No+Image";

#[component]
pub fn ProductModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Follows the store, so a saved edit shows up here too
    let product = Memo::new(move |_| {
        let id = ctx.selected.get()?;
        store.view().read().find(id).cloned()
    });

    let (editing, set_editing) = signal(false);
    let (saving, set_saving) = signal(false);
    let (title, set_title) = signal(String::new());
    let (price, set_price) = signal(String::new());

    let reset_form = move || {
        if let Some(p) = product.get_untracked() {
            let form = EditProductForm::from_product(&p);
            set_title.set(form.title);
            set_price.set(form.price);
        }
        set_editing.set(false);
    };

    // Reset edit mode whenever the shown product changes
    Effect::new(move |_| {
        let _ = product.get();
        reset_form();
    });

    let save = move |_| {
        let Some(original) = product.get_untracked() else { return };
        let form = EditProductForm {
            title: title.get_untracked(),
            price: price.get_untracked(),
        };
        let payload = match form.validate(&original) {
            Ok(payload) => payload,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        set_saving.set(true);
        let api = ctx.api.get_value();
        spawn_local(async move {
            match api.update_product(original.id, &payload).await {
                Ok(updated) => {
                    log::info!("[ProductModal] Updated product {}", updated.id);
                    store_dispatch(&store, Intent::Updated(updated));
                    alert("Cập nhật sản phẩm thành công!");
                }
                Err(e) => {
                    log::error!("[ProductModal] Error updating product {}: {}", original.id, e);
                    alert(&format!("Lỗi cập nhật: {}", e));
                }
            }
            set_saving.set(false);
        });
    };

    let close = move |_| {
        if !saving.get_untracked() {
            ctx.close_product();
        }
    };

    view! {
        <Show when=move || product.with(|p| p.is_some())>
            <div class="modal-backdrop show"></div>
            <div class="modal show d-block" tabindex="-1">
                <div class="modal-dialog modal-lg">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">
                                "Chi tiết sản phẩm #"
                                {move || product.with(|p| p.as_ref().map(|p| p.id))}
                            </h5>
                            <button type="button" class="btn-close" on:click=close></button>
                        </div>
                        <div class="modal-body">
                            <div class="row">
                                <div class="col-md-5">
                                    <img
                                        class="img-fluid modal-product-image"
                                        src=move || product.with(|p| {
                                            p.as_ref()
                                                .and_then(|p| p.display_image())
                                                .unwrap_or_else(|| MODAL_PLACEHOLDER_IMAGE.to_string())
                                        })
                                    />
                                </div>
                                <div class="col-md-7">
                                    <label class="form-label">"Tên sản phẩm"</label>
                                    <input
                                        type="text"
                                        class="form-control"
                                        prop:disabled=move || !editing.get()
                                        prop:value=move || title.get()
                                        on:input=move |ev| set_title.set(event_target_value(&ev))
                                    />
                                    <label class="form-label">"Giá ($)"</label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        min="0"
                                        class="form-control"
                                        prop:disabled=move || !editing.get()
                                        prop:value=move || price.get()
                                        on:input=move |ev| set_price.set(event_target_value(&ev))
                                    />
                                    <p>
                                        <strong>"Danh mục: "</strong>
                                        {move || product.with(|p| p.as_ref().map(|p| p.category_name().to_string()))}
                                    </p>
                                    <p>
                                        <strong>"Mô tả: "</strong>
                                        {move || product.with(|p| p.as_ref().map(|p| p.description_or_placeholder().to_string()))}
                                    </p>
                                </div>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <Show
                                when=move || editing.get()
                                fallback=move || view! {
                                    <button type="button" class="btn btn-primary" on:click=move |_| set_editing.set(true)>
                                        "Chỉnh sửa"
                                    </button>
                                }
                            >
                                <button type="button" class="btn btn-success" prop:disabled=move || saving.get() on:click=save>
                                    {move || if saving.get() { "Đang lưu..." } else { "Lưu" }}
                                </button>
                                <button type="button" class="btn btn-secondary" prop:disabled=move || saving.get() on:click=move |_| reset_form()>
                                    "Hủy"
                                </button>
                            </Show>
                            <button type="button" class="btn btn-outline-secondary" on:click=close>"Đóng"</button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
