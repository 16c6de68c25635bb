//! Create Product Modal
//!
//! Form for adding a product through the API.

use catalog_engine::{Intent, NewProductForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{alert, AppContext};
use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn CreateProductModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let form = RwSignal::new(NewProductForm::default());
    let (creating, set_creating) = signal(false);

    let create_product = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(|f| f.validate()) {
            Ok(payload) => payload,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        set_creating.set(true);
        let api = ctx.api.get_value();
        spawn_local(async move {
            match api.create_product(&payload).await {
                Ok(product) => {
                    let id = product.id;
                    log::info!("[CreateProduct] Created product {}", id);
                    store_dispatch(&store, Intent::Created(product));
                    alert(&format!("Tạo sản phẩm thành công! ID: {}", id));
                    form.set(NewProductForm::default());
                    ctx.show_create.set(false);
                }
                Err(e) => {
                    log::error!("[CreateProduct] Error creating product: {}", e);
                    alert(&format!("Lỗi tạo sản phẩm: {}", e));
                }
            }
            set_creating.set(false);
        });
    };

    let close = move |_| {
        if !creating.get_untracked() {
            ctx.show_create.set(false);
        }
    };

    view! {
        <Show when=move || ctx.show_create.get()>
            <div class="modal-backdrop show"></div>
            <div class="modal show d-block" tabindex="-1">
                <div class="modal-dialog">
                    <form class="modal-content" on:submit=create_product>
                        <div class="modal-header">
                            <h5 class="modal-title">"Thêm sản phẩm mới"</h5>
                            <button type="button" class="btn-close" on:click=close></button>
                        </div>
                        <div class="modal-body">
                            <label class="form-label">"Tên sản phẩm *"</label>
                            <input
                                type="text"
                                class="form-control"
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                            />
                            <label class="form-label">"Giá ($) *"</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                class="form-control"
                                prop:value=move || form.with(|f| f.price.clone())
                                on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                            />
                            <label class="form-label">"Mô tả"</label>
                            <textarea
                                class="form-control"
                                rows="3"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            ></textarea>
                            <label class="form-label">"Danh mục ID *"</label>
                            <input
                                type="number"
                                min="1"
                                class="form-control"
                                prop:value=move || form.with(|f| f.category_id.clone())
                                on:input=move |ev| form.update(|f| f.category_id = event_target_value(&ev))
                            />
                            <label class="form-label">"URL hình ảnh *"</label>
                            <input
                                type="url"
                                class="form-control"
                                placeholder="https://..."
                                prop:value=move || form.with(|f| f.image_url.clone())
                                on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=close>"Hủy"</button>
                            <button type="submit" class="btn btn-primary" prop:disabled=move || creating.get()>
                                {move || if creating.get() { "Đang tạo..." } else { "Tạo sản phẩm" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
