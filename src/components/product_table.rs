//! Product Table Component
//!
//! Current page of products with sortable headers, hover descriptions and
//! click-to-open details.

use catalog_engine::{Intent, Product, Projection, SortField, SortOrder};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::description_tooltip::{DescriptionTooltip, TooltipState};
use crate::context::AppContext;
use crate::store::{store_dispatch, use_app_store};

pub const ROW_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150?text=No+Image";

/// Arrow shown next to a sortable header
fn sort_icon(projection: &Projection, field: SortField) -> &'static str {
    match projection.sort {
        Some(spec) if spec.field == field => match spec.order {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        },
        _ => "↕",
    }
}

#[component]
pub fn ProductTable(projection: Memo<Projection>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (tooltip, set_tooltip) = signal::<Option<TooltipState>>(None);

    let toggle_sort = move |field: SortField| {
        set_tooltip.set(None);
        store_dispatch(&store, Intent::Sort(field));
    };

    let header = move |label: &'static str, field: SortField| {
        view! {
            <th class="sortable-header" on:click=move |_| toggle_sort(field)>
                {label} " "
                <span class="sort-icon" class:sort-active=move || projection.with(|p| p.sort.map(|s| s.field) == Some(field))>
                    {move || projection.with(|p| sort_icon(p, field))}
                </span>
            </th>
        }
    };

    let rows = move || {
        let products = projection.get().rows;
        if products.is_empty() {
            return view! {
                <tr>
                    <td colspan="5" class="text-center py-4">
                        <p class="text-muted mb-0">"Không tìm thấy sản phẩm nào."</p>
                    </td>
                </tr>
            }
            .into_any();
        }
        products
            .into_iter()
            .map(|product| product_row(product, ctx, set_tooltip))
            .collect_view()
            .into_any()
    };

    view! {
        <table class="table table-hover product-table">
            <thead>
                <tr>
                    <th class="text-center">"ID"</th>
                    {header("Tên Sản Phẩm", SortField::Title)}
                    {header("Giá", SortField::Price)}
                    <th>"Danh Mục"</th>
                    <th class="text-center">"Hình Ảnh"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <DescriptionTooltip tooltip=tooltip />
    }
}

fn product_row(
    product: Product,
    ctx: AppContext,
    set_tooltip: WriteSignal<Option<TooltipState>>,
) -> impl IntoView {
    let id = product.id;
    let description = product.description_or_placeholder().to_string();
    let category = product.category_name().to_string();
    let price = format!("${}", product.price_label());
    let title = product.title.clone();

    let image = match product.display_image() {
        Some(url) => {
            let href = url.clone();
            view! {
            <a href=href target="_blank" title="Xem ảnh" on:click=|ev| ev.stop_propagation()>
                <img src=url alt=title.clone() class="product-image" on:error=move |ev| swap_to_placeholder(&ev) />
            </a>
            }
            .into_any()
        }
        None => view! {
            <img src=ROW_PLACEHOLDER_IMAGE alt="No image" class="product-image" />
        }
        .into_any(),
    };

    view! {
        <tr
            class="product-row"
            on:mouseenter=move |ev| set_tooltip.set(TooltipState::below_target(&ev, description.clone()))
            on:mouseleave=move |_| set_tooltip.set(None)
            on:click=move |_| {
                set_tooltip.set(None);
                ctx.open_product(id);
            }
        >
            <td class="text-center id-column">{id}</td>
            <td>
                <div class="product-name" title=title.clone()>{title.clone()}</div>
            </td>
            <td class="text-center">
                <span class="price-badge">{price}</span>
            </td>
            <td>
                <span class="category-badge">{category}</span>
            </td>
            <td class="text-center">{image}</td>
        </tr>
    }
}

/// Broken image links fall back to the placeholder
fn swap_to_placeholder(ev: &web_sys::Event) {
    if let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
    {
        if img.src() != ROW_PLACEHOLDER_IMAGE {
            img.set_src(ROW_PLACEHOLDER_IMAGE);
        }
    }
}
