//! Description Tooltip
//!
//! Floating description panel anchored below the hovered table row.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where and what to show
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub text: String,
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl TooltipState {
    /// Anchor below the element that fired `ev`, in page coordinates
    pub fn below_target(ev: &web_sys::MouseEvent, text: String) -> Option<Self> {
        let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
        let rect = element.get_bounding_client_rect();
        let window = web_sys::window()?;
        let scroll_x = window.scroll_x().unwrap_or(0.0);
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(Self {
            text,
            top: rect.bottom() + scroll_y + 5.0,
            left: rect.left() + scroll_x,
            width: rect.width(),
        })
    }
}

#[component]
pub fn DescriptionTooltip(tooltip: ReadSignal<Option<TooltipState>>) -> impl IntoView {
    move || {
        tooltip.get().map(|state| {
            let style = format!(
                "top: {}px; left: {}px; width: {}px;",
                state.top, state.left, state.width
            );
            view! {
                <div class="description-tooltip show" style=style>
                    <div class="tooltip-title">"Mô tả sản phẩm"</div>
                    <div class="tooltip-content">{state.text}</div>
                </div>
            }
        })
    }
}
