//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ProductApi;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Client for the product endpoints
    pub api: StoredValue<ProductApi>,
    /// Product shown in the detail modal (None = closed)
    pub selected: RwSignal<Option<u32>>,
    /// Whether the create modal is open
    pub show_create: RwSignal<bool>,
}

impl AppContext {
    pub fn new(api: ProductApi) -> Self {
        Self {
            api: StoredValue::new(api),
            selected: RwSignal::new(None),
            show_create: RwSignal::new(false),
        }
    }

    /// Open the detail modal for a product
    pub fn open_product(&self, id: u32) {
        self.selected.set(Some(id));
    }

    pub fn close_product(&self) {
        self.selected.set(None);
    }
}

/// Blocking browser alert, used for action results
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::debug!("[Alert] Not shown: {:?}", e);
        }
    }
}
