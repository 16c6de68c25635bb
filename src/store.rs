//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use catalog_engine::{Intent, ViewState};
use leptos::prelude::*;
use reactive_stores::Store;

/// State of the initial product fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Message shown in the error banner
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Products, search, sort and page cursor
    pub view: ViewState,
    pub status: LoadStatus,
}

impl AppState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            view: ViewState::new(items_per_page),
            status: LoadStatus::Loading,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an intent to the view state. Refused intents are logged and
/// leave the state unchanged.
pub fn store_dispatch(store: &AppStore, intent: Intent) -> bool {
    let result = store.view().write().apply(intent);
    match result {
        Ok(()) => true,
        Err(e) => {
            log::debug!("[Store] intent refused: {}", e);
            false
        }
    }
}

pub fn store_set_status(store: &AppStore, status: LoadStatus) {
    *store.status().write() = status;
}
