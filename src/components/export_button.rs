//! Export Button Component
//!
//! Downloads the filtered, sorted product list (all pages) as CSV.

use catalog_engine::export_filename;
use leptos::prelude::*;

use crate::context::alert;
use crate::download::{download_text, with_bom, CSV_MIME};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ExportButton() -> impl IntoView {
    let store = use_app_store();

    let export = move |_| {
        let csv = match store.view().read_untracked().export_csv() {
            Ok(csv) => csv,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        let filename = export_filename(chrono::Local::now().naive_local());
        match download_text(&filename, &with_bom(&csv), CSV_MIME) {
            Ok(()) => log::info!("[Export] Wrote {}", filename),
            Err(e) => {
                log::error!("[Export] Download failed: {}", e);
                alert(&format!("Lỗi export: {}", e));
            }
        }
    };

    view! {
        <button type="button" class="btn btn-success" on:click=export>
            "⬇ Export CSV"
        </button>
    }
}
