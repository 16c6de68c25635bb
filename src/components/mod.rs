//! UI Components
//!
//! Reusable Leptos components.

mod create_product_modal;
mod description_tooltip;
mod export_button;
mod page_size_select;
mod pagination_bar;
mod product_modal;
mod product_table;
mod search_bar;
mod status_banner;

pub use create_product_modal::CreateProductModal;
pub use export_button::ExportButton;
pub use page_size_select::PageSizeSelect;
pub use pagination_bar::PaginationBar;
pub use product_modal::ProductModal;
pub use product_table::ProductTable;
pub use search_bar::SearchBar;
pub use status_banner::StatusBanner;
