//! Catalog Engine
//!
//! Framework-independent core of the catalog viewer:
//! - product: API records and request payloads
//! - projection: filter, stable sort and pagination
//! - pager: pagination bar with ellipsis elision
//! - state: view state driven by [`Intent`]s
//! - validation: create/edit form checks
//! - export: CSV export

mod error;
mod export;
mod pager;
mod product;
mod projection;
mod state;
mod validation;

pub use error::{ExportError, ValidationError, ViewError};
pub use export::{export_filename, products_to_csv, CSV_HEADERS, DESCRIPTION_LIMIT};
pub use pager::{page_items, PageItem};
pub use product::{Category, Product, ProductPayload, NO_CATEGORY, NO_DESCRIPTION};
pub use projection::{
    filter_by_title, page_slice, sort_products, total_pages, PageMeta, SortField, SortOrder,
    SortSpec,
};
pub use state::{Intent, Projection, ViewState, DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
pub use validation::{EditProductForm, NewProductForm};
