//! View State
//!
//! Session-local catalog state and the single update function that moves it
//! between states. Rendering code reads [`Projection`]s and never touches the
//! product lists directly.

use crate::error::{ExportError, ViewError};
use crate::export;
use crate::product::Product;
use crate::projection::{self, PageMeta, SortField, SortSpec};

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_CHOICES: [usize; 4] = [5, 10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A user or network event that changes the view
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Product list fetched from the API
    Loaded(Vec<Product>),
    /// Search box changed
    Search(String),
    /// Sortable header clicked
    Sort(SortField),
    SetPageSize(usize),
    GoToPage(usize),
    /// API confirmed a newly created product
    Created(Product),
    /// API confirmed an update
    Updated(Product),
}

/// What the table shows right now
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    pub rows: Vec<Product>,
    pub meta: PageMeta,
    pub sort: Option<SortSpec>,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    all_products: Vec<Product>,
    filtered_products: Vec<Product>,
    query: String,
    sort: Option<SortSpec>,
    current_page: usize,
    items_per_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Empty state. An unsupported `items_per_page` falls back to the default.
    pub fn new(items_per_page: usize) -> Self {
        let items_per_page = if PAGE_SIZE_CHOICES.contains(&items_per_page) {
            items_per_page
        } else {
            log::warn!("unsupported page size {items_per_page}, using {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        };
        Self {
            all_products: Vec::new(),
            filtered_products: Vec::new(),
            query: String::new(),
            sort: None,
            current_page: 1,
            items_per_page,
        }
    }

    pub fn all_products(&self) -> &[Product] {
        &self.all_products
    }

    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        projection::total_pages(self.filtered_products.len(), self.items_per_page)
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.all_products.iter().find(|p| p.id == id)
    }

    /// Apply one intent. On error the state is unchanged.
    pub fn apply(&mut self, intent: Intent) -> Result<(), ViewError> {
        match intent {
            Intent::Loaded(products) => {
                log::debug!("loaded {} products", products.len());
                self.all_products = products;
                self.refilter();
            }
            Intent::Search(query) => {
                self.query = query;
                self.refilter();
                log::debug!("search {:?} matched {}", self.query, self.filtered_products.len());
            }
            Intent::Sort(field) => {
                let spec = SortSpec::after_click(self.sort, field);
                self.sort = Some(spec);
                projection::sort_products(&mut self.filtered_products, spec);
                self.current_page = 1;
            }
            Intent::SetPageSize(size) => {
                if !PAGE_SIZE_CHOICES.contains(&size) {
                    return Err(ViewError::UnsupportedPageSize(size));
                }
                self.items_per_page = size;
                self.current_page = 1;
            }
            Intent::GoToPage(page) => {
                let total_pages = self.total_pages();
                if page < 1 || page > total_pages {
                    return Err(ViewError::PageOutOfRange { page, total_pages });
                }
                self.current_page = page;
            }
            Intent::Created(product) => {
                self.all_products.insert(0, product);
                self.refilter();
            }
            Intent::Updated(product) => {
                replace_by_id(&mut self.all_products, &product);
                replace_by_id(&mut self.filtered_products, &product);
            }
        }
        Ok(())
    }

    /// Rows of the current page plus pagination metadata
    pub fn project(&self) -> Projection {
        let meta = PageMeta {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_items: self.filtered_products.len(),
            items_per_page: self.items_per_page,
        };
        let rows =
            projection::page_slice(&self.filtered_products, self.current_page, self.items_per_page)
                .to_vec();
        Projection {
            rows,
            meta,
            sort: self.sort,
            query: self.query.clone(),
        }
    }

    /// CSV of every filtered product (all pages, current order)
    pub fn export_csv(&self) -> Result<String, ExportError> {
        export::products_to_csv(&self.filtered_products)
    }

    /// Rebuild the filtered list from the full list, keeping the active sort
    fn refilter(&mut self) {
        self.filtered_products = projection::filter_by_title(&self.all_products, &self.query);
        if let Some(spec) = self.sort {
            projection::sort_products(&mut self.filtered_products, spec);
        }
        self.current_page = 1;
    }
}

fn replace_by_id(products: &mut [Product], updated: &Product) {
    if let Some(slot) = products.iter_mut().find(|p| p.id == updated.id) {
        *slot = updated.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::SortOrder;
    use crate::validation::NewProductForm;

    fn make_product(id: u32, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: None,
            category: None,
            images: Vec::new(),
        }
    }

    fn loaded(count: u32) -> ViewState {
        let mut state = ViewState::default();
        let products = (1..=count)
            .map(|id| make_product(id, &format!("Product {id}"), id as f64))
            .collect();
        state.apply(Intent::Loaded(products)).unwrap();
        state
    }

    fn row_ids(projection: &Projection) -> Vec<u32> {
        projection.rows.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_23_products_three_pages() {
        let mut state = loaded(23);
        let first = state.project();
        assert_eq!(first.meta.total_pages, 3);
        assert_eq!(first.meta.total_items, 23);
        assert_eq!(row_ids(&first), (1..=10).collect::<Vec<_>>());

        state.apply(Intent::GoToPage(3)).unwrap();
        let last = state.project();
        assert_eq!(last.meta.current_page, 3);
        assert_eq!(row_ids(&last), vec![21, 22, 23]);
    }

    #[test]
    fn test_empty_state() {
        let state = ViewState::default();
        let projection = state.project();
        assert!(projection.rows.is_empty());
        assert!(projection.meta.is_empty());
        assert_eq!(projection.meta.total_pages, 0);
    }

    #[test]
    fn test_page_out_of_range_rejected() {
        let mut state = loaded(23);
        state.apply(Intent::GoToPage(2)).unwrap();
        assert_eq!(
            state.apply(Intent::GoToPage(4)),
            Err(ViewError::PageOutOfRange { page: 4, total_pages: 3 })
        );
        assert!(state.apply(Intent::GoToPage(0)).is_err());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = loaded(23);
        state.apply(Intent::GoToPage(3)).unwrap();
        state.apply(Intent::SetPageSize(5)).unwrap();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 5);

        assert_eq!(state.apply(Intent::SetPageSize(7)), Err(ViewError::UnsupportedPageSize(7)));
        assert_eq!(state.items_per_page(), 5);
    }

    #[test]
    fn test_new_falls_back_to_default_size() {
        assert_eq!(ViewState::new(3).items_per_page(), DEFAULT_PAGE_SIZE);
        assert_eq!(ViewState::new(20).items_per_page(), 20);
    }

    #[test]
    fn test_search_restarts_from_full_set() {
        let mut state = loaded(23);
        state.apply(Intent::GoToPage(2)).unwrap();
        state.apply(Intent::Search("product 2".to_string())).unwrap();
        assert_eq!(state.current_page(), 1);
        let ids: Vec<u32> = state.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 20, 21, 22, 23]);

        state.apply(Intent::Search("product 1".to_string())).unwrap();
        assert_eq!(state.filtered_products().len(), 11);

        state.apply(Intent::Search(String::new())).unwrap();
        assert_eq!(state.filtered_products(), state.all_products());
    }

    #[test]
    fn test_sort_toggles_and_persists_across_search() {
        let mut state = loaded(12);
        state.apply(Intent::GoToPage(2)).unwrap();
        state.apply(Intent::Sort(SortField::Price)).unwrap();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.sort(), Some(SortSpec::ascending(SortField::Price)));

        state.apply(Intent::Sort(SortField::Price)).unwrap();
        assert_eq!(state.sort().map(|s| s.order), Some(SortOrder::Desc));
        assert_eq!(state.filtered_products()[0].id, 12);

        state.apply(Intent::Search("product 1".to_string())).unwrap();
        let ids: Vec<u32> = state.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![12, 11, 10, 1]);

        state.apply(Intent::Sort(SortField::Title)).unwrap();
        assert_eq!(state.sort(), Some(SortSpec::ascending(SortField::Title)));
    }

    #[test]
    fn test_created_prepends() {
        let mut state = loaded(3);
        state.apply(Intent::Created(make_product(99, "Fresh", 1.0))).unwrap();
        assert_eq!(state.all_products().len(), 4);
        assert_eq!(state.all_products()[0].id, 99);
        assert_eq!(state.project().rows[0].id, 99);
    }

    #[test]
    fn test_created_respects_active_search() {
        let mut state = ViewState::default();
        state
            .apply(Intent::Loaded(vec![make_product(1, "Blue shirt", 20.0), make_product(2, "Chair", 40.0)]))
            .unwrap();
        state.apply(Intent::Search("shirt".to_string())).unwrap();

        state.apply(Intent::Created(make_product(3, "Lamp", 15.0))).unwrap();
        assert_eq!(state.all_products()[0].id, 3);
        let ids: Vec<u32> = state.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);

        state.apply(Intent::Created(make_product(4, "Red shirt", 5.0))).unwrap();
        let ids: Vec<u32> = state.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 1]);
    }

    #[test]
    fn test_created_keeps_active_sort() {
        let mut state = loaded(12);
        state.apply(Intent::Sort(SortField::Price)).unwrap();
        state.apply(Intent::GoToPage(2)).unwrap();

        state.apply(Intent::Created(make_product(99, "Fresh", 6.5))).unwrap();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.sort(), Some(SortSpec::ascending(SortField::Price)));
        let prices: Vec<f64> = state.filtered_products().iter().map(|p| p.price).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(state.filtered_products()[6].id, 99);
    }

    #[test]
    fn test_updated_unknown_id_is_noop() {
        let mut state = loaded(23);
        state.apply(Intent::GoToPage(2)).unwrap();
        let before = state.clone();

        state.apply(Intent::Updated(make_product(404, "Ghost", 1.0))).unwrap();
        assert_eq!(state, before);
        assert!(state.find(404).is_none());
    }

    #[test]
    fn test_updated_replaces_in_place() {
        let mut state = loaded(23);
        state.apply(Intent::GoToPage(2)).unwrap();
        state.apply(Intent::Updated(make_product(15, "Renamed", 500.0))).unwrap();

        assert_eq!(state.current_page(), 2);
        assert_eq!(state.all_products()[14].title, "Renamed");
        let rows = state.project().rows;
        assert_eq!(rows[4].id, 15);
        assert_eq!(rows[4].price, 500.0);
        assert_eq!(state.find(15).map(|p| p.title.as_str()), Some("Renamed"));
    }

    #[test]
    fn test_invalid_create_leaves_state_untouched() {
        let state = loaded(5);
        let form = NewProductForm {
            title: String::new(),
            price: "10".to_string(),
            description: String::new(),
            category_id: "1".to_string(),
            image_url: "https://placehold.co/600x400".to_string(),
        };
        assert!(form.validate().is_err());
        assert_eq!(state.all_products().len(), 5);
    }

    #[test]
    fn test_export_uses_filtered_order() {
        let mut state = loaded(3);
        state.apply(Intent::Sort(SortField::Price)).unwrap();
        state.apply(Intent::Sort(SortField::Price)).unwrap();
        let csv = state.export_csv().unwrap();
        let ids: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }
}
