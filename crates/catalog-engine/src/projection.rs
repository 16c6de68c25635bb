//! Projection
//!
//! Filter, sort and paginate operations over product slices.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Column a product list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Active sort: field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self { field, order: SortOrder::Asc }
    }

    /// Spec after a header click on `field`: same field flips direction,
    /// another field starts ascending.
    pub fn after_click(current: Option<SortSpec>, field: SortField) -> Self {
        match current {
            Some(spec) if spec.field == field => Self { field, order: spec.order.toggled() },
            _ => Self::ascending(field),
        }
    }
}

/// Pagination metadata for the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl PageMeta {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Products whose title contains `query`, case-insensitively, in input order.
/// The query is trimmed; an empty query keeps everything.
pub fn filter_by_title(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable in-place sort. Equal keys keep their relative order in both directions.
pub fn sort_products(products: &mut [Product], spec: SortSpec) {
    products.sort_by(|a, b| {
        let cmp = compare(a, b, spec.field);
        match spec.order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
    }
}

/// `ceil(count / size)`; zero when `count` or `size` is zero
pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    count.div_ceil(size)
}

/// Items of 1-indexed `page`, clamped to the sequence length
pub fn page_slice<T>(items: &[T], page: usize, size: usize) -> &[T] {
    if page == 0 || size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            make_product(1, "Classic Red Shirt", 30.0),
            make_product(2, "wooden chair", 120.0),
            make_product(3, "Shirt with Stripes", 25.5),
            make_product(4, "Bluetooth Speaker", 80.0),
            make_product(5, "Anchor Shirt", 12.0),
        ]
    }

    #[test]
    fn test_filter_case_insensitive() {
        let all = sample();
        assert_eq!(ids(&filter_by_title(&all, "SHIRT")), vec![1, 3, 5]);
        assert_eq!(ids(&filter_by_title(&all, "  chair ")), vec![2]);
        assert!(filter_by_title(&all, "lamp").is_empty());
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        let all = sample();
        assert_eq!(filter_by_title(&all, ""), all);
        assert_eq!(filter_by_title(&all, "   "), all);
    }

    #[test]
    fn test_filter_matches_exact_subset() {
        let all = sample();
        for query in ["s", "sh", "er", "x", "Red", "e"] {
            let filtered = filter_by_title(&all, query);
            let expected: Vec<u32> = all
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&query.to_lowercase()))
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&filtered), expected, "query {query:?}");
        }
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let mut products = sample();
        sort_products(&mut products, SortSpec::ascending(SortField::Title));
        assert_eq!(ids(&products), vec![5, 4, 1, 3, 2]);
    }

    #[test]
    fn test_sort_price_desc_reverses_asc() {
        let mut asc = sample();
        sort_products(&mut asc, SortSpec::ascending(SortField::Price));
        assert_eq!(ids(&asc), vec![5, 3, 1, 4, 2]);

        let mut desc = asc.clone();
        sort_products(&mut desc, SortSpec { field: SortField::Price, order: SortOrder::Desc });
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut products = vec![
            make_product(1, "a", 10.0),
            make_product(2, "b", 5.0),
            make_product(3, "c", 10.0),
            make_product(4, "d", 5.0),
        ];
        sort_products(&mut products, SortSpec::ascending(SortField::Price));
        assert_eq!(ids(&products), vec![2, 4, 1, 3]);

        let once = products.clone();
        sort_products(&mut products, SortSpec::ascending(SortField::Price));
        assert_eq!(products, once);

        let mut products = vec![
            make_product(1, "a", 10.0),
            make_product(2, "b", 5.0),
            make_product(3, "c", 10.0),
        ];
        sort_products(&mut products, SortSpec { field: SortField::Price, order: SortOrder::Desc });
        assert_eq!(ids(&products), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_spec_after_click() {
        let first = SortSpec::after_click(None, SortField::Price);
        assert_eq!(first, SortSpec::ascending(SortField::Price));

        let second = SortSpec::after_click(Some(first), SortField::Price);
        assert_eq!(second.order, SortOrder::Desc);

        let other = SortSpec::after_click(Some(second), SortField::Title);
        assert_eq!(other, SortSpec::ascending(SortField::Title));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_pages_reconstruct_sequence() {
        let seq: Vec<u32> = (1..=23).collect();
        for size in [1, 5, 10, 20, 50] {
            let pages = total_pages(seq.len(), size);
            let joined: Vec<u32> = (1..=pages)
                .flat_map(|p| page_slice(&seq, p, size).iter().copied())
                .collect();
            assert_eq!(joined, seq, "size {size}");
        }
    }

    #[test]
    fn test_page_slice_23_items() {
        let seq: Vec<u32> = (1..=23).collect();
        assert_eq!(page_slice(&seq, 1, 10), &seq[0..10]);
        assert_eq!(page_slice(&seq, 3, 10), &[21, 22, 23]);
        assert!(page_slice(&seq, 4, 10).is_empty());
        assert!(page_slice(&seq, 0, 10).is_empty());
    }
}
