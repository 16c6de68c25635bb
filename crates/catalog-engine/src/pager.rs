//! Pagination Controls
//!
//! Decides which page buttons are shown for a given cursor.

/// One entry in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Pagination bar for `current` of `total` pages.
///
/// Page 1, the last page and `current ± 1` are always listed. A single
/// ellipsis stands in at `current - 2` when `current > 3` and at
/// `current + 2` when `current < total - 2`. No bar is produced for an
/// empty result (`total == 0`).
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let mut items = Vec::with_capacity(total.min(9) + 2);
    items.push(PageItem::Previous {
        target: current.saturating_sub(1),
        disabled: current == 1,
    });

    for i in 1..=total {
        let near_current = i + 1 >= current && i <= current + 1;
        if i == 1 || i == total || near_current {
            items.push(PageItem::Page { number: i, active: i == current });
        } else if (i + 2 == current && current > 3) || (i == current + 2 && current + 2 < total) {
            items.push(PageItem::Ellipsis);
        }
    }

    items.push(PageItem::Next {
        target: current + 1,
        disabled: current == total,
    });
    items
}
