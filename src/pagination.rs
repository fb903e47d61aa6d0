use serde::{Deserialize, Serialize};

/// Page size every resource table requests.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Page-window metadata the API returns alongside every list slice.
///
/// Only the server recomputes this; the console treats it as opaque truth
/// apart from the `pages == ceil(total / per_page)` invariant used when a
/// descriptor has to be built locally (initial state, tests).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Paginate {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub pages: usize,
}

impl Paginate {
    #[must_use]
    pub fn new(total: usize, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            total,
            page,
            per_page,
            pages: total.div_ceil(per_page),
        }
    }

    /// Zeroed descriptor a list starts from before its first fetch.
    #[must_use]
    pub fn empty(per_page: usize) -> Self {
        Self {
            total: 0,
            page: 1,
            per_page: per_page.max(1),
            pages: 0,
        }
    }
}

impl Default for Paginate {
    fn default() -> Self {
        Self::empty(DEFAULT_ITEMS_PER_PAGE)
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Windowed page selector rendered under every table; `None` entries are
/// ellipsis gaps.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageSelector {
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl PageSelector {
    #[must_use]
    pub fn new(paginate: &Paginate) -> Self {
        let current_page = if paginate.page == 0 { 1 } else { paginate.page };

        Self {
            pages: get_pages(paginate.pages, current_page, 2, 2, 4, 2),
            page: current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_is_total_over_per_page_rounded_up() {
        assert_eq!(Paginate::new(12, 1, 5).pages, 3);
        assert_eq!(Paginate::new(10, 1, 5).pages, 2);
        assert_eq!(Paginate::new(1, 1, 5).pages, 1);
        assert_eq!(Paginate::new(0, 1, 5).pages, 0);
    }

    #[test]
    fn empty_descriptor_is_zeroed_on_page_one() {
        let paginate = Paginate::empty(5);
        assert_eq!(paginate.total, 0);
        assert_eq!(paginate.page, 1);
        assert_eq!(paginate.per_page, 5);
        assert_eq!(paginate.pages, 0);
    }

    #[test]
    fn per_page_never_goes_below_one() {
        assert_eq!(Paginate::new(3, 1, 0).per_page, 1);
        assert_eq!(Paginate::new(3, 1, 0).pages, 3);
    }

    #[test]
    fn descriptor_uses_wire_field_names() {
        let paginate: Paginate =
            serde_json::from_str(r#"{"total":12,"page":2,"perPage":5,"pages":3}"#).unwrap();
        assert_eq!(paginate, Paginate::new(12, 2, 5));
    }

    #[test]
    fn selector_shows_every_page_when_few() {
        let selector = PageSelector::new(&Paginate::new(12, 2, 5));
        assert_eq!(selector.pages, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(selector.page, 2);
    }

    #[test]
    fn selector_elides_around_a_middle_page() {
        let selector = PageSelector::new(&Paginate::new(100, 10, 5));
        assert_eq!(
            selector.pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn selector_is_empty_before_the_first_fetch() {
        let selector = PageSelector::new(&Paginate::empty(5));
        assert!(selector.pages.is_empty());
    }
}
