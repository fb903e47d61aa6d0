//! Paginated list state shared by every resource table.

use std::future::Future;

use crate::backend::errors::BackendResult;
use crate::backend::{ListPage, ListQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginate};
use crate::ui::UiState;

/// Tells the caller whether a mutation invalidated the list it came from.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListRefresh {
    Required,
    NotRequired,
}

/// State backing one paginated resource table.
///
/// `items` and `paginate` only ever change together, on a successful fetch;
/// a failed fetch leaves both at their prior values and surfaces the error
/// through the [`UiState`] bridge.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    page: usize,
    paginate: Paginate,
}

impl<T> ListState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_per_page(DEFAULT_ITEMS_PER_PAGE)
    }

    #[must_use]
    pub fn with_per_page(per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            paginate: Paginate::empty(per_page),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn paginate(&self) -> &Paginate {
        &self.paginate
    }

    /// Moves the table to `page`. The page selector is the only caller;
    /// the new page takes effect on the next fetch.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Fetches one page and replaces `items` and `paginate` wholesale.
    ///
    /// The requested page is passed through untouched; an out-of-range page
    /// is the server's to answer, usually with an empty slice. The loading
    /// flag is released after both outcomes.
    pub async fn fetch_items<F, Fut>(&mut self, ui: &UiState, page: Option<usize>, fetch: F)
    where
        F: FnOnce(ListQuery) -> Fut,
        Fut: Future<Output = BackendResult<ListPage<T>>>,
    {
        ui.set_is_loading(true);

        let query = ListQuery::new(page.unwrap_or(1)).per_page(self.paginate.per_page);
        match fetch(query).await {
            Ok(fetched) => {
                self.items = fetched.items;
                self.paginate = fetched.paginate;
                self.page = self.paginate.page;
            }
            Err(err) => ui.set_error_message(err.message()),
        }

        ui.set_is_loading(false);
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}
