use serde::Serialize;

use crate::pagination::PageSelector;
use crate::presenter::TableView;

/// Data required to render the shared resource list template.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    /// Page heading.
    pub title: String,
    /// Target of the "new record" button, when the resource supports it.
    pub create_url: Option<String>,
    pub table: TableView,
    pub selector: PageSelector,
    /// Total record count across all pages.
    pub total: usize,
}
