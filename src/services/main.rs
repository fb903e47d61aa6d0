//! Services backing the dashboard landing page.

use crate::backend::errors::BackendResult;
use crate::backend::{
    BillReader, BookingReader, ClientReader, JobReader, ListPage, ListQuery, ProductReader,
    WalletReader,
};
use crate::dto::main::DashboardTotals;
use crate::ui::UiState;

fn total_of<T>(result: BackendResult<ListPage<T>>, ui: &UiState) -> usize {
    match result {
        Ok(page) => page.paginate.total,
        Err(err) => {
            log::error!("Failed to load a dashboard total: {err}");
            ui.set_error_message(err.message());
            0
        }
    }
}

/// Collects the per-resource totals shown on the dashboard cards.
///
/// Each total is the `paginate.total` of a minimal one-item list call. A
/// failing call contributes zero and leaves its message on the bridge.
pub async fn load_dashboard<R>(backend: &R, ui: &UiState) -> DashboardTotals
where
    R: ClientReader + BillReader + JobReader + WalletReader + ProductReader + BookingReader,
{
    ui.set_is_loading(true);

    let query = ListQuery::new(1).per_page(1);
    let clients = total_of(backend.list_clients(query).await, ui);
    let bills = total_of(backend.list_bills(query).await, ui);
    let jobs = total_of(backend.list_jobs(query).await, ui);
    let wallets = total_of(backend.list_wallets(query).await, ui);
    let products = total_of(backend.list_products(query).await, ui);
    let bookings = total_of(backend.list_bookings(query).await, ui);

    ui.set_is_loading(false);

    DashboardTotals {
        clients,
        bills,
        jobs,
        wallets,
        products,
        bookings,
    }
}
