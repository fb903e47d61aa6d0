use serde::Serialize;

/// Per-resource totals shown on the dashboard cards.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct DashboardTotals {
    pub clients: usize,
    pub bills: usize,
    pub jobs: usize,
    pub wallets: usize,
    pub products: usize,
    pub bookings: usize,
}
