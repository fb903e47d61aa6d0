//! Remote API access layer.
//!
//! One reader/writer trait pair per resource, all implemented by
//! [`http::HttpBackend`]. Every call is a single HTTP request carrying the
//! operator's bearer token; failures normalize into
//! [`errors::BackendError`] and propagate immediately, with no retries.

// These traits are only consumed as generic bounds inside this crate.
#![allow(async_fn_in_trait)]

use serde::Deserialize;

use crate::backend::errors::BackendResult;
use crate::domain::bill::Bill;
use crate::domain::booking::Booking;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::job::{Job, NewJob, UpdateJob};
use crate::domain::product::{Product, ProductPayload};
use crate::domain::wallet::{NewWallet, UpdateWallet, Wallet};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginate};

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// One page of records plus its window metadata, the sole output of a
/// list call.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub paginate: Paginate,
}

/// Page window requested from a list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub per_page: usize,
}

impl ListQuery {
    #[must_use]
    pub fn new(page: usize) -> Self {
        Self {
            page,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    #[must_use]
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }
}

pub trait ClientReader {
    /// Fetches one client by DNI. A missing client is an API error, not a
    /// `None`: the server answers 404 with a message body.
    async fn get_client_by_dni(&self, dni: &str) -> BackendResult<Client>;
    async fn list_clients(&self, query: ListQuery) -> BackendResult<ListPage<Client>>;
}

pub trait ClientWriter {
    async fn create_client(&self, new_client: &NewClient) -> BackendResult<Client>;
    async fn update_client(&self, dni: &str, updates: &UpdateClient) -> BackendResult<Client>;
    async fn delete_client(&self, dni: &str) -> BackendResult<()>;
}

pub trait BillReader {
    async fn get_bill_by_id(&self, id: i32) -> BackendResult<Bill>;
    async fn list_bills(&self, query: ListQuery) -> BackendResult<ListPage<Bill>>;
}

pub trait BillWriter {
    async fn delete_bill(&self, id: i32) -> BackendResult<()>;
}

pub trait JobReader {
    async fn get_job_by_id(&self, id: i32) -> BackendResult<Job>;
    async fn list_jobs(&self, query: ListQuery) -> BackendResult<ListPage<Job>>;
}

pub trait JobWriter {
    async fn create_job(&self, new_job: &NewJob) -> BackendResult<Job>;
    async fn update_job(&self, id: i32, updates: &UpdateJob) -> BackendResult<Job>;
    async fn delete_job(&self, id: i32) -> BackendResult<()>;
}

pub trait WalletReader {
    async fn get_wallet_by_id(&self, id: i32) -> BackendResult<Wallet>;
    async fn list_wallets(&self, query: ListQuery) -> BackendResult<ListPage<Wallet>>;
}

pub trait WalletWriter {
    async fn create_wallet(&self, new_wallet: &NewWallet) -> BackendResult<Wallet>;
    async fn update_wallet(&self, id: i32, updates: &UpdateWallet) -> BackendResult<Wallet>;
    async fn delete_wallet(&self, id: i32) -> BackendResult<()>;
}

pub trait ProductReader {
    async fn get_product_by_id(&self, id: i32) -> BackendResult<Product>;
    async fn list_products(&self, query: ListQuery) -> BackendResult<ListPage<Product>>;
}

pub trait ProductWriter {
    async fn create_product(&self, payload: &ProductPayload) -> BackendResult<Product>;
    async fn update_product(&self, id: i32, payload: &ProductPayload) -> BackendResult<Product>;
    async fn delete_product(&self, id: i32) -> BackendResult<()>;
}

pub trait BookingReader {
    async fn get_booking_by_id(&self, id: i32) -> BackendResult<Booking>;
    async fn list_bookings(&self, query: ListQuery) -> BackendResult<ListPage<Booking>>;
}
