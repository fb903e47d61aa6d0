//! Mock backend for isolating services in tests.

use mockall::mock;

use crate::backend::errors::BackendResult;
use crate::backend::{
    BillReader, BillWriter, BookingReader, ClientReader, ClientWriter, JobReader, JobWriter,
    ListPage, ListQuery, ProductReader, ProductWriter, WalletReader, WalletWriter,
};
use crate::domain::bill::Bill;
use crate::domain::booking::Booking;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::job::{Job, NewJob, UpdateJob};
use crate::domain::product::{Product, ProductPayload};
use crate::domain::wallet::{NewWallet, UpdateWallet, Wallet};

mock! {
    pub Backend {}

    impl ClientReader for Backend {
        async fn get_client_by_dni(&self, dni: &str) -> BackendResult<Client>;
        async fn list_clients(&self, query: ListQuery) -> BackendResult<ListPage<Client>>;
    }

    impl ClientWriter for Backend {
        async fn create_client(&self, new_client: &NewClient) -> BackendResult<Client>;
        async fn update_client(&self, dni: &str, updates: &UpdateClient) -> BackendResult<Client>;
        async fn delete_client(&self, dni: &str) -> BackendResult<()>;
    }

    impl BillReader for Backend {
        async fn get_bill_by_id(&self, id: i32) -> BackendResult<Bill>;
        async fn list_bills(&self, query: ListQuery) -> BackendResult<ListPage<Bill>>;
    }

    impl BillWriter for Backend {
        async fn delete_bill(&self, id: i32) -> BackendResult<()>;
    }

    impl JobReader for Backend {
        async fn get_job_by_id(&self, id: i32) -> BackendResult<Job>;
        async fn list_jobs(&self, query: ListQuery) -> BackendResult<ListPage<Job>>;
    }

    impl JobWriter for Backend {
        async fn create_job(&self, new_job: &NewJob) -> BackendResult<Job>;
        async fn update_job(&self, id: i32, updates: &UpdateJob) -> BackendResult<Job>;
        async fn delete_job(&self, id: i32) -> BackendResult<()>;
    }

    impl WalletReader for Backend {
        async fn get_wallet_by_id(&self, id: i32) -> BackendResult<Wallet>;
        async fn list_wallets(&self, query: ListQuery) -> BackendResult<ListPage<Wallet>>;
    }

    impl WalletWriter for Backend {
        async fn create_wallet(&self, new_wallet: &NewWallet) -> BackendResult<Wallet>;
        async fn update_wallet(&self, id: i32, updates: &UpdateWallet) -> BackendResult<Wallet>;
        async fn delete_wallet(&self, id: i32) -> BackendResult<()>;
    }

    impl ProductReader for Backend {
        async fn get_product_by_id(&self, id: i32) -> BackendResult<Product>;
        async fn list_products(&self, query: ListQuery) -> BackendResult<ListPage<Product>>;
    }

    impl ProductWriter for Backend {
        async fn create_product(&self, payload: &ProductPayload) -> BackendResult<Product>;
        async fn update_product(&self, id: i32, payload: &ProductPayload) -> BackendResult<Product>;
        async fn delete_product(&self, id: i32) -> BackendResult<()>;
    }

    impl BookingReader for Backend {
        async fn get_booking_by_id(&self, id: i32) -> BackendResult<Booking>;
        async fn list_bookings(&self, query: ListQuery) -> BackendResult<ListPage<Booking>>;
    }
}
