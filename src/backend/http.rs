//! reqwest-backed implementation of the resource traits.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::errors::{BackendError, BackendResult};
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

/// The remote back-office API, bound to one request's credentials.
///
/// Built per request so the bearer token is always read from the current
/// session state, never cached across requests. The underlying
/// `reqwest::Client` is shared and owns the connection pool.
pub struct HttpBackend<'a> {
    http: &'a reqwest::Client,
    base_url: &'a str,
    token: &'a str,
}

impl<'a> HttpBackend<'a> {
    #[must_use]
    pub fn new(http: &'a reqwest::Client, base_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: ListQuery,
    ) -> BackendResult<ListPage<T>> {
        let response = self
            .http
            .get(self.url(resource))
            .query(&[("page", query.page), ("size", query.per_page)])
            .bearer_auth(self.token)
            .send()
            .await?;

        decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> BackendResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(self.token)
            .send()
            .await?;

        decode(response).await
    }

    async fn create<T, P>(&self, resource: &str, payload: &P) -> BackendResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let response = self
            .http
            .post(self.url(resource))
            .bearer_auth(self.token)
            .json(payload)
            .send()
            .await?;

        decode(response).await
    }

    async fn update<T, P>(&self, path: &str, payload: &P) -> BackendResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(self.token)
            .json(payload)
            .send()
            .await?;

        decode(response).await
    }

    async fn delete(&self, path: &str) -> BackendResult<()> {
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(self.token)
            .send()
            .await?;

        check(response).await
    }
}

/// Reads a 2xx JSON body, or normalizes the failure.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> BackendResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::from_response(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| BackendError::Decode(err.to_string()))
}

/// Accepts any 2xx answer, body included or not (delete answers 204).
async fn check(response: reqwest::Response) -> BackendResult<()> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::from_response(status, &body));
    }

    Ok(())
}

impl ClientReader for HttpBackend<'_> {
    async fn get_client_by_dni(&self, dni: &str) -> BackendResult<Client> {
        self.get(&format!("clients/{dni}")).await
    }

    async fn list_clients(&self, query: ListQuery) -> BackendResult<ListPage<Client>> {
        self.list("clients", query).await
    }
}

impl ClientWriter for HttpBackend<'_> {
    async fn create_client(&self, new_client: &NewClient) -> BackendResult<Client> {
        self.create("clients", new_client).await
    }

    async fn update_client(&self, dni: &str, updates: &UpdateClient) -> BackendResult<Client> {
        self.update(&format!("clients/{dni}"), updates).await
    }

    async fn delete_client(&self, dni: &str) -> BackendResult<()> {
        self.delete(&format!("clients/{dni}")).await
    }
}

impl BillReader for HttpBackend<'_> {
    async fn get_bill_by_id(&self, id: i32) -> BackendResult<Bill> {
        self.get(&format!("bills/{id}")).await
    }

    async fn list_bills(&self, query: ListQuery) -> BackendResult<ListPage<Bill>> {
        self.list("bills", query).await
    }
}

impl BillWriter for HttpBackend<'_> {
    async fn delete_bill(&self, id: i32) -> BackendResult<()> {
        self.delete(&format!("bills/{id}")).await
    }
}

impl JobReader for HttpBackend<'_> {
    async fn get_job_by_id(&self, id: i32) -> BackendResult<Job> {
        self.get(&format!("jobs/{id}")).await
    }

    async fn list_jobs(&self, query: ListQuery) -> BackendResult<ListPage<Job>> {
        self.list("jobs", query).await
    }
}

impl JobWriter for HttpBackend<'_> {
    async fn create_job(&self, new_job: &NewJob) -> BackendResult<Job> {
        self.create("jobs", new_job).await
    }

    async fn update_job(&self, id: i32, updates: &UpdateJob) -> BackendResult<Job> {
        self.update(&format!("jobs/{id}"), updates).await
    }

    async fn delete_job(&self, id: i32) -> BackendResult<()> {
        self.delete(&format!("jobs/{id}")).await
    }
}

impl WalletReader for HttpBackend<'_> {
    async fn get_wallet_by_id(&self, id: i32) -> BackendResult<Wallet> {
        self.get(&format!("wallets/{id}")).await
    }

    async fn list_wallets(&self, query: ListQuery) -> BackendResult<ListPage<Wallet>> {
        self.list("wallets", query).await
    }
}

impl WalletWriter for HttpBackend<'_> {
    async fn create_wallet(&self, new_wallet: &NewWallet) -> BackendResult<Wallet> {
        self.create("wallets", new_wallet).await
    }

    async fn update_wallet(&self, id: i32, updates: &UpdateWallet) -> BackendResult<Wallet> {
        self.update(&format!("wallets/{id}"), updates).await
    }

    async fn delete_wallet(&self, id: i32) -> BackendResult<()> {
        self.delete(&format!("wallets/{id}")).await
    }
}

impl ProductReader for HttpBackend<'_> {
    async fn get_product_by_id(&self, id: i32) -> BackendResult<Product> {
        self.get(&format!("products/{id}")).await
    }

    async fn list_products(&self, query: ListQuery) -> BackendResult<ListPage<Product>> {
        self.list("products", query).await
    }
}

impl ProductWriter for HttpBackend<'_> {
    async fn create_product(&self, payload: &ProductPayload) -> BackendResult<Product> {
        self.create("products", payload).await
    }

    async fn update_product(&self, id: i32, payload: &ProductPayload) -> BackendResult<Product> {
        self.update(&format!("products/{id}"), payload).await
    }

    async fn delete_product(&self, id: i32) -> BackendResult<()> {
        self.delete(&format!("products/{id}")).await
    }
}

impl BookingReader for HttpBackend<'_> {
    async fn get_booking_by_id(&self, id: i32) -> BackendResult<Booking> {
        self.get(&format!("bookings/{id}")).await
    }

    async fn list_bookings(&self, query: ListQuery) -> BackendResult<ListPage<Booking>> {
        self.list("bookings", query).await
    }
}

/// Credentials the sign-in form posts to the auth endpoint.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Bearer token minted by the API for a signed-in operator.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchanges operator credentials for an API bearer token. The only call
/// that goes out without an `Authorization` header.
pub async fn login(
    http: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> BackendResult<LoginResponse> {
    let response = http
        .post(format!("{}/auth/login", base_url.trim_end_matches('/')))
        .json(&LoginRequest { email, password })
        .send()
        .await?;

    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slashes() {
        let http = reqwest::Client::new();
        let backend = HttpBackend::new(&http, "https://api.example.test/", "tok");
        assert_eq!(backend.url("clients"), "https://api.example.test/clients");
        assert_eq!(
            backend.url("clients/123"),
            "https://api.example.test/clients/123"
        );
    }
}
