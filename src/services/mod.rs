//! Services coordinating console workflows.

use thiserror::Error;

use crate::backend::errors::BackendError;

pub mod bills;
pub mod bookings;
pub mod clients;
pub mod jobs;
pub mod main;
pub mod products;
pub mod wallets;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
