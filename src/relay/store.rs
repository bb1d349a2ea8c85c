//! Entity store abstraction
//!
//! The relay only needs three operations from the remote store. Keeping
//! them behind a trait lets the handler run against Base44 in production
//! and against an in-memory fake in tests.

use crate::relay::types::{CreatedReading, ReadingRecord, RemoteDevice};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Devices whose `device_id` equals the given value
    async fn find_devices(&self, device_id: &str) -> StoreResult<Vec<RemoteDevice>>;

    /// Persist a new reading and return the created entity
    async fn create_reading(&self, record: &ReadingRecord) -> StoreResult<CreatedReading>;

    /// Set `last_reading_at` on the device with internal id `id`
    async fn touch_device(&self, id: &str, last_reading_at: &str) -> StoreResult<()>;
}
