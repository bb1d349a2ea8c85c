//! Telemetry relay
//!
//! Validates a device submission and forwards it to the entity store:
//! - presence check on `device_id` / `device_secret`
//! - device lookup and exact secret comparison
//! - reading creation followed by a `last_reading_at` update on the device
//!
//! Nothing is held between requests.

pub mod error;
pub mod handler;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{RelayError, RelayResult};
pub use handler::RelayHandler;
pub use store::{EntityStore, StoreError, StoreResult};
pub use types::{
    CreatedReading, DevicePatch, ReadingRecord, Receipt, RemoteDevice, SensorReadings,
    TelemetrySubmission,
};
