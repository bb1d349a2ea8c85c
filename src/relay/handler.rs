//! Relay handler
//!
//! Takes one telemetry submission through the fixed sequence: check the
//! credentials are present, look the device up, compare secrets, write the
//! reading, then stamp the device with the reading time. Each step gates
//! the next and nothing is retried.

use crate::metrics::recorder::record_submission;
use crate::relay::error::{RelayError, RelayResult};
use crate::relay::store::EntityStore;
use crate::relay::types::{ReadingRecord, Receipt, TelemetrySubmission};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Relays device submissions to an [`EntityStore`]
#[derive(Clone)]
pub struct RelayHandler {
    store: Arc<dyn EntityStore>,
}

impl RelayHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Relay a submission and record its outcome
    pub async fn handle_submission(&self, submission: TelemetrySubmission) -> RelayResult<Receipt> {
        let started = Instant::now();
        let result = self.relay(submission).await;

        let outcome = match &result {
            Ok(_) => "stored",
            Err(e) => e.outcome(),
        };
        record_submission(outcome, started.elapsed());

        result
    }

    async fn relay(&self, submission: TelemetrySubmission) -> RelayResult<Receipt> {
        let (device_id, secret) = submission.credentials().ok_or_else(|| {
            warn!("Rejected submission without device_id or device_secret");
            RelayError::missing_credentials()
        })?;

        info!(device_id, "Telemetry received");

        let devices = self
            .store
            .find_devices(device_id)
            .await
            .map_err(|e| remote_failure(device_id, "lookup", e.into()))?;

        let device = devices.into_iter().next().ok_or_else(|| {
            warn!(device_id, "Unknown device");
            RelayError::DeviceNotFound
        })?;

        if !device.secret_matches(secret) {
            warn!(device_id, "Device secret mismatch");
            return Err(RelayError::Unauthorized);
        }

        let timestamp = submission.resolve_timestamp();
        let record = ReadingRecord::new(&device, timestamp.clone(), &submission.readings);

        let created = self
            .store
            .create_reading(&record)
            .await
            .map_err(|e| remote_failure(device_id, "create", e.into()))?;

        self.store
            .touch_device(&device.id, &timestamp)
            .await
            .map_err(|e| remote_failure(device_id, "update", e.into()))?;

        info!(device_id, reading_id = %created.id, "Reading stored");

        Ok(Receipt {
            reading_id: created.id,
        })
    }
}

fn remote_failure(device_id: &str, step: &str, err: RelayError) -> RelayError {
    error!(device_id, step, "Entity store call failed: {}", err);
    err
}
