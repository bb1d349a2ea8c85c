//! In-memory entity store for unit tests

use crate::relay::store::{EntityStore, StoreError, StoreResult};
use crate::relay::types::{CreatedReading, DevicePatch, ReadingRecord, RemoteDevice};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeStore {
    pub devices: Vec<RemoteDevice>,
    pub fail_lookup: bool,
    pub fail_create: bool,
    pub fail_touch: bool,
    pub lookups: Mutex<Vec<String>>,
    pub created: Mutex<Vec<ReadingRecord>>,
    pub patches: Mutex<Vec<(String, DevicePatch)>>,
}

impl FakeStore {
    pub fn with_device(id: &str, device_id: &str, secret: &str) -> Self {
        Self {
            devices: vec![RemoteDevice {
                id: id.to_string(),
                device_id: Some(device_id.to_string()),
                device_secret: Some(secret.to_string()),
            }],
            ..Default::default()
        }
    }

    pub fn created(&self) -> Vec<ReadingRecord> {
        self.created.lock().unwrap().clone()
    }

    pub fn patches(&self) -> Vec<(String, DevicePatch)> {
        self.patches.lock().unwrap().clone()
    }
}

#[async_trait]
impl EntityStore for FakeStore {
    async fn find_devices(&self, device_id: &str) -> StoreResult<Vec<RemoteDevice>> {
        self.lookups.lock().unwrap().push(device_id.to_string());
        if self.fail_lookup {
            return Err(StoreError::Transport("connect ECONNREFUSED".into()));
        }
        Ok(self
            .devices
            .iter()
            .filter(|d| d.device_id.as_deref() == Some(device_id))
            .cloned()
            .collect())
    }

    async fn create_reading(&self, record: &ReadingRecord) -> StoreResult<CreatedReading> {
        if self.fail_create {
            return Err(StoreError::Transport("socket hang up".into()));
        }
        let mut created = self.created.lock().unwrap();
        created.push(record.clone());
        Ok(CreatedReading {
            id: format!("reading-{}", created.len()),
        })
    }

    async fn touch_device(&self, id: &str, last_reading_at: &str) -> StoreResult<()> {
        if self.fail_touch {
            return Err(StoreError::Status { status: 502 });
        }
        self.patches.lock().unwrap().push((
            id.to_string(),
            DevicePatch {
                last_reading_at: last_reading_at.to_string(),
            },
        ));
        Ok(())
    }
}
