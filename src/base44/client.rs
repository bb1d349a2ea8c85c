use crate::config::BridgeConfig;
use crate::metrics::recorder::record_remote_request;
use crate::relay::store::{EntityStore, StoreError, StoreResult};
use crate::relay::types::{CreatedReading, DevicePatch, ReadingRecord, RemoteDevice};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Instant;
use tracing::debug;

const DEVICE_ENTITY: &str = "Device";
const READING_ENTITY: &str = "Reading";

/// Client for the Base44 entity REST API
#[derive(Clone)]
pub struct Base44Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Base44Client {
    pub fn new(config: &BridgeConfig) -> StoreResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn entity_url(&self, entity: &str) -> String {
        format!("{}/api/entities/{}", self.base_url, entity)
    }

    /// URL of a single entity, with `id` encoded as one path segment
    fn entity_item_url(&self, entity: &str, id: &str) -> StoreResult<Url> {
        let mut url = Url::parse(&self.entity_url(entity))
            .map_err(|e| StoreError::Transport(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Transport("invalid base URL: cannot hold a path".into()))?
            .push(id);
        Ok(url)
    }

    /// Send an authenticated request, failing on transport errors and non-2xx
    async fn send(&self, operation: &'static str, request: RequestBuilder) -> StoreResult<Response> {
        let started = Instant::now();
        let result = request
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                record_remote_request(operation, "error", started.elapsed());
                return Err(StoreError::Transport(e.to_string()));
            }
        };

        let status = response.status();
        record_remote_request(operation, status.as_str(), started.elapsed());
        debug!(operation, status = status.as_u16(), "Base44 responded");

        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl EntityStore for Base44Client {
    async fn find_devices(&self, device_id: &str) -> StoreResult<Vec<RemoteDevice>> {
        let filter = json!({ "device_id": device_id }).to_string();
        let request = self
            .http
            .get(self.entity_url(DEVICE_ENTITY))
            .query(&[("filter", filter)]);

        let response = self.send("find_devices", request).await?;
        Self::decode(response).await
    }

    async fn create_reading(&self, record: &ReadingRecord) -> StoreResult<CreatedReading> {
        let request = self.http.post(self.entity_url(READING_ENTITY)).json(record);

        let response = self.send("create_reading", request).await?;
        Self::decode(response).await
    }

    async fn touch_device(&self, id: &str, last_reading_at: &str) -> StoreResult<()> {
        let patch = DevicePatch {
            last_reading_at: last_reading_at.to_string(),
        };
        let request = self.http.patch(self.entity_item_url(DEVICE_ENTITY, id)?).json(&patch);

        self.send("touch_device", request).await?;
        Ok(())
    }
}
