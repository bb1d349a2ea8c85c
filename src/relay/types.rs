//! Relay data model
//!
//! Everything here lives for exactly one request: the inbound submission,
//! the device record looked up in Base44, and the reading written back.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional sensor values a device may report.
///
/// Values are forwarded exactly as the device sent them, whatever their JSON
/// type. Absent values are forwarded as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub temperature_c: Option<Value>,
    pub humidity_pct: Option<Value>,
    pub pressure_hpa: Option<Value>,
    pub co_ppm: Option<Value>,
    pub pm2_5: Option<Value>,
    pub smoke_detected: Option<Value>,
    pub battery_pct: Option<Value>,
    pub gps_lat: Option<Value>,
    pub gps_lon: Option<Value>,
}

/// Loose truthiness: `null`, `false`, `0` and `""` count as unset
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Payload posted by a device to `POST /api/reading`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetrySubmission {
    #[serde(default)]
    pub device_id: Option<String>,

    #[serde(default)]
    pub device_secret: Option<String>,

    /// Device-supplied timestamp; the bridge's clock is used when absent
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(flatten)]
    pub readings: SensorReadings,
}

impl TelemetrySubmission {
    /// Device id and secret, if both are present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let device_id = self.device_id.as_deref().filter(|s| !s.is_empty())?;
        let secret = self.device_secret.as_deref().filter(|s| !s.is_empty())?;
        Some((device_id, secret))
    }

    /// Timestamp to stamp the reading with
    pub fn resolve_timestamp(&self) -> String {
        self.timestamp
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(now_timestamp)
    }
}

/// Current UTC time, e.g. `2024-05-01T12:30:00.123Z`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Device entity as stored in Base44
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteDevice {
    /// Base44's internal entity id
    pub id: String,

    #[serde(default)]
    pub device_id: Option<String>,

    #[serde(default)]
    pub device_secret: Option<String>,
}

impl RemoteDevice {
    /// Exact comparison; a device with no stored secret never matches
    pub fn secret_matches(&self, candidate: &str) -> bool {
        self.device_secret.as_deref() == Some(candidate)
    }
}

/// Reading entity body sent to Base44
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Internal id of the owning device, not the device's own identifier
    pub device_id: String,

    pub timestamp: String,

    #[serde(flatten)]
    pub readings: SensorReadings,
}

impl ReadingRecord {
    pub fn new(device: &RemoteDevice, timestamp: String, readings: &SensorReadings) -> Self {
        let mut readings = readings.clone();
        readings.smoke_detected = match readings.smoke_detected.take() {
            Some(value) if is_truthy(&value) => Some(value),
            _ => Some(Value::Bool(false)),
        };

        Self {
            device_id: device.id.clone(),
            timestamp,
            readings,
        }
    }
}

/// The part of Base44's create response the bridge cares about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedReading {
    pub id: String,
}

/// Patch body marking when a device last reported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePatch {
    pub last_reading_at: String,
}

/// Outcome of a successfully relayed submission
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub reading_id: String,
}
