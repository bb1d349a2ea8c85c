//! Metrics and observability module
//!
//! Provides Prometheus-compatible metrics for monitoring the bridge.
//!
//! Key metrics exposed:
//! - Submissions handled, by outcome
//! - End-to-end relay latency
//! - Entity store requests by operation and status, with latency

pub mod exporter;
pub mod recorder;

pub use exporter::{install_recorder, metrics_route, render_metrics, MetricsError};
pub use recorder::{init_metrics, record_remote_request, record_submission};
