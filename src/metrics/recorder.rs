//! Metrics recorder for relay operations
//!
//! Without an installed recorder these calls are no-ops, so the relay can
//! record unconditionally.

use ::metrics::{counter, describe_counter, describe_histogram, histogram};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize metric descriptions (call once at startup)
pub fn init_metrics() {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    describe_counter!(
        "bridge_submissions_total",
        "Telemetry submissions handled, by outcome"
    );
    describe_histogram!(
        "bridge_submission_duration_seconds",
        "Time to relay one submission end to end"
    );
    describe_counter!(
        "bridge_remote_requests_total",
        "Requests made to the entity store, by operation and status"
    );
    describe_histogram!(
        "bridge_remote_request_duration_seconds",
        "Entity store request latency"
    );
}

// ============== Submissions ==============

/// Record a handled submission
pub fn record_submission(outcome: &'static str, duration: Duration) {
    counter!("bridge_submissions_total", "outcome" => outcome).increment(1);
    histogram!("bridge_submission_duration_seconds").record(duration.as_secs_f64());
}

// ============== Entity Store ==============

/// Record one outbound request.
///
/// `status` is the HTTP status code, or `"error"` when no response arrived.
pub fn record_remote_request(operation: &'static str, status: &str, duration: Duration) {
    counter!("bridge_remote_requests_total", "operation" => operation, "status" => status.to_string())
        .increment(1);
    histogram!("bridge_remote_request_duration_seconds", "operation" => operation)
        .record(duration.as_secs_f64());
}
