//! Ilex Bridge
//!
//! Relays sensor telemetry submitted by field devices to the Base44
//! entity store, checking each device's shared secret on the way through.

pub mod api;
pub mod base44;
pub mod config;
pub mod metrics;
pub mod relay;
