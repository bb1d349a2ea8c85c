//! Base44 entity store client
//!
//! Talks to the `/api/entities/{Entity}` REST surface with bearer
//! authentication. Only the three calls the relay needs are implemented.

mod client;

pub use client::Base44Client;
