//! RealTime Trains API client.
//!
//! Handles authentication, timeouts, retries, and deserialization of
//! the upstream search and service responses.

mod client;
mod error;
mod types;

pub use client::{RttClient, RttConfig};
pub use error::RttError;
pub use types::{DepartureRecord, Destination, LocationDetail, SearchResponse};
