//! Application state for the web layer.

use std::sync::Arc;

use crate::rtt::RttClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// RTT API client.
    pub rtt: Arc<RttClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(rtt: RttClient) -> Self {
        Self { rtt: Arc::new(rtt) }
    }
}
