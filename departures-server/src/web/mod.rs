//! Web layer for the departure board proxy.
//!
//! Provides the JSON endpoints and the xbar plain-text endpoint.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
