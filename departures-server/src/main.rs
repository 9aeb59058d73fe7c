use std::net::SocketAddr;

use departures_server::rtt::{RttClient, RttConfig};
use departures_server::web::{AppState, create_router};

/// Port used when `PORT` is unset or unparseable.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Get credentials from environment
    let username = std::env::var("RTT_API_USERNAME").unwrap_or_else(|_| {
        eprintln!("Warning: RTT_API_USERNAME not set. API calls will fail.");
        String::new()
    });
    let password = std::env::var("RTT_API_PASSWORD").unwrap_or_else(|_| {
        eprintln!("Warning: RTT_API_PASSWORD not set. API calls will fail.");
        String::new()
    });

    let config = RttConfig::new(&username, &password);
    let client = RttClient::new(config).expect("Failed to create RTT client");

    let state = AppState::new(client);
    let app = create_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Server running on port {port}");
    println!();
    println!("API Endpoints:");
    println!("  GET /healthcheck");
    println!("  GET /api/v1/departures/from/:fromStation");
    println!("  GET /api/v1/departures/from/:fromStation/to/:toStation");
    println!("  GET /api/v1/service/:serviceId/runDate/:runDate");
    println!("  GET /api/v1/xbar/from/:from/to/:to/max_departures/:n[/return_after/:hhmm]");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
