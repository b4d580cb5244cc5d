//! REST API over the dashboard engine.
//!
//! Provides three endpoints:
//! - `GET /state` — current snapshot (devices, power, history, log head)
//! - `POST /command` — apply one state-change command, returns the new snapshot
//! - `GET /devices/{id}` — per-device detail with its recent log entries

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{get, post};

use crate::home::clock::WallClock;
use crate::home::controller::HomeController;

/// Application state shared across all request handlers.
///
/// Commands mutate the controller, so it sits behind a mutex. The mutex is
/// a transport detail, not multi-user support: it serializes requests so
/// one command is processed to completion before the next, preserving the
/// engine's single-session model.
pub struct AppState {
    /// The engine, driven by the local wall clock.
    pub controller: Mutex<HomeController<WallClock>>,
}

impl AppState {
    /// Wraps a controller for serving.
    pub fn new(controller: HomeController<WallClock>) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        .route("/command", post(handlers::post_command))
        .route("/devices/{id}", get(handlers::get_device))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
