//! Request handlers for the API endpoints.

use std::sync::{Arc, MutexGuard, PoisonError};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::ErrorResponse;
use crate::devices::DeviceId;
use crate::home::clock::WallClock;
use crate::home::controller::HomeController;
use crate::home::types::{Command, Snapshot};

/// Locks the controller, recovering from a poisoned mutex since the engine
/// holds no invariants a panicked request could have broken mid-flight.
fn lock(state: &AppState) -> MutexGuard<'_, HomeController<WallClock>> {
    state.controller.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the current engine snapshot.
///
/// `GET /state` → 200 + `Snapshot` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(lock(&state).snapshot())
}

/// Applies one command and returns the updated snapshot.
///
/// `POST /command` with a tagged JSON body → 200 + `Snapshot` JSON
pub async fn post_command(
    State(state): State<Arc<AppState>>,
    Json(command): Json<Command>,
) -> Json<Snapshot> {
    Json(lock(&state).apply(command))
}

/// Returns the per-device detail view.
///
/// `GET /devices/{id}` → 200 + `DeviceDetail` JSON
/// `GET /devices/{unknown}` → 404 + `ErrorResponse`
pub async fn get_device(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let detail = DeviceId::parse(&id).and_then(|id| lock(&state).device_detail(id));
    match detail {
        Some(detail) => Ok(Json(detail)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("unknown device id \"{id}\""),
            }),
        )),
    }
}
